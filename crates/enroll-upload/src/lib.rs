pub mod client;
pub mod error;
pub mod store;
pub mod submit;

pub use client::HttpObjectStore;
pub use error::{Result, UploadError};
pub use store::ObjectStore;
pub use submit::{submit, SubmitError};
