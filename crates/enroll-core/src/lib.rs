pub mod domain;
pub mod error;
pub mod rules;

pub use domain::*;
pub use error::{FieldError, FieldErrorSet, ValidationErrorKind};
pub use rules::validate;
