pub mod validation;

pub use validation::{validate, MIN_PASSWORD_CHARS, MIN_TECH_COUNT};
