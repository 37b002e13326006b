use serde::Serialize;
use thiserror::Error;

/// One message per kind; the `Display` text is the user-visible message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("This field is required")]
    Required,
    #[error("Invalid e-mail format")]
    Format,
    #[error("Email must be from gmail")]
    Domain,
    #[error("Password must be at least 6 characters")]
    Length,
    #[error("Maximum size 5MB")]
    Size,
    #[error("Knowledge must be between 1 and 100")]
    Range,
    #[error("Knowledge must be a number")]
    Type,
    #[error("Must have at least two technologies")]
    MinCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every rule violated by one submission, in field evaluation order.
/// Paths are dotted and indexed, e.g. `techs[1].title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    errors: Vec<FieldError>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, kind: ValidationErrorKind) {
        self.errors.push(FieldError {
            path: path.into(),
            kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn get(&self, path: &str) -> Option<ValidationErrorKind> {
        self.errors
            .iter()
            .find(|err| err.path == path)
            .map(|err| err.kind)
    }
}

impl std::fmt::Display for FieldErrorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} invalid field(s)", self.errors.len())
    }
}

impl IntoIterator for FieldErrorSet {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("FieldError", 2)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl Serialize for FieldErrorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.errors.iter())
    }
}
