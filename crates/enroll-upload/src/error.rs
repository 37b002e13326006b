use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    #[error("storage rejected upload: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, UploadError>;
