use crate::domain::tech::{RawTech, Tech};
use serde::Serialize;

pub const MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Field values as gathered from the input surface; consumed by one
/// validation attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSubmission {
    pub avatar: Option<AvatarUpload>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<RawTech>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// The avatar after validation. Bytes stay available for the upload call but
/// never appear in the echoed record; the size travels instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarFile {
    pub file_name: String,
    pub size_bytes: u64,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes: bytes.len() as u64,
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSubmission {
    pub avatar: AvatarFile,
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<Tech>,
}
