use crate::store::ObjectStore;
use crate::UploadError;
use enroll_core::{validate, FieldErrorSet, NormalizedSubmission, RawSubmission};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission is invalid: {0}")]
    Invalid(FieldErrorSet),
    /// The record validated fine; only persistence failed. It stays available
    /// for display.
    #[error("avatar upload failed: {source}")]
    Upload {
        submission: Box<NormalizedSubmission>,
        #[source]
        source: UploadError,
    },
}

/// Validate, then upload the avatar under its original file name, then hand
/// the normalized record back for display. Exactly one upload call per
/// successful validation; none at all when validation fails.
pub fn submit(
    store: &dyn ObjectStore,
    raw: RawSubmission,
) -> Result<NormalizedSubmission, SubmitError> {
    let submission = validate(raw).map_err(SubmitError::Invalid)?;

    if let Err(source) = store.upload(&submission.avatar.file_name, &submission.avatar.bytes) {
        return Err(SubmitError::Upload {
            submission: Box::new(submission),
            source,
        });
    }

    Ok(submission)
}
