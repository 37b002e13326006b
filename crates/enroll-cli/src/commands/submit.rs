use crate::commands::check::{print_field_errors, print_submission};
use crate::commands::SubmissionArgs;
use crate::error::invalid_input;
use anyhow::Result;
use enroll_config::AppConfig;
use enroll_upload::{submit, HttpObjectStore, ObjectStore as _, SubmitError};
use tracing::debug;

pub fn run(config: &AppConfig, json: bool, args: SubmissionArgs) -> Result<()> {
    let raw = args.into_raw()?;
    let store = HttpObjectStore::new(
        config.storage.url.clone(),
        config.storage.access_key.clone(),
        config.storage.bucket.clone(),
    );
    debug!(store = store.store_name(), bucket = %config.storage.bucket, "submitting");

    match submit(&store, raw) {
        Ok(submission) => {
            debug!(key = %submission.avatar.file_name, "avatar uploaded");
            print_submission(json, &submission)
        }
        Err(SubmitError::Invalid(errors)) => {
            print_field_errors(json, &errors)?;
            Err(invalid_input(format!(
                "submission failed validation ({})",
                errors
            )))
        }
        Err(SubmitError::Upload { submission, source }) => {
            // The record is still valid and displayable; only persistence
            // failed.
            print_submission(json, &submission)?;
            Err(anyhow::Error::new(source).context("upload avatar"))
        }
    }
}
