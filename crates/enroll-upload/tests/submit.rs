use enroll_core::{AvatarUpload, RawKnowledge, RawSubmission, RawTech, ValidationErrorKind};
use enroll_upload::{submit, ObjectStore, SubmitError, UploadError};
use std::cell::RefCell;

struct RecordingStore {
    uploads: RefCell<Vec<(String, usize)>>,
    fail: bool,
}

impl RecordingStore {
    fn new(fail: bool) -> Self {
        Self {
            uploads: RefCell::new(Vec::new()),
            fail,
        }
    }
}

impl ObjectStore for RecordingStore {
    fn store_name(&self) -> &'static str {
        "recording"
    }

    fn upload(&self, key: &str, bytes: &[u8]) -> enroll_upload::Result<()> {
        self.uploads
            .borrow_mut()
            .push((key.to_string(), bytes.len()));
        if self.fail {
            return Err(UploadError::Rejected("503 Service Unavailable".to_string()));
        }
        Ok(())
    }
}

fn valid_submission() -> RawSubmission {
    RawSubmission {
        avatar: Some(AvatarUpload::new("me.png", vec![7u8; 256])),
        name: "jane doe".to_string(),
        email: "jane@gmail.com".to_string(),
        password: "hunter22".to_string(),
        techs: vec![
            RawTech {
                title: "Rust".to_string(),
                knowledge: RawKnowledge::Number(90.0),
            },
            RawTech {
                title: "SQL".to_string(),
                knowledge: RawKnowledge::Text("70".to_string()),
            },
        ],
    }
}

#[test]
fn submit_uploads_avatar_under_its_file_name() {
    let store = RecordingStore::new(false);
    let submission = submit(&store, valid_submission()).expect("submit");
    assert_eq!(submission.name, "Jane Doe");

    let uploads = store.uploads.borrow();
    assert_eq!(uploads.as_slice(), &[("me.png".to_string(), 256)]);
}

#[test]
fn submit_skips_upload_when_validation_fails() {
    let store = RecordingStore::new(false);
    let mut raw = valid_submission();
    raw.email = "jane@yahoo.com".to_string();

    let err = submit(&store, raw).unwrap_err();
    match err {
        SubmitError::Invalid(errors) => {
            assert_eq!(errors.get("email"), Some(ValidationErrorKind::Domain));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert!(store.uploads.borrow().is_empty());
}

#[test]
fn failed_upload_keeps_the_normalized_record() {
    let store = RecordingStore::new(true);
    let err = submit(&store, valid_submission()).unwrap_err();
    match err {
        SubmitError::Upload { submission, source } => {
            assert_eq!(submission.name, "Jane Doe");
            assert_eq!(submission.techs.len(), 2);
            assert!(matches!(source, UploadError::Rejected(_)));
        }
        other => panic!("expected Upload, got {other:?}"),
    }
    assert_eq!(store.uploads.borrow().len(), 1);
}
