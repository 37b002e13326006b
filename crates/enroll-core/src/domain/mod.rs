pub mod email;
pub mod name;
pub mod submission;
pub mod tech;

pub use email::{is_valid_email, normalize_email, GMAIL_SUFFIX};
pub use name::normalize_name;
pub use submission::{
    AvatarFile, AvatarUpload, NormalizedSubmission, RawSubmission, MAX_AVATAR_BYTES,
};
pub use tech::{coerce_knowledge, KnowledgeError, RawKnowledge, RawTech, Tech};
