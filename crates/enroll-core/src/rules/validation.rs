use crate::domain::email::{is_valid_email, normalize_email, GMAIL_SUFFIX};
use crate::domain::name::normalize_name;
use crate::domain::submission::{
    AvatarFile, AvatarUpload, NormalizedSubmission, RawSubmission, MAX_AVATAR_BYTES,
};
use crate::domain::tech::{coerce_knowledge, KnowledgeError, RawTech, Tech};
use crate::error::{FieldErrorSet, ValidationErrorKind};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_TECH_COUNT: usize = 2;

/// Checks every field, collecting one entry per violated rule. No rule
/// depends on another, so evaluation order never changes the outcome; it only
/// fixes the order entries appear in.
pub fn validate(raw: RawSubmission) -> Result<NormalizedSubmission, FieldErrorSet> {
    let mut errors = FieldErrorSet::new();

    let avatar = validate_avatar(raw.avatar, &mut errors);
    let name = validate_name(&raw.name, &mut errors);
    let email = validate_email(&raw.email, &mut errors);
    let password = validate_password(raw.password, &mut errors);
    let techs = validate_techs(raw.techs, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NormalizedSubmission {
        avatar: avatar.expect("avatar present when error set is empty"),
        name: name.expect("name present when error set is empty"),
        email: email.expect("email present when error set is empty"),
        password: password.expect("password present when error set is empty"),
        techs,
    })
}

fn validate_avatar(
    avatar: Option<AvatarUpload>,
    errors: &mut FieldErrorSet,
) -> Option<AvatarFile> {
    let Some(upload) = avatar else {
        errors.push("avatar", ValidationErrorKind::Required);
        return None;
    };
    if upload.bytes.len() > MAX_AVATAR_BYTES {
        errors.push("avatar", ValidationErrorKind::Size);
        return None;
    }
    Some(AvatarFile::new(upload.file_name, upload.bytes))
}

fn validate_name(name: &str, errors: &mut FieldErrorSet) -> Option<String> {
    match normalize_name(name) {
        Some(normalized) => Some(normalized),
        None => {
            errors.push("name", ValidationErrorKind::Required);
            None
        }
    }
}

fn validate_email(email: &str, errors: &mut FieldErrorSet) -> Option<String> {
    let Some(normalized) = normalize_email(email) else {
        errors.push("email", ValidationErrorKind::Required);
        return None;
    };
    if !is_valid_email(&normalized) {
        errors.push("email", ValidationErrorKind::Format);
        return None;
    }
    if !normalized.ends_with(GMAIL_SUFFIX) {
        errors.push("email", ValidationErrorKind::Domain);
        return None;
    }
    Some(normalized)
}

fn validate_password(password: String, errors: &mut FieldErrorSet) -> Option<String> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.push("password", ValidationErrorKind::Length);
        return None;
    }
    Some(password)
}

fn validate_techs(techs: Vec<RawTech>, errors: &mut FieldErrorSet) -> Vec<Tech> {
    if techs.len() < MIN_TECH_COUNT {
        errors.push("techs", ValidationErrorKind::MinCount);
    }

    let mut out = Vec::with_capacity(techs.len());
    for (index, entry) in techs.into_iter().enumerate() {
        let title = entry.title.trim();
        let title = if title.is_empty() {
            errors.push(
                format!("techs[{index}].title"),
                ValidationErrorKind::Required,
            );
            None
        } else {
            Some(title.to_string())
        };

        let knowledge = match coerce_knowledge(&entry.knowledge) {
            Ok(level) => Some(level),
            Err(KnowledgeError::NotANumber) => {
                errors.push(
                    format!("techs[{index}].knowledge"),
                    ValidationErrorKind::Type,
                );
                None
            }
            Err(KnowledgeError::OutOfRange) => {
                errors.push(
                    format!("techs[{index}].knowledge"),
                    ValidationErrorKind::Range,
                );
                None
            }
        };

        if let (Some(title), Some(knowledge)) = (title, knowledge) {
            out.push(Tech { title, knowledge });
        }
    }

    out
}
