use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use enroll_core::{AvatarUpload, RawKnowledge, RawTech};
use std::fs;
use std::path::Path;

/// `TITLE:KNOWLEDGE`, e.g. `Rust:90`. The knowledge part stays textual here;
/// coercion is the validator's job so a bad level becomes a field error, not
/// an argument error.
pub fn parse_tech(value: &str) -> Result<RawTech> {
    let Some((title, knowledge)) = value.split_once(':') else {
        return Err(invalid_input(format!(
            "tech entry '{value}' must look like TITLE:KNOWLEDGE"
        )));
    };
    Ok(RawTech {
        title: title.to_string(),
        knowledge: RawKnowledge::Text(knowledge.to_string()),
    })
}

pub fn read_avatar(path: &Path) -> Result<AvatarUpload> {
    let bytes =
        fs::read(path).with_context(|| format!("read avatar file {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid_input(format!("avatar path {} has no file name", path.display())))?
        .to_string();
    Ok(AvatarUpload::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::parse_tech;
    use enroll_core::RawKnowledge;

    #[test]
    fn parse_tech_splits_on_first_colon() {
        let tech = parse_tech("Rust:90").expect("parse");
        assert_eq!(tech.title, "Rust");
        assert_eq!(tech.knowledge, RawKnowledge::Text("90".to_string()));

        let tech = parse_tech("C:GTK:3").expect("parse");
        assert_eq!(tech.title, "C");
        assert_eq!(tech.knowledge, RawKnowledge::Text("GTK:3".to_string()));
    }

    #[test]
    fn parse_tech_rejects_missing_separator() {
        assert!(parse_tech("Rust").is_err());
    }
}
