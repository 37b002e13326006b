use serde::Serialize;

pub const MIN_KNOWLEDGE: u8 = 1;
pub const MAX_KNOWLEDGE: u8 = 100;

/// One entry of the technology list as submitted. The knowledge level arrives
/// either as a number or as its textual form, depending on the input surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTech {
    pub title: String,
    pub knowledge: RawKnowledge,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawKnowledge {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tech {
    pub title: String,
    pub knowledge: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeError {
    NotANumber,
    OutOfRange,
}

/// Best-effort coercion: numeric strings are accepted, fractional or
/// non-numeric values are not. Range check happens after coercion.
pub fn coerce_knowledge(raw: &RawKnowledge) -> Result<u8, KnowledgeError> {
    let value = match raw {
        RawKnowledge::Number(n) => *n,
        RawKnowledge::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| KnowledgeError::NotANumber)?,
    };

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(KnowledgeError::NotANumber);
    }
    if value < f64::from(MIN_KNOWLEDGE) || value > f64::from(MAX_KNOWLEDGE) {
        return Err(KnowledgeError::OutOfRange);
    }

    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::{coerce_knowledge, KnowledgeError, RawKnowledge};

    #[test]
    fn coerce_knowledge_accepts_numbers_and_numeric_strings() {
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Number(80.0)),
            Ok(80)
        ));
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Text(" 42 ".to_string())),
            Ok(42)
        ));
    }

    #[test]
    fn coerce_knowledge_rejects_out_of_range() {
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Text("150".to_string())),
            Err(KnowledgeError::OutOfRange)
        ));
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Number(0.0)),
            Err(KnowledgeError::OutOfRange)
        ));
    }

    #[test]
    fn coerce_knowledge_rejects_non_numeric() {
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Text("expert".to_string())),
            Err(KnowledgeError::NotANumber)
        ));
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Number(49.5)),
            Err(KnowledgeError::NotANumber)
        ));
        assert!(matches!(
            coerce_knowledge(&RawKnowledge::Number(f64::NAN)),
            Err(KnowledgeError::NotANumber)
        ));
    }
}
