/// Collapses whitespace runs, then title-cases every word: first character
/// uppercased, the remainder lowercased. Returns `None` when nothing but
/// whitespace is left.
pub fn normalize_name(value: &str) -> Option<String> {
    let mut words = value.split_whitespace().peekable();
    words.peek()?;

    let mut out = String::with_capacity(value.len());
    for word in words {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for ch in chars {
                out.extend(ch.to_lowercase());
            }
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn normalize_name_title_cases_words() {
        let value = normalize_name("john smith").unwrap();
        assert_eq!(value, "John Smith");
    }

    #[test]
    fn normalize_name_collapses_repeated_whitespace() {
        let value = normalize_name("  john   RONALD  smith ").unwrap();
        assert_eq!(value, "John Ronald Smith");
    }

    #[test]
    fn normalize_name_lowercases_word_tails() {
        let value = normalize_name("McDONALD").unwrap();
        assert_eq!(value, "Mcdonald");
    }

    #[test]
    fn normalize_name_rejects_blank() {
        assert!(normalize_name("   ").is_none());
        assert!(normalize_name("").is_none());
    }
}
