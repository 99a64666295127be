// Stricter than URL parsing: names are file stems too, so '?', '#', '\' and bad '%' escapes fail.
pub fn invalid_url(name: &str) -> bool {
    name.is_empty()
        || name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '.' | ' ' | '?' | '#') || c.is_control())
        || has_malformed_escape(name)
}

pub fn is_valid_flight_name(name: &str) -> bool {
    !invalid_url(name)
}

fn has_malformed_escape(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_separators() {
        assert!(invalid_url(""));
        assert!(invalid_url("a/b"));
        assert!(invalid_url("a.b"));
        assert!(invalid_url("a b"));
        assert!(invalid_url("a\\b"));
    }

    #[test]
    fn test_accepts_plain_names() {
        assert!(!invalid_url("abc"));
        assert!(is_valid_flight_name("launch-2024_03"));
        assert!(is_valid_flight_name("Überflug"));
    }

    #[test]
    fn test_rejects_url_syntax() {
        assert!(invalid_url("a?b"));
        assert!(invalid_url("a#b"));
        assert!(invalid_url("tab\there"));
    }

    #[test]
    fn test_percent_escapes() {
        assert!(is_valid_flight_name("a%20b"));
        assert!(invalid_url("a%2"));
        assert!(invalid_url("100%"));
        assert!(invalid_url("a%zzb"));
    }
}
