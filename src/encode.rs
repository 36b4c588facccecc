//! HTML escaping for text content and attribute values.
//!
//! Escaping is entity-preserving: a `&` that already starts a valid
//! character reference (`&amp;`, `&#039;`, `&#x27;`) is left alone, so
//! encoding an already-encoded string is a no-op.

use std::sync::OnceLock;

use regex::Regex;

fn entity_pattern() -> &'static Regex {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    ENTITY.get_or_init(|| {
        Regex::new(r"^&(?:[a-zA-Z][a-zA-Z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")
            .unwrap_or_else(|e| panic!("invalid entity pattern: {e}"))
    })
}

/// Escape text content for safe interpolation between tags.
pub fn content(value: &str) -> String {
    escape(value)
}

/// Escape an attribute value for interpolation inside double quotes.
pub fn attribute(value: &str) -> String {
    escape(value)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for (i, c) in value.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '&' if entity_pattern().is_match(&value[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(content("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(content(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(content("it's"), "it&#039;s");
    }

    #[test]
    fn preserves_existing_entities() {
        assert_eq!(content("Encode &amp; Labels"), "Encode &amp; Labels");
        assert_eq!(content("&#9742;"), "&#9742;");
        assert_eq!(content("&#x1F600;"), "&#x1F600;");
    }

    #[test]
    fn encoding_is_idempotent() {
        let once = content("fish & chips <now>");
        assert_eq!(content(&once), once);
    }

    #[test]
    fn bare_ampersand_is_escaped() {
        assert_eq!(content("a & b"), "a &amp; b");
        assert_eq!(content("a &bogus b"), "a &amp;bogus b");
        assert_eq!(content("trailing &"), "trailing &amp;");
    }
}
