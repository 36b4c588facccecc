//! Token substitution and output cleanup shared by the widgets.

use std::sync::OnceLock;

use regex::Regex;

/// Replace `{token}` placeholders in a template.
///
/// Substituted values are never rescanned, so a value containing a
/// placeholder renders literally.
pub fn substitute(template: &str, parts: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        for (token, value) in parts {
            if tail.starts_with(token) {
                out.push_str(value);
                rest = &tail[token.len()..];
                continue 'scan;
            }
        }

        out.push('{');
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

/// Collapse runs of blank lines left behind by empty template slots
/// into a single line break.
pub fn collapse_line_breaks(value: &str) -> String {
    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();
    let pattern = BLANK_RUNS.get_or_init(|| {
        Regex::new(r"[\r\n]{4,}|\n{2,}|\r{2,}")
            .unwrap_or_else(|e| panic!("invalid line break pattern: {e}"))
    });

    pattern.replace_all(value, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn substitutes_tokens() {
        let result = substitute(
            "{icon}\n{content}\n{dismissing}",
            &[("{icon}", "<i></i>"), ("{content}", "Hello"), ("{dismissing}", "")],
        );

        assert_eq!(result, "<i></i>\nHello\n");
    }

    #[test]
    fn unknown_tokens_are_kept() {
        assert_eq!(substitute("{items} {other}", &[("{items}", "x")]), "x {other}");
    }

    #[test]
    fn values_are_not_rescanned() {
        assert_eq!(substitute("{a}{b}", &[("{a}", "{b}"), ("{b}", "2")]), "{b}2");
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(collapse_line_breaks("a\n\n\nb\nc"), "a\nb\nc");
        assert_eq!(collapse_line_breaks("a\r\n\r\nb"), "a\nb");
    }
}
