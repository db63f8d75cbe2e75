//! `${varName}` token substitution.
//!
//! Recorded arguments may reference values stored earlier in the run. Every
//! well-formed `${identifier}` token becomes a runtime
//! `$this->getStoredValue("identifier")` call spliced between the literal
//! fragments; all other text (including stray `$` sequences) passes through
//! verbatim.

use std::sync::OnceLock;

use regex::Regex;
use sideways_php_gen::Expr;

/// One fragment of a tokenized argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPart {
    /// Literal text, emitted as-is
    Lit(String),
    /// A `${name}` token, emitted as a stored-value fetch
    Var(String),
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)]
    RE.get_or_init(|| Regex::new(r"\$\{([a-zA-Z0-9_]*)\}").unwrap())
}

/// Split text into literal and token parts, in order.
#[must_use]
pub fn split_tokens(text: &str) -> Vec<TextPart> {
    let mut parts = Vec::new();
    let mut last = 0;
    for caps in token_re().captures_iter(text) {
        #[allow(clippy::unwrap_used)]
        let m = caps.get(0).unwrap();
        if m.start() > last {
            parts.push(TextPart::Lit(text[last..m.start()].to_string()));
        }
        parts.push(TextPart::Var(caps[1].to_string()));
        last = m.end();
    }
    if last < text.len() || parts.is_empty() {
        parts.push(TextPart::Lit(text[last..].to_string()));
    }
    parts
}

/// Substitute tokens in `text`, fetching stored values through `$this`.
#[must_use]
pub fn substitute(text: &str) -> Expr {
    substitute_with(text, &Expr::this())
}

/// Substitute tokens in `text`, fetching stored values through the given
/// receiver (`$testCase` inside wait closures).
#[must_use]
pub fn substitute_with(text: &str, recv: &Expr) -> Expr {
    let mut exprs = split_tokens(text)
        .into_iter()
        .filter_map(|part| match part {
            TextPart::Lit(lit) if lit.is_empty() => None,
            TextPart::Lit(lit) => Some(Expr::str(lit)),
            TextPart::Var(name) => Some(
                recv.clone()
                    .method("getStoredValue", vec![Expr::str(name)]),
            ),
        })
        .collect::<Vec<_>>();

    match exprs.len() {
        0 => Expr::str(""),
        1 => exprs.remove(0),
        _ => {
            let first = exprs.remove(0);
            exprs.into_iter().fold(first, Expr::concat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideways_php_gen::render_expr;

    #[test]
    fn no_tokens_is_identity() {
        assert_eq!(render_expr(&substitute("plain text")), "\"plain text\"");
        assert_eq!(render_expr(&substitute("")), "\"\"");
    }

    #[test]
    fn single_token() {
        assert_eq!(
            render_expr(&substitute("${user}")),
            "$this->getStoredValue(\"user\")"
        );
    }

    #[test]
    fn interleaved_tokens() {
        assert_eq!(
            render_expr(&substitute("pre ${x} mid ${y} post")),
            "\"pre \" . $this->getStoredValue(\"x\") . \" mid \" . $this->getStoredValue(\"y\") . \" post\""
        );
    }

    #[test]
    fn adjacent_tokens() {
        assert_eq!(
            render_expr(&substitute("${a}${b}")),
            "$this->getStoredValue(\"a\") . $this->getStoredValue(\"b\")"
        );
    }

    #[test]
    fn malformed_dollar_sequences_pass_through() {
        // Not well-formed tokens: escaped into the literal
        assert_eq!(render_expr(&substitute("$x {y} ${z")), "\"\\$x {y} \\${z\"");
        assert_eq!(render_expr(&substitute("cost $5")), "\"cost \\$5\"");
    }

    #[test]
    fn token_with_bad_chars_is_literal() {
        assert_eq!(
            render_expr(&substitute("${not-a-token}")),
            "\"\\${not-a-token}\""
        );
    }

    #[test]
    fn closure_receiver() {
        assert_eq!(
            render_expr(&substitute_with("${x}", &Expr::test_case())),
            "$testCase->getStoredValue(\"x\")"
        );
    }

    #[test]
    fn split_preserves_order() {
        let parts = split_tokens("a${b}c");
        assert_eq!(
            parts,
            vec![
                TextPart::Lit("a".to_string()),
                TextPart::Var("b".to_string()),
                TextPart::Lit("c".to_string()),
            ]
        );
    }
}
