#![forbid(unsafe_code)]

//! Escaping for markup serialization.
//!
//! Text nodes hold raw strings; escaping happens only when a tree is
//! serialized with [`Node::to_markup`](crate::Node::to_markup). Text content
//! and attribute values share one escaper (`v_htmlescape`), which covers
//! `&`, `<`, `>`, both quote characters, and `/`.

use std::borrow::Cow;

/// Characters the escaper may rewrite. Input free of them is borrowed.
const SPECIAL: [char; 6] = ['&', '<', '>', '"', '\'', '/'];

/// Escape text content or an attribute value.
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(SPECIAL) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(v_htmlescape::escape(input).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape("Delete file?"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_angle_brackets_and_amp() {
        assert_eq!(escape("<b>Tom & Jerry"), "&lt;b&gt;Tom &amp; Jerry");
    }

    #[test]
    fn escapes_double_quote() {
        assert_eq!(escape(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn no_raw_specials_survive() {
        let out = escape(r#"<a href='/x'>"y"</a>"#);
        assert!(!out.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn multibyte_prefix_is_preserved() {
        assert_eq!(escape("héllo <x>"), "héllo &lt;x&gt;");
    }
}
