//! Tokenizer for delimited markup tags.

use std::borrow::Cow;

use crate::options::TagDelimiters;

/// A piece of markup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Visible text, with escaped delimiters already unescaped
    Text(String),
    /// `<tag>`: the text between the delimiters
    Open(&'a str),
    /// `</tag>`: the text after the slash
    Close(&'a str),
}

/// Split `text` into text runs and tags.
///
/// A delimiter preceded by `\` is literal. In a run of backslashes right
/// before a delimiter each `\\` pair stands for one backslash, and a final
/// unpaired `\` escapes the delimiter. Backslashes anywhere else are kept
/// as they are. An open delimiter with no close after it, an empty tag, or a
/// tag containing another open delimiter stays as text.
pub(crate) fn tokenize(text: &str, delims: TagDelimiters) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let width = c.len_utf8();

        if c == '\\' {
            let run = rest.len() - rest.trim_start_matches('\\').len();
            let after = &rest[run..];
            match after.chars().next() {
                Some(next) if next == delims.open || next == delims.close => {
                    buf.extend(std::iter::repeat('\\').take(run / 2));
                    rest = if run % 2 == 1 {
                        buf.push(next);
                        &after[next.len_utf8()..]
                    } else {
                        after
                    };
                }
                _ => {
                    buf.push_str(&rest[..run]);
                    rest = after;
                }
            }
            continue;
        } else if c == delims.open {
            let after = &rest[width..];
            if let Some(end) = after.find(delims.close) {
                let inner = &after[..end];
                if !inner.is_empty() && !inner.contains(delims.open) {
                    if !buf.is_empty() {
                        tokens.push(Token::Text(std::mem::take(&mut buf)));
                    }
                    tokens.push(match inner.strip_prefix('/') {
                        Some(name) => Token::Close(name),
                        None => Token::Open(inner),
                    });
                    rest = &after[end + delims.close.len_utf8()..];
                    continue;
                }
            }
        }

        buf.push(c);
        rest = &rest[width..];
    }

    if !buf.is_empty() {
        tokens.push(Token::Text(buf));
    }
    tokens
}

/// Double the backslashes `text` ends with, so a tag written right after it
/// is still read as a tag and the backslashes stay visible.
pub(crate) fn escape_trailing_backslashes(text: &str) -> Cow<'_, str> {
    let trailing = text.len() - text.trim_end_matches('\\').len();
    if trailing == 0 {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + trailing);
    escaped.push_str(text);
    escaped.push_str(&"\\".repeat(trailing));
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn angle() -> TagDelimiters {
        TagDelimiters::default()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            tokenize("hello", angle()),
            vec![Token::Text("hello".into())]
        );
        assert!(tokenize("", angle()).is_empty());
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(
            tokenize("a<red>b</red>c", angle()),
            vec![
                Token::Text("a".into()),
                Token::Open("red"),
                Token::Text("b".into()),
                Token::Close("red"),
                Token::Text("c".into()),
            ]
        );
    }

    #[test]
    fn test_tag_with_argument() {
        assert_eq!(
            tokenize("<bg #AABBCC>x</bg #AABBCC>", angle()),
            vec![
                Token::Open("bg #AABBCC"),
                Token::Text("x".into()),
                Token::Close("bg #AABBCC"),
            ]
        );
    }

    #[test]
    fn test_unterminated_and_empty_tags_are_text() {
        assert_eq!(tokenize("1 < 2", angle()), vec![Token::Text("1 < 2".into())]);
        assert_eq!(tokenize("<>", angle()), vec![Token::Text("<>".into())]);
    }

    #[test]
    fn test_nested_open_delimiter_is_text() {
        assert_eq!(
            tokenize("a < b<red>", angle()),
            vec![Token::Text("a < b".into()), Token::Open("red")]
        );
    }

    #[test]
    fn test_escaped_delimiters() {
        assert_eq!(
            tokenize(r"\<red\>", angle()),
            vec![Token::Text("<red>".into())]
        );
        assert_eq!(tokenize(r"a\b", angle()), vec![Token::Text(r"a\b".into())]);
        assert_eq!(tokenize(r"C:\", angle()), vec![Token::Text(r"C:\".into())]);
    }

    #[test]
    fn test_escaped_backslash_before_tag() {
        assert_eq!(
            tokenize(r"C:\\</b>", angle()),
            vec![Token::Text(r"C:\".into()), Token::Close("b")]
        );
        assert_eq!(
            tokenize(r"\\\<b>", angle()),
            vec![Token::Text(r"\<b>".into())]
        );
        assert_eq!(
            tokenize(r"a\\b\\", angle()),
            vec![Token::Text(r"a\\b\\".into())]
        );
    }

    #[test]
    fn test_escape_trailing_backslashes() {
        assert_eq!(escape_trailing_backslashes("plain"), "plain");
        assert_eq!(escape_trailing_backslashes(r"C:\"), r"C:\\");
        assert_eq!(escape_trailing_backslashes(r"a\b\\"), r"a\b\\\\");
        assert!(matches!(escape_trailing_backslashes(r"a\b"), Cow::Borrowed(_)));

        for text in [r"C:\", r"dir\\", r"\"] {
            let closed = format!("<b>{}</b>", escape_trailing_backslashes(text));
            assert_eq!(
                tokenize(&closed, angle()),
                vec![Token::Open("b"), Token::Text(text.into()), Token::Close("b")]
            );
        }
    }

    #[test]
    fn test_custom_delimiters() {
        let square = TagDelimiters::parse("[]").unwrap();
        assert_eq!(
            tokenize("[b]x[/b] <red>", square),
            vec![
                Token::Open("b"),
                Token::Text("x".into()),
                Token::Close("b"),
                Token::Text(" <red>".into()),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            tokenize("é<b>ü</b>", angle()),
            vec![
                Token::Text("é".into()),
                Token::Open("b"),
                Token::Text("ü".into()),
                Token::Close("b"),
            ]
        );
    }
}
