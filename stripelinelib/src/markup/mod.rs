//! Markup rendering: tags in, terminal escapes out.
//!
//! The formatter only needs two things from a renderer: the visible text of a
//! tagged string, and its rendered form. [`MarkupRenderer`] is that seam;
//! [`AnsiMarkup`] is the bundled implementation, built on `console`.
//!
//! ## Tags
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `<b>`, `<bold>`, `<i>`, `<u>`, `<d>`, `<l>`, `<v>`, `<h>`, `<s>` | text attributes |
//! | `<red>`, `<light-red>` | foreground color |
//! | `<RED>`, `<LIGHT-RED>` | background color |
//! | `<fg X>`, `<bg X>` | X is a name, `#RGB`, `#RRGGBB`, `0-255` or `r,g,b`; hex and `r,g,b` become the nearest 256-color palette entry (`#fbfbfb` is 231, `#f5f5f5` is 255) |
//! | `<important>` | a named tag from the configuration |
//!
//! Closing tags repeat the opening text after a slash: `<bg #AABBCC>...</bg #AABBCC>`.
//!
//! `console` has no truecolor styles, so exact RGB values are not kept.
//!
//! `\<` and `\>` are literal delimiters. Right before a delimiter `\\` is one
//! literal backslash; elsewhere a backslash is plain text.

mod ansi;
mod parser;
mod style;

pub use ansi::AnsiMarkup;
pub(crate) use parser::escape_trailing_backslashes;

use crate::Result;

/// A markup-to-terminal rendering backend.
pub trait MarkupRenderer {
    /// Remove all markup tags, returning the text that will be visible.
    fn strip(&self, text: &str) -> Result<String>;

    /// Replace markup tags with the terminal escapes they stand for.
    fn render(&self, text: &str) -> Result<String>;
}

impl<R: MarkupRenderer + ?Sized> MarkupRenderer for &R {
    fn strip(&self, text: &str) -> Result<String> {
        (**self).strip(text)
    }

    fn render(&self, text: &str) -> Result<String> {
        (**self).render(text)
    }
}
