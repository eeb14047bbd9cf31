//! Configuration types for the formatter.
//!
//! [`FormatterConfig`] is fixed when a formatter is built; [`PrintOptions`]
//! carries the per-call overrides.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StripelineError;
use crate::Result;

/// Default visible width of a padded line.
pub const DEFAULT_LINE_LENGTH: usize = 120;
/// Default background for odd rows.
pub const DEFAULT_FIRST_ROW_BG_COLOR: &str = "#fbfbfb";
/// Default background for even rows.
pub const DEFAULT_SECOND_ROW_BG_COLOR: &str = "#f5f5f5";

/// The open/close characters that delimit a markup tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagDelimiters {
    pub open: char,
    pub close: char,
}

impl Default for TagDelimiters {
    fn default() -> Self {
        Self {
            open: '<',
            close: '>',
        }
    }
}

impl TagDelimiters {
    /// Parse a two character separator such as `"<>"` or `"[]"`.
    pub fn parse(sep: &str) -> Result<Self> {
        let mut chars = sep.chars();
        let (Some(open), Some(close), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(StripelineError::InvalidDelimiters(sep.to_string()));
        };
        let usable = |c: char| c != '/' && c != '\\' && !c.is_whitespace();
        if open == close || !usable(open) || !usable(close) {
            return Err(StripelineError::InvalidDelimiters(sep.to_string()));
        }
        Ok(Self { open, close })
    }
}

impl fmt::Display for TagDelimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open, self.close)
    }
}

impl TryFrom<String> for TagDelimiters {
    type Error = StripelineError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TagDelimiters> for String {
    fn from(value: TagDelimiters) -> Self {
        value.to_string()
    }
}

/// How a line's color is turned into the tag that wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTagRule {
    /// `#hex` colors become `bg #hex`, anything else is used as the tag itself
    #[default]
    NameOrHex,
    /// Every color becomes `bg <color>`
    AlwaysBackground,
}

/// Construction-time configuration of a [`crate::LineFormatter`].
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Named tags: name -> markup of opening tags, e.g. `"important" -> "<red><b>"`
    pub tags: BTreeMap<String, String>,
    /// Each tag starts from a blank style instead of inheriting its parents
    pub always_reset: bool,
    /// Fail on unknown, unmatched or unclosed tags
    pub strict: bool,
    /// Tag delimiters
    pub tag_sep: TagDelimiters,
    /// Visible width used when a call gives none
    pub line_length: usize,
    /// Background for odd rows
    pub first_row_bg_color: String,
    /// Background for even rows
    pub second_row_bg_color: String,
    /// Color to tag mapping for padded lines
    pub color_tag_rule: ColorTagRule,
    /// `Some(true)` always emits escapes, `Some(false)` never, `None` detects
    pub force_styling: Option<bool>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            tags: BTreeMap::new(),
            always_reset: false,
            strict: true,
            tag_sep: TagDelimiters::default(),
            line_length: DEFAULT_LINE_LENGTH,
            first_row_bg_color: DEFAULT_FIRST_ROW_BG_COLOR.to_string(),
            second_row_bg_color: DEFAULT_SECOND_ROW_BG_COLOR.to_string(),
            color_tag_rule: ColorTagRule::default(),
            force_styling: None,
        }
    }
}

impl FormatterConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace the named tag table
    pub fn tags<I, K, V>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Builder: add one named tag
    pub fn tag(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.tags.insert(name.into(), markup.into());
        self
    }

    /// Builder: set always_reset
    pub fn always_reset(mut self, always_reset: bool) -> Self {
        self.always_reset = always_reset;
        self
    }

    /// Builder: set strict tag matching
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder: set the tag delimiters from a two character string.
    pub fn tag_sep(mut self, sep: &str) -> Result<Self> {
        self.tag_sep = TagDelimiters::parse(sep)?;
        Ok(self)
    }

    /// Builder: set the default line length
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Builder: set the default odd-row color
    pub fn first_row_bg_color(mut self, color: impl Into<String>) -> Self {
        self.first_row_bg_color = color.into();
        self
    }

    /// Builder: set the default even-row color
    pub fn second_row_bg_color(mut self, color: impl Into<String>) -> Self {
        self.second_row_bg_color = color.into();
        self
    }

    /// Builder: set the color tag rule
    pub fn color_tag_rule(mut self, rule: ColorTagRule) -> Self {
        self.color_tag_rule = rule;
        self
    }

    /// Builder: force escapes on or off, or `None` to follow the terminal
    pub fn force_styling(mut self, force: Option<bool>) -> Self {
        self.force_styling = force;
        self
    }
}

/// Per-call options for the print operations.
///
/// Row colors are only read by [`crate::LineFormatter::row_print`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Visible width override
    pub line_length: Option<usize>,
    /// Pad the line with spaces so the background runs to the line width
    pub fill_with_spaces: bool,
    /// Flush the output after writing
    pub flush: bool,
    /// Terminate the line with a newline
    pub newline_at_end: bool,
    /// Odd-row color override
    pub first_row_bg_color: Option<String>,
    /// Even-row color override
    pub second_row_bg_color: Option<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            line_length: None,
            fill_with_spaces: true,
            flush: true,
            newline_at_end: true,
            first_row_bg_color: None,
            second_row_bg_color: None,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override the line length
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.line_length = Some(line_length);
        self
    }

    /// Builder: set space filling
    pub fn fill_with_spaces(mut self, fill: bool) -> Self {
        self.fill_with_spaces = fill;
        self
    }

    /// Builder: set flushing
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// Builder: set the trailing newline
    pub fn newline_at_end(mut self, newline: bool) -> Self {
        self.newline_at_end = newline;
        self
    }

    /// Builder: override both row colors
    pub fn row_colors(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_row_bg_color = Some(first.into());
        self.second_row_bg_color = Some(second.into());
        self
    }

    /// Builder: override the odd-row color
    pub fn first_row_bg_color(mut self, color: impl Into<String>) -> Self {
        self.first_row_bg_color = Some(color.into());
        self
    }

    /// Builder: override the even-row color
    pub fn second_row_bg_color(mut self, color: impl Into<String>) -> Self {
        self.second_row_bg_color = Some(color.into());
        self
    }
}
