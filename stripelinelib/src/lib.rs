//! # stripelinelib
//!
//! Padded, background-colored terminal lines and zebra-striped rows, written
//! with tag-based ANSI markup.
//!
//! ## Overview
//!
//! Text is styled with tags such as `<red>`, `<b>` or `<bg #AABBCC>`, plus any
//! named tags given in the configuration (`"important" -> "<red><b>"`). The
//! [`LineFormatter`] pads each line to a fixed visible width so its background
//! color runs across the terminal, and alternates two colors by row number to
//! stripe table-like output.
//!
//! - **Visible-width padding**: tags embedded in the text do not count toward the width
//! - **Row striping**: odd rows get the first color, even rows the second
//! - **Pluggable backends**: rendering goes through [`MarkupRenderer`], writing through [`OutputSink`]
//! - **Strict markup**: unknown, unmatched or unclosed tags are errors, and nothing is written
//!
//! ## Example
//!
//! ```rust
//! use stripelinelib::{CaptureSink, FormatterConfig, LineFormatter, PrintOptions};
//!
//! let config = FormatterConfig::new()
//!     .tag("important", "<red><b>")
//!     .line_length(20)
//!     .force_styling(Some(false));
//! let sink = CaptureSink::new();
//! let fmt = LineFormatter::with_output(config, &sink).unwrap();
//!
//! fmt.padded_color_print("<important>Hello</important>", "#DDDDDD", &PrintOptions::new())
//!     .unwrap();
//! for row in 1..=3 {
//!     fmt.row_print(&format!("row {row}"), row, &PrintOptions::new()).unwrap();
//! }
//! fmt.blank_lines(1).unwrap();
//!
//! let lines: Vec<String> = sink.writes();
//! assert_eq!(lines[0], format!("Hello{}\n", " ".repeat(14)));
//! assert_eq!(lines.len(), 5);
//! ```

pub mod error;
pub mod formatter;
pub mod markup;
pub mod options;
pub mod output;

pub use error::StripelineError;
pub use formatter::LineFormatter;
pub use markup::{AnsiMarkup, MarkupRenderer};
pub use options::{
    ColorTagRule, FormatterConfig, PrintOptions, TagDelimiters, DEFAULT_FIRST_ROW_BG_COLOR,
    DEFAULT_LINE_LENGTH, DEFAULT_SECOND_ROW_BG_COLOR,
};
pub use output::{CaptureSink, OutputSink};

/// Result type for stripelinelib operations
pub type Result<T> = std::result::Result<T, StripelineError>;
