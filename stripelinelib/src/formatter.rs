//! Padded and zebra-striped line printing.
//!
//! The operations are layered, each one building on the previous:
//!
//! 1. [`LineFormatter::wrap_tag`]: wrap text in an open/close tag pair
//! 2. [`LineFormatter::color_print`]: render markup and write it
//! 3. [`LineFormatter::padded_color_print`]: pad to the line width, wrap in a color tag, print
//! 4. [`LineFormatter::row_print`]: choose the color by row parity, print padded
//!
//! [`LineFormatter::blank_lines`] sits beside them and writes bare newlines.
//!
//! Padding leaves the line one column short of its width: a line of width
//! `W` holding text that is `V` columns wide gets `W - V - 1` spaces.

use console::{measure_text_width, Term};
use tracing::trace;

use crate::markup::{escape_trailing_backslashes, AnsiMarkup, MarkupRenderer};
use crate::options::{ColorTagRule, FormatterConfig, PrintOptions, TagDelimiters};
use crate::output::OutputSink;
use crate::Result;

/// Prints styled, padded lines through a markup renderer.
#[derive(Debug)]
pub struct LineFormatter<R = AnsiMarkup, O = Term> {
    config: FormatterConfig,
    renderer: R,
    out: O,
}

impl LineFormatter {
    /// Formatter writing to stdout with the bundled renderer.
    ///
    /// Output is buffered; lines printed with `flush(false)` reach the
    /// terminal on the next flushing call or [`LineFormatter::flush`].
    pub fn new(config: FormatterConfig) -> Result<Self> {
        Self::with_output(config, Term::buffered_stdout())
    }
}

impl<O: OutputSink> LineFormatter<AnsiMarkup, O> {
    /// Formatter with the bundled renderer writing to `out`.
    pub fn with_output(config: FormatterConfig, out: O) -> Result<Self> {
        let renderer = AnsiMarkup::from_config(&config)?;
        Ok(Self {
            config,
            renderer,
            out,
        })
    }
}

impl<R: MarkupRenderer, O: OutputSink> LineFormatter<R, O> {
    /// Formatter with a custom renderer.
    ///
    /// The renderer must understand tags written with `config.tag_sep`.
    pub fn with_renderer(config: FormatterConfig, renderer: R, out: O) -> Result<Self> {
        TagDelimiters::parse(&config.tag_sep.to_string())?;
        Ok(Self {
            config,
            renderer,
            out,
        })
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    /// `<tag>text</tag>`, using the configured delimiters. The tag is not checked.
    ///
    /// Backslashes at the end of `text` are doubled so they cannot escape
    /// the closing tag: `C:\` becomes `<tag>C:\\</tag>`.
    pub fn wrap_tag(&self, text: &str, tag: &str) -> String {
        let TagDelimiters { open, close } = self.config.tag_sep;
        let text = escape_trailing_backslashes(text);
        format!("{open}{tag}{close}{text}{open}/{tag}{close}")
    }

    /// Render `text` and write it.
    ///
    /// Rendering finishes before anything is written, so a markup error
    /// leaves the output untouched.
    pub fn color_print(&self, text: &str, opts: &PrintOptions) -> Result<()> {
        let rendered = self.renderer.render(text)?;
        self.out.write_text(&rendered, opts.newline_at_end)?;
        if opts.flush {
            self.out.flush()?;
        }
        Ok(())
    }

    /// Columns `text` occupies once its tags are removed.
    pub fn visible_width(&self, text: &str) -> Result<usize> {
        Ok(measure_text_width(&self.renderer.strip(text)?))
    }

    /// The tag a line color is wrapped in.
    pub fn color_tag(&self, color: &str) -> String {
        match self.config.color_tag_rule {
            ColorTagRule::NameOrHex if !color.starts_with('#') => color.to_string(),
            _ => format!("bg {color}"),
        }
    }

    /// The markup [`LineFormatter::padded_color_print`] prints.
    ///
    /// An empty `bg_color` leaves the padded text unwrapped.
    pub fn padded_markup(&self, text: &str, bg_color: &str, opts: &PrintOptions) -> Result<String> {
        let width = opts.line_length.unwrap_or(self.config.line_length);
        let visible = self.visible_width(text)?;
        let fill = width.saturating_sub(visible);

        let mut line = text.to_string();
        if opts.fill_with_spaces && fill > 0 {
            line.push_str(&" ".repeat(fill - 1));
        }
        trace!(width, visible, fill, bg_color, "padded line");

        if bg_color.is_empty() {
            return Ok(line);
        }
        Ok(self.wrap_tag(&line, &self.color_tag(bg_color)))
    }

    /// Print `text` padded to the line width on a `bg_color` span.
    pub fn padded_color_print(&self, text: &str, bg_color: &str, opts: &PrintOptions) -> Result<()> {
        let markup = self.padded_markup(text, bg_color, opts)?;
        self.color_print(&markup, opts)
    }

    /// Color for `row`: odd rows take the first color, even rows the second.
    pub fn row_color<'a>(&'a self, row: usize, opts: &'a PrintOptions) -> &'a str {
        if row % 2 == 1 {
            opts.first_row_bg_color
                .as_deref()
                .unwrap_or(&self.config.first_row_bg_color)
        } else {
            opts.second_row_bg_color
                .as_deref()
                .unwrap_or(&self.config.second_row_bg_color)
        }
    }

    /// Print `text` as row number `row` of a striped table.
    pub fn row_print(&self, text: &str, row: usize, opts: &PrintOptions) -> Result<()> {
        let color = self.row_color(row, opts);
        trace!(row, color, "row color");
        self.padded_color_print(text, color, opts)
    }

    /// Write `n` newlines, one write each. Zero writes nothing.
    pub fn blank_lines(&self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.out.write_text("\n", false)?;
        }
        if n > 0 {
            self.out.flush()?;
        }
        Ok(())
    }

    /// Flush anything still buffered in the output.
    pub fn flush(&self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
