//! The `demo` command: a tour of padded lines and striped rows.

use stripelinelib::{FormatterConfig, LineFormatter, MarkupRenderer, OutputSink, PrintOptions};

/// Named tags the walkthrough relies on, added unless the config defines them.
const DEMO_TAGS: [(&str, &str); 2] = [("important", "<red><b>"), ("warning", "<yellow><b>")];

/// Light red / light blue, for the custom-colored table.
const CUSTOM_ROW_COLORS: (&str, &str) = ("#FFDDDD", "#DDDDFF");

/// Add the demo's named tags to `config`, keeping any the user already set.
///
/// The definitions use the configured delimiters.
pub fn demo_config(mut config: FormatterConfig) -> FormatterConfig {
    let sep = config.tag_sep;
    for (name, definition) in DEMO_TAGS {
        let definition = definition
            .replace('<', &sep.open.to_string())
            .replace('>', &sep.close.to_string());
        config.tags.entry(name.to_string()).or_insert(definition);
    }
    config
}

/// Print the walkthrough. `opts` carries the user's width and fill settings.
pub fn walkthrough<R: MarkupRenderer, O: OutputSink>(
    fmt: &LineFormatter<R, O>,
    opts: &PrintOptions,
) -> stripelinelib::Result<()> {
    for color in ["#DDDDDD", "green"] {
        fmt.padded_color_print("Hello", color, opts)?;
        fmt.padded_color_print("World", color, opts)?;
    }
    let narrow = opts.clone().line_length(60);
    fmt.padded_color_print("Hello", "yellow", &narrow)?;
    fmt.padded_color_print("World", "yellow", &narrow)?;

    fmt.blank_lines(2)?;

    let important = fmt.wrap_tag("TEXT 1", "important");
    for row in 1..10 {
        fmt.row_print(&important, row, opts)?;
        fmt.row_print("TEXT 2", row, opts)?;
        fmt.row_print("TEXT 3", row, opts)?;
    }

    fmt.blank_lines(2)?;

    let (first, second) = CUSTOM_ROW_COLORS;
    let custom = opts.clone().row_colors(first, second);
    let important = fmt.wrap_tag("TEXT A", "important");
    let warning = fmt.wrap_tag("TEXT B", "warning");
    for row in 1..10 {
        fmt.row_print(&important, row, &custom)?;
        fmt.row_print(&warning, row, &custom)?;
        fmt.row_print("TEXT C", row, &custom)?;
        fmt.blank_lines(1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripelinelib::CaptureSink;

    #[test]
    fn test_demo_config_adds_tags() {
        let config = demo_config(FormatterConfig::new().tag("warning", "<magenta>"));
        assert_eq!(config.tags["important"], "<red><b>");
        assert_eq!(config.tags["warning"], "<magenta>");
    }

    #[test]
    fn test_demo_config_follows_delimiters() {
        let config = demo_config(FormatterConfig::new().tag_sep("[]").unwrap());
        assert_eq!(config.tags["important"], "[red][b]");
    }

    #[test]
    fn test_walkthrough_output_shape() {
        let sink = CaptureSink::new();
        let config = demo_config(FormatterConfig::new().force_styling(Some(false)));
        let fmt = LineFormatter::with_output(config, &sink).unwrap();
        walkthrough(&fmt, &PrintOptions::new()).unwrap();

        let writes = sink.writes();
        // 6 padded lines, 2 blanks, 27 rows, 2 blanks, 9 x (3 rows + 1 blank)
        assert_eq!(writes.len(), 6 + 2 + 27 + 2 + 36);
        assert_eq!(writes[0], format!("Hello{}\n", " ".repeat(114)));
        assert_eq!(writes[4], format!("Hello{}\n", " ".repeat(54)));
        assert_eq!(writes[6], "\n");
        assert!(writes[8].starts_with("TEXT 1 "));
        assert_eq!(writes.last().unwrap(), "\n");
    }
}
