//! # stripeline
//!
//! Print padded, background-colored lines and zebra-striped rows from the
//! command line.
//!
//! ## Overview
//!
//! stripeline is built on top of stripelinelib. Each line of text may carry
//! markup tags (`<red>`, `<b>`, `<bg #AABBCC>`, or named tags from a config
//! file); lines are padded to a fixed visible width so their background color
//! spans the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # One padded line per argument on a hex background
//! stripeline print --bg '#DDDDDD' Hello World
//!
//! # Stripe lines read from stdin
//! ls -l | stripeline rows --first '#FFDDDD' --second '#DDDDFF'
//!
//! # Named tags and other settings from a JSON config
//! stripeline --config tags.json rows '<important>TEXT</important>'
//!
//! # Visible text with tags removed
//! stripeline strip '<red>plain</red>'
//!
//! # A tour of the features
//! stripeline demo
//! ```

mod demo;

use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use stripelinelib::{FormatterConfig, LineFormatter, MarkupRenderer, OutputSink, PrintOptions};
use tracing::{debug, Level};

/// Build the clap Command structure
fn build_command() -> Command {
    let text_arg = || {
        Arg::new("text")
            .action(ArgAction::Append)
            .help("Lines to print (read from stdin when omitted)")
    };

    Command::new("stripeline")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Padded, zebra-striped terminal lines from tag-based ANSI markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("JSON formatter config (tags, colors, delimiters, ...)"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Visible line width"),
        )
        .arg(
            Arg::new("no-fill")
                .long("no-fill")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Do not pad lines with spaces"),
        )
        .arg(
            Arg::new("no-strict")
                .long("no-strict")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Keep unknown or unmatched tags as text instead of failing"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .global(true)
                .value_parser(["auto", "always", "never"])
                .help("When to emit color escapes [default: auto]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log to stderr (-v debug, -vv trace)"),
        )
        .subcommand(
            Command::new("print")
                .about("Print each line padded on one background color")
                .arg(text_arg())
                .arg(
                    Arg::new("bg")
                        .short('b')
                        .long("bg")
                        .help("Background color: a name or #RRGGBB (plain print when omitted)"),
                ),
        )
        .subcommand(
            Command::new("rows")
                .about("Print lines as rows with alternating background colors")
                .arg(text_arg())
                .arg(
                    Arg::new("first")
                        .long("first")
                        .help("Color of odd rows"),
                )
                .arg(
                    Arg::new("second")
                        .long("second")
                        .help("Color of even rows"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_parser(value_parser!(usize))
                        .default_value("1")
                        .help("Row number of the first line"),
                ),
        )
        .subcommand(Command::new("strip").about("Print lines with markup tags removed").arg(text_arg()))
        .subcommand(Command::new("demo").about("Show padded lines and striped tables"))
}

/// Install the stderr log subscriber
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the config file (if any) and apply command-line overrides
fn build_config(matches: &ArgMatches) -> anyhow::Result<FormatterConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => load_config(Path::new(path))?,
        None => FormatterConfig::new(),
    };

    if let Some(width) = matches.get_one::<usize>("width") {
        config.line_length = *width;
    }
    if matches.get_flag("no-strict") {
        config.strict = false;
    }
    config.force_styling = match matches.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => Some(true),
        Some("never") => Some(false),
        _ => config.force_styling,
    };

    Ok(config)
}

fn load_config(path: &Path) -> anyhow::Result<FormatterConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Lines from the arguments, or from stdin when there are none
fn input_lines(matches: &ArgMatches) -> anyhow::Result<Vec<String>> {
    if let Some(texts) = matches.get_many::<String>("text") {
        return Ok(texts.cloned().collect());
    }
    std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<_, _>>()
        .context("failed to read stdin")
}

fn base_options(matches: &ArgMatches) -> PrintOptions {
    PrintOptions::new().fill_with_spaces(!matches.get_flag("no-fill"))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = build_config(matches)?;

    match matches.subcommand() {
        Some(("print", sub)) => {
            let fmt = LineFormatter::new(config)?;
            let opts = base_options(matches);
            let bg = sub.get_one::<String>("bg");
            for line in input_lines(sub)? {
                match bg {
                    Some(color) => fmt.padded_color_print(&line, color, &opts)?,
                    None => fmt.color_print(&line, &opts)?,
                }
            }
            fmt.flush()?;
        }
        Some(("rows", sub)) => {
            let fmt = LineFormatter::new(config)?;
            let mut opts = base_options(matches);
            opts.first_row_bg_color = sub.get_one::<String>("first").cloned();
            opts.second_row_bg_color = sub.get_one::<String>("second").cloned();
            let start = sub.get_one::<usize>("start").copied().unwrap_or(1);
            for (offset, line) in input_lines(sub)?.iter().enumerate() {
                fmt.row_print(line, start + offset, &opts)?;
            }
            fmt.flush()?;
        }
        Some(("strip", sub)) => {
            let fmt = LineFormatter::new(config)?;
            for line in input_lines(sub)? {
                let visible = fmt.renderer().strip(&line)?;
                fmt.output().write_text(&visible, true)?;
            }
            fmt.flush()?;
        }
        Some(("demo", _)) => {
            let fmt = LineFormatter::new(demo::demo_config(config))?;
            demo::walkthrough(&fmt, &base_options(matches))?;
            fmt.flush()?;
        }
        _ => anyhow::bail!("no command given"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
