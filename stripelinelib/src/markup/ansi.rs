//! `console`-backed markup renderer.

use std::collections::BTreeMap;

use tracing::debug;

use super::parser::{tokenize, Token};
use super::style::{parse_tag, StyleSpec};
use super::MarkupRenderer;
use crate::error::StripelineError;
use crate::options::{FormatterConfig, TagDelimiters};
use crate::Result;

/// Renders delimited markup tags as ANSI escapes.
#[derive(Debug, Clone)]
pub struct AnsiMarkup {
    delimiters: TagDelimiters,
    named: BTreeMap<String, StyleSpec>,
    strict: bool,
    always_reset: bool,
    force_styling: Option<bool>,
}

impl Default for AnsiMarkup {
    fn default() -> Self {
        Self {
            delimiters: TagDelimiters::default(),
            named: BTreeMap::new(),
            strict: true,
            always_reset: false,
            force_styling: None,
        }
    }
}

impl AnsiMarkup {
    /// Strict renderer with `<>` delimiters and no named tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a renderer from the markup-related parts of a config.
    ///
    /// Fails if the delimiters are unusable or a named tag's markup is not a
    /// sequence of known opening tags.
    pub fn from_config(config: &FormatterConfig) -> Result<Self> {
        let delimiters = TagDelimiters::parse(&config.tag_sep.to_string())?;
        let mut markup = Self {
            delimiters,
            named: BTreeMap::new(),
            strict: config.strict,
            always_reset: config.always_reset,
            force_styling: config.force_styling,
        };
        for (name, definition) in &config.tags {
            let spec = markup.parse_named(name, definition)?;
            markup.named.insert(name.clone(), spec);
        }
        debug!(
            named_tags = markup.named.len(),
            strict = markup.strict,
            always_reset = markup.always_reset,
            delimiters = %markup.delimiters,
            "markup renderer ready"
        );
        Ok(markup)
    }

    fn parse_named(&self, name: &str, definition: &str) -> Result<StyleSpec> {
        let invalid = |message: String| StripelineError::InvalidNamedTag {
            name: name.to_string(),
            message,
        };
        let mut spec = StyleSpec::default();
        for token in tokenize(definition, self.delimiters) {
            match token {
                Token::Open(tag) => {
                    let tag_spec =
                        parse_tag(tag).ok_or_else(|| invalid(format!("unknown tag '{tag}'")))?;
                    spec = spec.merge(&tag_spec);
                }
                Token::Close(tag) => {
                    return Err(invalid(format!("unexpected closing tag '{tag}'")));
                }
                Token::Text(text) if text.trim().is_empty() => {}
                Token::Text(text) => {
                    return Err(invalid(format!("unexpected text '{text}'")));
                }
            }
        }
        if spec.is_empty() {
            return Err(invalid("no style given".to_string()));
        }
        Ok(spec)
    }

    fn resolve(&self, tag: &str) -> Option<StyleSpec> {
        self.named.get(tag).cloned().or_else(|| parse_tag(tag))
    }

    fn literal_open(&self, tag: &str) -> String {
        format!("{}{}{}", self.delimiters.open, tag, self.delimiters.close)
    }

    fn literal_close(&self, tag: &str) -> String {
        format!("{}/{}{}", self.delimiters.open, tag, self.delimiters.close)
    }

    /// Walk the markup, handing each visible run and its style to `emit`.
    ///
    /// In strict mode every error is found before the walk returns, and
    /// callers only publish what they collected on success.
    fn walk(&self, text: &str, mut emit: impl FnMut(&str, &StyleSpec)) -> Result<()> {
        let plain = StyleSpec::default();
        let mut stack: Vec<(&str, StyleSpec)> = Vec::new();

        for token in tokenize(text, self.delimiters) {
            match token {
                Token::Text(run) => {
                    emit(run.as_str(), stack.last().map_or(&plain, |(_, spec)| spec));
                }
                Token::Open(tag) => match self.resolve(tag) {
                    Some(spec) => {
                        let spec = match stack.last() {
                            Some((_, parent)) if !self.always_reset => parent.merge(&spec),
                            _ => spec,
                        };
                        stack.push((tag, spec));
                    }
                    None if self.strict => {
                        return Err(StripelineError::UnknownTag(tag.to_string()));
                    }
                    None => {
                        let current = stack.last().map_or(&plain, |(_, spec)| spec);
                        emit(self.literal_open(tag).as_str(), current);
                    }
                },
                Token::Close(tag) => {
                    let depth = stack.len();
                    match stack.iter().rposition(|(open, _)| *open == tag) {
                        Some(index) if index + 1 == depth => {
                            stack.pop();
                        }
                        Some(index) if !self.strict => stack.truncate(index),
                        _ if self.strict => {
                            return Err(match stack.last() {
                                Some((open, _)) => StripelineError::MismatchedClosingTag {
                                    expected: open.to_string(),
                                    found: tag.to_string(),
                                },
                                None => StripelineError::UnmatchedClosingTag(tag.to_string()),
                            });
                        }
                        _ => {
                            let current = stack.last().map_or(&plain, |(_, spec)| spec);
                            emit(self.literal_close(tag).as_str(), current);
                        }
                    }
                }
            }
        }

        if self.strict {
            if let Some((tag, _)) = stack.last() {
                return Err(StripelineError::UnclosedTag(tag.to_string()));
            }
        }
        Ok(())
    }
}

impl MarkupRenderer for AnsiMarkup {
    fn strip(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        self.walk(text, |run, _| out.push_str(run))?;
        Ok(out)
    }

    fn render(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        self.walk(text, |run, spec| {
            if spec.is_empty() {
                out.push_str(run);
            } else {
                let style = spec.to_style(self.force_styling);
                out.push_str(&style.apply_to(run).to_string());
            }
        })?;
        Ok(out)
    }
}
