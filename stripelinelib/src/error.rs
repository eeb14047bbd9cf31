//! Error types for stripelinelib

use thiserror::Error;

/// Errors that can occur while configuring a formatter or rendering markup
#[derive(Error, Debug)]
pub enum StripelineError {
    /// Tag is neither a style, a color, nor a configured named tag (strict mode)
    #[error("unknown tag '{0}'")]
    UnknownTag(String),

    /// Closing tag with no opening tag at all (strict mode)
    #[error("closing tag '{0}' has no matching opening tag")]
    UnmatchedClosingTag(String),

    /// Closing tag that does not close the innermost open tag (strict mode)
    #[error("closing tag '{found}' does not match open tag '{expected}'")]
    MismatchedClosingTag { expected: String, found: String },

    /// Opening tag still open at the end of the text (strict mode)
    #[error("tag '{0}' is never closed")]
    UnclosedTag(String),

    /// Tag delimiter pair is not two distinct usable characters
    #[error("invalid tag delimiters '{0}': expected two distinct characters other than '/', '\\' or whitespace")]
    InvalidDelimiters(String),

    /// A named tag's style definition could not be parsed
    #[error("invalid style for named tag '{name}': {message}")]
    InvalidNamedTag { name: String, message: String },

    /// Writing to the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StripelineError {
    /// Whether this error comes from malformed or unknown markup in the text.
    pub fn is_markup_syntax(&self) -> bool {
        matches!(
            self,
            StripelineError::UnknownTag(_)
                | StripelineError::UnmatchedClosingTag(_)
                | StripelineError::MismatchedClosingTag { .. }
                | StripelineError::UnclosedTag(_)
        )
    }

    /// Whether this error was raised while building a formatter.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StripelineError::InvalidDelimiters(_) | StripelineError::InvalidNamedTag { .. }
        )
    }
}
