//! Error taxonomy for HTML to JSX conversion.
//!
//! Each layer wraps the one below it, so the full chain is available both
//! through [`std::error::Error::source`] and in a single `Display`:
//!
//! ```text
//! could not convert html: could not build jsx compatible start tag <div>:
//!     could not convert attribute `data-foo-bar`: multiple hyphens in attribute name detected
//! ```

use crate::token::TokenKind;
use html5ever::LocalName;
use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// Top-level error returned by [`convert`](crate::convert) and friends.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input could not be tokenized.
    #[error("could not parse html: {0}")]
    Parse(#[from] ParseError),

    /// A token could not be rewritten as JSX.
    #[error("could not convert html: {0}")]
    Conversion(#[from] RewriteError),

    /// The output sink rejected a write.
    #[error("could not write jsx output: {0}")]
    Write(#[source] io::Error),
}

impl ConvertError {
    /// True when the input could not be tokenized.
    pub fn is_parse(&self) -> bool {
        matches!(self, ConvertError::Parse(_))
    }

    /// True when a token could not be rewritten as JSX.
    pub fn is_conversion(&self) -> bool {
        matches!(self, ConvertError::Conversion(_))
    }
}

/// Failures of the tokenizer collaborator.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the input source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("invalid utf-8 sequence at byte {offset}")]
    InvalidUtf8 { offset: u64 },

    /// The tokenizer reported a diagnostic while running in strict mode.
    #[error("line {line}: {message}")]
    Tokenizer {
        line: u64,
        message: Cow<'static, str>,
    },
}

/// Failures of the token rewriter.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// A token kind the rewriter has no JSX form for.
    #[error("unexpected token type {0} encountered")]
    UnsupportedToken(TokenKind),

    /// An attribute of a start or self-closing tag could not be converted.
    #[error("could not build jsx compatible start tag <{tag}>: {source}")]
    StartTag {
        tag: LocalName,
        #[source]
        source: AttributeError,
    },
}

impl RewriteError {
    /// True when the root cause is an attribute name with too many hyphens.
    pub fn is_multiple_hyphens(&self) -> bool {
        matches!(
            self,
            RewriteError::StartTag {
                source: AttributeError {
                    source: CaseError::MultipleHyphens { .. },
                    ..
                },
                ..
            }
        )
    }
}

/// A single attribute whose name could not be rewritten.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not convert attribute `{name}`: {source}")]
pub struct AttributeError {
    pub name: LocalName,
    #[source]
    pub source: CaseError,
}

/// Kebab-case to camelCase failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaseError {
    /// byte positions of the two offending hyphens
    #[error("multiple hyphens in attribute name detected (at {first} and {second})")]
    MultipleHyphens { first: usize, second: usize },
}
