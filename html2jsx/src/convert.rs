//! The conversion driver: tokenize, rewrite, write, one token at a time.

use crate::error::ConvertError;
use crate::rewrite::rewrite_token;
use crate::tokenizer::TokenStream;
use crate::tracing_macros::debug;
use std::io::{Read, Write};

/// Smallest chunk that always makes progress through a UTF-8 sequence.
const MIN_CHUNK_SIZE: usize = 4;

/// Options for HTML to JSX conversion.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Treat tokenizer diagnostics (e.g. attributes on an end tag) as fatal
    /// parse errors instead of logging and moving on (default: false).
    pub strict: bool,
    /// Number of bytes read from the input per tokenizer feed (default: 8192).
    pub chunk_size: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strict: false,
            chunk_size: 8 * 1024,
        }
    }
}

impl ConvertOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first tokenizer diagnostic.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Set the input read size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub(crate) fn effective_chunk_size(&self) -> usize {
        if self.chunk_size < MIN_CHUNK_SIZE {
            debug!(
                requested = self.chunk_size,
                used = MIN_CHUNK_SIZE,
                "chunk size too small, clamping"
            );
            return MIN_CHUNK_SIZE;
        }
        self.chunk_size
    }
}

/// Convert HTML read from `input` into JSX written to `output`.
///
/// Stops at the first error. Output already written for earlier tokens stays
/// in `output`.
///
/// # Example
///
/// ```rust
/// let mut out = Vec::new();
/// html2jsx::convert(&b"<span class=\"a\" tab-index=\"0\">Hi</span>"[..], &mut out).unwrap();
/// assert_eq!(out, b"<span className=\"a\" tabIndex=\"0\">Hi</span>");
/// ```
pub fn convert<R: Read, W: Write>(input: R, output: W) -> Result<(), ConvertError> {
    convert_with_options(input, output, &ConvertOptions::default())
}

/// Like [`convert`], with explicit options.
///
/// `output` is not flushed; a buffered writer is the caller's to flush.
pub fn convert_with_options<R: Read, W: Write>(
    input: R,
    mut output: W,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    #[cfg(feature = "tracing")]
    let (mut tokens, mut written) = (0usize, 0usize);

    for token in TokenStream::with_options(input, options) {
        let token = token?;
        let jsx = rewrite_token(&token).inspect_err(|_err| {
            debug!(kind = %token.kind(), error = %_err, "token rewrite failed");
        })?;
        output
            .write_all(jsx.as_bytes())
            .map_err(ConvertError::Write)?;

        #[cfg(feature = "tracing")]
        {
            tokens += 1;
            written += jsx.len();
        }
    }

    debug!(tokens, bytes = written, "conversion complete");
    Ok(())
}

/// Convert an in-memory HTML string and return the JSX.
///
/// ```rust
/// let jsx = html2jsx::convert_str(r#"<input type="text" read-only="">"#).unwrap();
/// assert_eq!(jsx, r#"<input type="text" readOnly="">"#);
/// ```
pub fn convert_str(html: &str) -> Result<String, ConvertError> {
    let mut out = Vec::with_capacity(html.len() + html.len() / 8);
    convert(html.as_bytes(), &mut out)?;
    // input was a str and every emitted piece is a str
    String::from_utf8(out).map_err(|e| {
        ConvertError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
