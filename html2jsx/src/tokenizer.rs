//! Pull-based HTML tokenizer over any [`Read`] source.
//!
//! html5ever's tokenizer is push-based: it is fed text and calls back into a
//! [`TokenSink`] for every token. [`TokenStream`] inverts that into an
//! [`Iterator`] by reading the source a chunk at a time, feeding the chunk,
//! and queueing whatever tokens fall out. Only one chunk (plus at most three
//! bytes of an incomplete UTF-8 sequence) is held in memory at once.

use crate::convert::ConvertOptions;
use crate::error::ParseError;
use crate::token::{Attributes, RawAttribute, Tag, Token};
use crate::tracing_macros::{debug, trace};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag as HtmlTag, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult,
    Tokenizer, TokenizerOpts,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, Read};

/// Lazily tokenizes HTML read from `R`.
///
/// Yields `Ok(token)` for each token in document order, `Err` once if the
/// input cannot be tokenized, and `None` at end of input. After an error the
/// stream is exhausted.
pub struct TokenStream<R> {
    reader: R,
    tokenizer: Tokenizer<Collector>,
    input: BufferQueue,
    /// bytes read but not yet fed (an incomplete UTF-8 sequence)
    pending: Vec<u8>,
    chunk: Box<[u8]>,
    /// bytes successfully decoded so far, for error offsets
    decoded: u64,
    /// decode error found after a valid prefix; reported once that prefix
    /// has been tokenized
    deferred: Option<ParseError>,
    finished: bool,
}

impl<R: Read> TokenStream<R> {
    /// Tokenize `reader` with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, &ConvertOptions::default())
    }

    pub fn with_options(reader: R, options: &ConvertOptions) -> Self {
        let opts = TokenizerOpts {
            exact_errors: options.strict,
            ..Default::default()
        };
        Self {
            reader,
            tokenizer: Tokenizer::new(Collector::new(options.strict), opts),
            input: BufferQueue::default(),
            pending: Vec::new(),
            chunk: vec![0; options.effective_chunk_size()].into_boxed_slice(),
            decoded: 0,
            deferred: None,
            finished: false,
        }
    }

    /// Read the next chunk and feed it to the tokenizer. At end of input the
    /// tokenizer is flushed and `finished` is set.
    fn fill(&mut self) -> Result<(), ParseError> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }

        let n = loop {
            match self.reader.read(&mut self.chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ParseError::Io(e)),
            }
        };

        if n == 0 {
            if !self.pending.is_empty() {
                // truncated multi-byte sequence at the very end
                return Err(ParseError::InvalidUtf8 {
                    offset: self.decoded,
                });
            }
            self.tokenizer.end();
            self.finished = true;
            return Ok(());
        }

        self.pending.extend_from_slice(&self.chunk[..n]);
        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            Err(e) => {
                if e.error_len().is_some() {
                    self.deferred = Some(self.invalid_utf8(e.valid_up_to()));
                }
                e.valid_up_to()
            }
        };
        if valid == 0 {
            return Ok(());
        }

        let text = std::str::from_utf8(&self.pending[..valid])
            .map_err(|e| self.invalid_utf8(e.valid_up_to()))?;
        self.input.push_back(StrTendril::from_slice(text));
        self.pending.drain(..valid);
        self.decoded += valid as u64;

        // Collector never asks for TokenSinkResult::Script, so this is always Done
        let _ = self.tokenizer.feed(&self.input);
        Ok(())
    }

    /// `at` is relative to the start of `pending`.
    fn invalid_utf8(&self, at: usize) -> ParseError {
        ParseError::InvalidUtf8 {
            offset: self.decoded + at as u64,
        }
    }

    fn fail(&mut self, err: ParseError) -> Option<Result<Token, ParseError>> {
        self.finished = true;
        self.tokenizer.sink.queue.borrow_mut().clear();
        Some(Err(err))
    }
}

impl<R: Read> Iterator for TokenStream<R> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let queued = self.tokenizer.sink.queue.borrow_mut().pop_front();
            match queued {
                Some(Ok(token)) => return Some(Ok(token)),
                Some(Err(err)) => return self.fail(err),
                None if self.finished => return None,
                None => {
                    if let Err(err) = self.fill() {
                        return self.fail(err);
                    }
                }
            }
        }
    }
}

/// Receives html5ever tokens and queues them in our token model.
struct Collector {
    queue: RefCell<VecDeque<Result<Token, ParseError>>>,
    strict: bool,
    failed: Cell<bool>,
}

impl Collector {
    fn new(strict: bool) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            strict,
            failed: Cell::new(false),
        }
    }

    fn push(&self, token: Token) {
        trace!(kind = %token.kind(), "token");
        self.queue.borrow_mut().push_back(Ok(token));
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&self, token: HtmlToken, line_number: u64) -> TokenSinkResult<()> {
        if self.failed.get() {
            return TokenSinkResult::Continue;
        }

        match token {
            HtmlToken::TagToken(tag) => {
                let next = raw_state_after(&tag);
                self.push(convert_tag(tag));
                return next;
            }
            HtmlToken::CharacterTokens(text) => self.push(Token::Text(text)),
            HtmlToken::NullCharacterToken => self.push(Token::text("\u{FFFD}")),
            HtmlToken::CommentToken(text) => self.push(Token::Comment(text)),
            HtmlToken::DoctypeToken(doctype) => self.push(Token::Doctype(doctype.name)),
            HtmlToken::EOFToken => {}
            HtmlToken::ParseError(message) => {
                if self.strict {
                    self.failed.set(true);
                    let err = ParseError::Tokenizer {
                        line: line_number,
                        message,
                    };
                    self.queue.borrow_mut().push_back(Err(err));
                } else {
                    debug!(line = line_number, %message, "ignoring tokenizer diagnostic");
                }
            }
        }
        TokenSinkResult::Continue
    }
}

fn convert_tag(tag: HtmlTag) -> Token {
    match tag.kind {
        TagKind::EndTag => Token::End(tag.name),
        TagKind::StartTag => {
            let attrs: Attributes = tag
                .attrs
                .into_iter()
                .map(|attr| RawAttribute {
                    name: attr.name.local,
                    value: attr.value,
                })
                .collect();
            let converted = Tag {
                name: tag.name,
                attrs,
            };
            if tag.self_closing {
                Token::SelfClosing(converted)
            } else {
                Token::Start(converted)
            }
        }
    }
}

/// Elements whose content is not markup. Without a tree builder to tell it,
/// the tokenizer would otherwise read `<script>if (a<b)</script>` as tags.
fn raw_state_after(tag: &HtmlTag) -> TokenSinkResult<()> {
    if tag.kind != TagKind::StartTag || tag.self_closing {
        return TokenSinkResult::Continue;
    }
    match &*tag.name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}
