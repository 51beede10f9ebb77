//! Token data model shared by the tokenizer adapter and the rewriter.
//!
//! A [`Token`] is one lexical unit of HTML: a start, end or self-closing tag,
//! a run of character data, a comment or a doctype. Tokens are produced by
//! [`TokenStream`](crate::TokenStream), handed to
//! [`rewrite_token`](crate::rewrite_token) once, and then dropped.

use html5ever::LocalName;
use html5ever::tendril::StrTendril;
use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for tag attributes. Most tags carry a handful at most.
pub type Attributes = SmallVec<[RawAttribute; 4]>;

/// One parsed unit of HTML input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="value">`
    Start(Tag),
    /// `<name attr="value"/>`
    SelfClosing(Tag),
    /// `</name>`
    End(LocalName),
    /// Character data, already decoded by the tokenizer.
    Text(StrTendril),
    /// `<!-- ... -->`
    Comment(StrTendril),
    /// `<!DOCTYPE name>`; the name is absent for a bare `<!DOCTYPE>`.
    Doctype(Option<StrTendril>),
    /// End-of-input marker. The tokenizer signals end of input by finishing
    /// its iteration, so this only reaches the rewriter when a caller builds
    /// token sequences by hand.
    Eof,
}

impl Token {
    /// The kind tag of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Start(_) => TokenKind::Start,
            Token::SelfClosing(_) => TokenKind::SelfClosing,
            Token::End(_) => TokenKind::End,
            Token::Text(_) => TokenKind::Text,
            Token::Comment(_) => TokenKind::Comment,
            Token::Doctype(_) => TokenKind::Doctype,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// Convenience constructor for a text token.
    pub fn text(text: &str) -> Self {
        Token::Text(StrTendril::from_slice(text))
    }

    /// Convenience constructor for an end tag token.
    pub fn end(name: &str) -> Self {
        Token::End(LocalName::from(name))
    }
}

/// The kind of a [`Token`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Start,
    End,
    SelfClosing,
    Text,
    Comment,
    Doctype,
    Eof,
}

impl TokenKind {
    /// Human-readable name, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Start => "StartTag",
            TokenKind::End => "EndTag",
            TokenKind::SelfClosing => "SelfClosingTag",
            TokenKind::Text => "Text",
            TokenKind::Comment => "Comment",
            TokenKind::Doctype => "Doctype",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag name plus its attributes, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    pub name: LocalName,
    pub attrs: Attributes,
}

impl Tag {
    /// Create a tag with no attributes.
    pub fn new(name: &str) -> Self {
        Self {
            name: LocalName::from(name),
            attrs: Attributes::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push(RawAttribute::new(name, value));
        self
    }
}

/// An attribute exactly as the tokenizer produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawAttribute {
    pub name: LocalName,
    pub value: StrTendril,
}

impl RawAttribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: LocalName::from(name),
            value: StrTendril::from_slice(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Token::Start(Tag::new("div")).kind(), TokenKind::Start);
        assert_eq!(
            Token::SelfClosing(Tag::new("br")).kind(),
            TokenKind::SelfClosing
        );
        assert_eq!(Token::end("div").kind(), TokenKind::End);
        assert_eq!(Token::text("abc").kind(), TokenKind::Text);
        assert_eq!(Token::Doctype(None).kind(), TokenKind::Doctype);
        assert_eq!(Token::Eof.kind(), TokenKind::Eof);
    }

    #[test]
    fn tag_builder_keeps_attribute_order() {
        let tag = Tag::new("div")
            .with_attr("aria-hidden", "true")
            .with_attr("class", "bg-white");
        let names: Vec<&str> = tag.attrs.iter().map(|a| &*a.name).collect();
        assert_eq!(names, ["aria-hidden", "class"]);
    }
}
