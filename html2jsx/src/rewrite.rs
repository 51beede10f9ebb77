//! Token to JSX text.
//!
//! Every function here is pure: a token in, a string (or an error) out.
//! Comments and doctypes have no JSX form and rewrite to the empty string.

use crate::attribute::{Attribute, convert_attribute};
use crate::error::RewriteError;
use crate::token::{Tag, Token};
use smallvec::SmallVec;

const TAG_OPEN: char = '<';
const TAG_CLOSE: char = '>';
const SLASH: char = '/';
const EQUALS: char = '=';
const SPACE: char = ' ';
const QUOTE: char = '"';

/// Rewrite a single token into its JSX representation.
pub fn rewrite_token(token: &Token) -> Result<String, RewriteError> {
    match token {
        Token::Start(tag) => start_tag(tag, false),
        Token::SelfClosing(tag) => start_tag(tag, true),
        Token::End(name) => Ok(end_tag(name)),
        Token::Text(text) => Ok(text.to_string()),
        Token::Comment(_) | Token::Doctype(_) => Ok(String::new()),
        Token::Eof => Err(RewriteError::UnsupportedToken(token.kind())),
    }
}

/// Build `<name key="value" ...>`, or `<name key="value" .../>` when
/// `self_closing` is set.
///
/// Attribute order is preserved. If any attribute name cannot be converted
/// the whole tag fails; no partial output is produced.
pub fn start_tag(tag: &Tag, self_closing: bool) -> Result<String, RewriteError> {
    let attrs = tag
        .attrs
        .iter()
        .map(convert_attribute)
        .collect::<Result<SmallVec<[Attribute; 4]>, _>>()
        .map_err(|source| RewriteError::StartTag {
            tag: tag.name.clone(),
            source,
        })?;

    let len = tag.name.len()
        + attrs
            .iter()
            .map(|a| a.key.len() + a.value.len() + 4)
            .sum::<usize>()
        + 3;
    let mut out = String::with_capacity(len);

    out.push(TAG_OPEN);
    out.push_str(&tag.name);
    for attr in &attrs {
        out.push(SPACE);
        out.push_str(&attr.key);
        out.push(EQUALS);
        out.push(QUOTE);
        out.push_str(&attr.value);
        out.push(QUOTE);
    }
    if self_closing {
        out.push(SLASH);
    }
    out.push(TAG_CLOSE);
    Ok(out)
}

/// Build `</name>`.
pub fn end_tag(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 3);
    out.push(TAG_OPEN);
    out.push(SLASH);
    out.push_str(name);
    out.push(TAG_CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;
    use crate::token::TokenKind;
    use html5ever::tendril::StrTendril;

    #[test]
    fn start_tag_without_attributes() {
        assert_eq!(
            rewrite_token(&Token::Start(Tag::new("div"))).unwrap(),
            "<div>"
        );
    }

    #[test]
    fn start_tag_rewrites_keys_in_order() {
        let tag = Tag::new("div")
            .with_attr("aria-hidden", "true")
            .with_attr("class", "bg-white")
            .with_attr("tab-index", "0");
        assert_eq!(
            rewrite_token(&Token::Start(tag)).unwrap(),
            r#"<div aria-hidden="true" className="bg-white" tabIndex="0">"#
        );
    }

    #[test]
    fn self_closing_gets_trailing_slash() {
        let tag = Tag::new("img").with_attr("src", "a.png");
        assert_eq!(
            rewrite_token(&Token::SelfClosing(tag)).unwrap(),
            r#"<img src="a.png"/>"#
        );
        assert_eq!(
            rewrite_token(&Token::SelfClosing(Tag::new("br"))).unwrap(),
            "<br/>"
        );
    }

    #[test]
    fn end_tag_and_text() {
        assert_eq!(rewrite_token(&Token::end("div")).unwrap(), "</div>");
        assert_eq!(
            rewrite_token(&Token::text("a < b & c")).unwrap(),
            "a < b & c"
        );
    }

    #[test]
    fn comments_and_doctypes_are_suppressed() {
        let comment = Token::Comment(StrTendril::from_slice(" hi "));
        assert_eq!(rewrite_token(&comment).unwrap(), "");
        let doctype = Token::Doctype(Some(StrTendril::from_slice("html")));
        assert_eq!(rewrite_token(&doctype).unwrap(), "");
    }

    #[test]
    fn eof_is_unsupported() {
        let err = rewrite_token(&Token::Eof).unwrap_err();
        assert!(matches!(
            err,
            RewriteError::UnsupportedToken(TokenKind::Eof)
        ));
        assert_eq!(err.to_string(), "unexpected token type EOF encountered");
    }

    #[test]
    fn bad_attribute_fails_whole_tag() {
        let tag = Tag::new("div")
            .with_attr("class", "x")
            .with_attr("data-foo-bar", "y");
        let err = start_tag(&tag, false).unwrap_err();
        assert!(err.is_multiple_hyphens());
        match err {
            RewriteError::StartTag { tag, source } => {
                assert_eq!(&*tag, "div");
                assert_eq!(&*source.name, "data-foo-bar");
                assert_eq!(
                    source.source,
                    CaseError::MultipleHyphens {
                        first: 4,
                        second: 8
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
