//! Streaming HTML to JSX conversion on top of html5ever's tokenizer.
//!
//! html2jsx provides:
//! - **Tokenizing**: a pull-based [`TokenStream`] over any [`std::io::Read`]
//! - **Rewriting**: per-token JSX output, with attribute names converted to
//!   JSX props (`class` → `className`, `tab-index` → `tabIndex`, `aria-*` kept)
//! - **Conversion**: a driver that streams tokens from a reader to a writer
//!
//! Comments and doctypes are dropped. Text and attribute values are copied
//! verbatim; no escaping is applied.
//!
//! # Example
//!
//! ```rust
//! use html2jsx::{convert_str, ConvertError};
//!
//! let jsx = convert_str(r#"<!-- nav --><div aria-hidden="true" class="bg-white">abc<br/></div>"#)?;
//! assert_eq!(jsx, r#"<div aria-hidden="true" className="bg-white">abc<br/></div>"#);
//!
//! // Attribute names with more than one hyphen have no single camelCase form
//! let err = convert_str(r#"<div data-foo-bar="x"></div>"#).unwrap_err();
//! assert!(err.is_conversion());
//! # Ok::<(), ConvertError>(())
//! ```

mod tracing_macros;

mod attribute;
mod convert;
mod error;
mod rewrite;
mod token;
mod tokenizer;

// Re-export the conversion driver
pub use convert::{ConvertOptions, convert, convert_str, convert_with_options};

// Re-export the rewriting rules
pub use attribute::{Attribute, convert_attribute, convert_attribute_key, kebab_to_camel};
pub use rewrite::{end_tag, rewrite_token, start_tag};

// Re-export the token model and tokenizer
pub use token::{Attributes, RawAttribute, Tag, Token, TokenKind};
pub use tokenizer::TokenStream;

pub use error::{AttributeError, CaseError, ConvertError, ParseError, RewriteError};

// Types that appear in the public token model
pub use html5ever::LocalName;
pub use html5ever::tendril::StrTendril;
