//! HTML attribute names to JSX prop names.
//!
//! JSX expects DOM property names in camelCase, with two exceptions that
//! matter for markup pasted from HTML: `class` becomes `className`, and
//! `aria-*` attributes keep their hyphenated form.

use crate::error::{AttributeError, CaseError};
use crate::token::RawAttribute;
use html5ever::tendril::StrTendril;
use std::borrow::Cow;

/// Prefix of accessibility attributes, which JSX keeps hyphenated.
const ARIA_PREFIX: &str = "aria-";

/// An attribute after its name has been rewritten. The value is carried over
/// verbatim; no escaping is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: StrTendril,
}

/// Rewrite one attribute, keeping its value untouched.
pub fn convert_attribute(attr: &RawAttribute) -> Result<Attribute, AttributeError> {
    let key = convert_attribute_key(&attr.name).map_err(|source| AttributeError {
        name: attr.name.clone(),
        source,
    })?;
    Ok(Attribute {
        key: key.into_owned(),
        value: attr.value.clone(),
    })
}

/// Rewrite an attribute name. First matching rule wins:
///
/// 1. `aria-*` is returned unchanged,
/// 2. `class` becomes `className`,
/// 3. anything else goes through [`kebab_to_camel`].
pub fn convert_attribute_key(key: &str) -> Result<Cow<'_, str>, CaseError> {
    if key.starts_with(ARIA_PREFIX) {
        return Ok(Cow::Borrowed(key));
    }
    if key == "class" {
        return Ok(Cow::Borrowed("className"));
    }
    if !key.contains('-') {
        return Ok(Cow::Borrowed(key));
    }
    kebab_to_camel(key).map(Cow::Owned)
}

/// Convert `kebab-case` to `camelCase`.
///
/// Hyphens are dropped and the character right after a hyphen is
/// upper-cased. A second hyphen after an earlier one is rejected with
/// [`CaseError::MultipleHyphens`], since `data-foo-bar` has no single
/// obvious camelCase spelling as a DOM property.
pub fn kebab_to_camel(kebab: &str) -> Result<String, CaseError> {
    let mut hyphen: Option<usize> = None;
    let mut out = String::with_capacity(kebab.len());

    for (i, c) in kebab.char_indices() {
        if c == '-' {
            if let Some(first) = hyphen
                && first < i
            {
                return Err(CaseError::MultipleHyphens { first, second: i });
            }
            hyphen = Some(i);
            continue;
        }

        // '-' is one byte wide, so the next char starts at hyphen + 1
        if hyphen.is_some_and(|h| i == h + 1) {
            out.extend(c.to_uppercase());
            continue;
        }

        out.push(c);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_becomes_class_name() {
        assert_eq!(convert_attribute_key("class").unwrap(), "className");
    }

    #[test]
    fn aria_attributes_pass_through() {
        assert_eq!(convert_attribute_key("aria-hidden").unwrap(), "aria-hidden");
        assert_eq!(
            convert_attribute_key("aria-current-page").unwrap(),
            "aria-current-page"
        );
    }

    #[test]
    fn aria_without_hyphen_is_not_exempt() {
        // only the literal "aria-" prefix is exempt
        assert_eq!(convert_attribute_key("ariaLabel").unwrap(), "ariaLabel");
        assert!(convert_attribute_key("x-aria-y").is_err());
    }

    #[test]
    fn plain_names_are_borrowed() {
        assert!(matches!(
            convert_attribute_key("onclick"),
            Ok(Cow::Borrowed("onclick"))
        ));
    }

    #[test]
    fn single_hyphen_camel_cases() {
        assert_eq!(
            kebab_to_camel("custom-attribute").unwrap(),
            "customAttribute"
        );
        assert_eq!(kebab_to_camel("tab-index").unwrap(), "tabIndex");
    }

    #[test]
    fn hyphen_boundary_cases() {
        let cases: &[(&str, Result<&str, (usize, usize)>)] = &[
            ("", Ok("")),
            ("id", Ok("id")),
            ("data-foo-bar", Err((4, 8))),
            ("a--b", Err((1, 2))),
            ("a-b-c-d", Err((1, 3))),
            // a leading hyphen is recorded like any other, so it upper-cases
            // the next char and counts towards the limit (0 is not "unset")
            ("-foo", Ok("Foo")),
            ("-foo-bar", Err((0, 4))),
            ("foo-", Ok("foo")),
            ("-", Ok("")),
            ("data-ß", Ok("dataSS")),
            ("über-größe", Ok("überGröße")),
        ];

        for (input, expected) in cases {
            let got = kebab_to_camel(input);
            match expected {
                Ok(out) => assert_eq!(got.as_deref(), Ok(*out), "input {input:?}"),
                Err((first, second)) => assert_eq!(
                    got,
                    Err(CaseError::MultipleHyphens {
                        first: *first,
                        second: *second
                    }),
                    "input {input:?}"
                ),
            }
        }
    }

    #[test]
    fn convert_attribute_keeps_value_verbatim() {
        let attr = RawAttribute::new("data-x", "a \"quoted\" & <raw> value");
        let converted = convert_attribute(&attr).unwrap();
        assert_eq!(converted.key, "dataX");
        assert_eq!(&*converted.value, "a \"quoted\" & <raw> value");
    }

    #[test]
    fn convert_attribute_reports_the_name() {
        let err = convert_attribute(&RawAttribute::new("data-foo-bar", "x")).unwrap_err();
        assert_eq!(&*err.name, "data-foo-bar");
        assert_eq!(
            err.source,
            CaseError::MultipleHyphens {
                first: 4,
                second: 8
            }
        );
        assert!(err.to_string().contains("data-foo-bar"));
    }
}
