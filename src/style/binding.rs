//! Class-name binding expressions.
//!
//! A binding ties a CSS class to a widget property:
//!
//! | Expression            | Meaning                                              |
//! |-----------------------|------------------------------------------------------|
//! | `brandClass`          | text value is the class; `true` binds `brand-class`  |
//! | `link:btn-link`       | `btn-link` while `link` is truthy                    |
//! | `active:on:off`       | `on` while truthy, `off` otherwise                   |
//! | `active::off`         | `off` while falsy, nothing otherwise                 |
//! | `:rad-static`         | always `rad-static`                                  |
//!
//! Expressions are lexed with logos and evaluated against [`BoundValue`]s using
//! [`truth_convert`].

use logos::Logos;

use crate::truth::{truth_convert, Truthiness};

/// Errors from parsing a binding expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("empty class binding")]
    Empty,
    #[error("invalid character at byte {position} in `{source_text}`")]
    InvalidCharacter { position: usize, source_text: String },
    #[error("expected a single name in segment {segment} of `{source_text}`")]
    ExpectedName { segment: usize, source_text: String },
    #[error("too many segments in `{0}` (at most property:truthy:falsy)")]
    TooManySegments(String),
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
enum Token {
    #[token(":")]
    Colon,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Name,
}

// ---------------------------------------------------------------------------
// BoundValue
// ---------------------------------------------------------------------------

/// The current value of a bound property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    Text(String),
    Flag(bool),
    Absent,
}

impl From<bool> for BoundValue {
    fn from(value: bool) -> Self {
        BoundValue::Flag(value)
    }
}

impl From<Option<String>> for BoundValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(BoundValue::Absent, BoundValue::Text)
    }
}

impl From<&str> for BoundValue {
    fn from(value: &str) -> Self {
        BoundValue::Text(value.to_owned())
    }
}

impl Truthiness for BoundValue {
    fn coerce(&self) -> bool {
        match self {
            BoundValue::Text(text) => text.coerce(),
            BoundValue::Flag(flag) => *flag,
            BoundValue::Absent => false,
        }
    }
}

// ---------------------------------------------------------------------------
// ClassBinding
// ---------------------------------------------------------------------------

/// A parsed class-name binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBinding {
    /// Bound property; `None` for a static class.
    pub property: Option<String>,
    pub truthy_class: Option<String>,
    pub falsy_class: Option<String>,
}

impl ClassBinding {
    /// `property`: the value itself decides the class.
    pub fn bare(property: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            truthy_class: None,
            falsy_class: None,
        }
    }

    /// `property:class`.
    pub fn when(property: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            property: Some(property.into()),
            truthy_class: Some(class.into()),
            falsy_class: None,
        }
    }

    /// `:class`.
    pub fn fixed(class: impl Into<String>) -> Self {
        Self {
            property: None,
            truthy_class: Some(class.into()),
            falsy_class: None,
        }
    }

    /// Parse a binding expression.
    pub fn parse(source: &str) -> Result<Self, BindingError> {
        if source.trim().is_empty() {
            return Err(BindingError::Empty);
        }

        let mut segments: Vec<Vec<&str>> = vec![Vec::new()];
        for (token, span) in Token::lexer(source).spanned() {
            match token {
                Ok(Token::Colon) => segments.push(Vec::new()),
                Ok(Token::Name) => {
                    if let Some(segment) = segments.last_mut() {
                        segment.push(&source[span]);
                    }
                }
                Err(()) => {
                    return Err(BindingError::InvalidCharacter {
                        position: span.start,
                        source_text: source.to_owned(),
                    })
                }
            }
        }

        if segments.len() > 3 {
            return Err(BindingError::TooManySegments(source.to_owned()));
        }

        let mut names = Vec::with_capacity(3);
        for (index, segment) in segments.iter().enumerate() {
            match segment.as_slice() {
                [] => names.push(None),
                [name] => names.push(Some((*name).to_owned())),
                _ => {
                    return Err(BindingError::ExpectedName {
                        segment: index,
                        source_text: source.to_owned(),
                    })
                }
            }
        }
        names.resize(3, None);
        let mut names = names.into_iter();
        let property = names.next().flatten();
        let truthy_class = names.next().flatten();
        let falsy_class = names.next().flatten();

        // `:` alone or `prop:` binds nothing meaningful.
        if truthy_class.is_none() && falsy_class.is_none() && segments.len() > 1 {
            return Err(BindingError::ExpectedName {
                segment: 1,
                source_text: source.to_owned(),
            });
        }

        Ok(Self {
            property,
            truthy_class,
            falsy_class,
        })
    }

    /// Resolve the class this binding contributes, given a property lookup.
    pub fn resolve(&self, lookup: impl Fn(&str) -> BoundValue) -> Option<String> {
        let Some(property) = &self.property else {
            return self.truthy_class.clone();
        };
        let value = lookup(property);

        if self.truthy_class.is_some() || self.falsy_class.is_some() {
            return if truth_convert(&value) {
                self.truthy_class.clone()
            } else {
                self.falsy_class.clone()
            };
        }

        match value {
            BoundValue::Text(text) if !text.is_empty() => Some(text),
            BoundValue::Flag(true) => Some(dasherize(property)),
            _ => None,
        }
    }
}

/// Parse a list of binding expressions.
pub fn parse_bindings(sources: &[&str]) -> Result<Vec<ClassBinding>, BindingError> {
    sources.iter().map(|s| ClassBinding::parse(s)).collect()
}

/// Resolve every binding in order, skipping the ones that bind nothing.
pub fn resolve_bindings(
    bindings: &[ClassBinding],
    lookup: impl Fn(&str) -> BoundValue,
) -> Vec<String> {
    bindings
        .iter()
        .filter_map(|binding| binding.resolve(&lookup))
        .collect()
}

/// `isActive` -> `is-active`, `brand_class` -> `brand-class`.
fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}
