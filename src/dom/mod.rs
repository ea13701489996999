//! DOM construction capability.
//!
//! The button factory never touches a document directly. It hands its markup
//! to a [`Dom`] and mutates the resulting [`Element`], so the same code runs
//! against a live browser document or the in-memory [`markup`] tree.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ButtonResult;

#[cfg(feature = "browser")]
pub mod browser;
pub mod markup;

lazy_static! {
    static ref FIRST_TAG: Regex = Regex::new(r"<([\w:]+)").unwrap();
}

/// Result of parsing an HTML fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed<E> {
    /// Exactly one top-level element.
    Element(E),
    /// Zero or several top-level elements, in document order.
    Fragment(Vec<E>),
}

impl<E> Parsed<E> {
    /// Unwrap the single root element, failing for fragments.
    pub fn into_element(self) -> ButtonResult<E> {
        match self {
            Parsed::Element(element) => Ok(element),
            Parsed::Fragment(elements) => {
                Err(crate::error::ButtonError::NotSingleElement(elements.len()))
            }
        }
    }
}

/// Something that turns an HTML string into live elements.
pub trait Dom {
    type Element: Element;

    /// Parse trimmed `html`. Fails with
    /// [`NoElements`](crate::error::ButtonError::NoElements) when the input
    /// contains no tag at all.
    fn parse(&self, html: &str) -> ButtonResult<Parsed<Self::Element>>;
}

/// The attribute and class mutations the factory needs.
pub trait Element {
    fn set_attribute(&mut self, name: &str, value: &str) -> ButtonResult<()>;

    /// Add `class` to the class list unless it is already present.
    fn add_class(&mut self, class: &str) -> ButtonResult<()>;
}

/// Name of the first tag in `html`, if any.
pub(crate) fn first_tag(html: &str) -> Option<&str> {
    FIRST_TAG
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}
