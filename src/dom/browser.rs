//! Live document backend, for wasm32 builds with the `browser` feature.

use super::{first_tag, Dom, Element, Parsed};
use crate::error::{ButtonError, ButtonResult};

/// Parses markup with `innerHTML` on a detached `div` of `document`.
pub struct BrowserDom {
    document: web_sys::Document,
}

impl BrowserDom {
    pub fn new(document: web_sys::Document) -> BrowserDom {
        BrowserDom { document }
    }

    /// Dom of the window's current document.
    pub fn current() -> ButtonResult<BrowserDom> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ButtonError::Dom("No document found".to_owned()))?;
        Ok(BrowserDom::new(document))
    }

    /// `window.location.href`, the default redirect URI.
    pub fn current_location() -> ButtonResult<String> {
        let window =
            web_sys::window().ok_or_else(|| ButtonError::Dom("No window found".to_owned()))?;
        Ok(window.location().href()?)
    }
}

impl Dom for BrowserDom {
    type Element = web_sys::Element;

    fn parse(&self, html: &str) -> ButtonResult<Parsed<web_sys::Element>> {
        let html = html.trim();
        if first_tag(html).is_none() {
            return Err(ButtonError::NoElements);
        }

        let container = self.document.create_element("div")?;
        container.set_inner_html(html);

        // `children` is live: detaching the first child shifts the rest down.
        let children = container.children();
        let mut elements = Vec::with_capacity(children.length() as usize);
        while let Some(element) = children.item(0) {
            element.remove();
            elements.push(element);
        }

        if elements.len() == 1 {
            Ok(Parsed::Element(elements.remove(0)))
        } else {
            Ok(Parsed::Fragment(elements))
        }
    }
}

impl Element for web_sys::Element {
    fn set_attribute(&mut self, name: &str, value: &str) -> ButtonResult<()> {
        web_sys::Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn add_class(&mut self, class: &str) -> ButtonResult<()> {
        self.class_list().add_1(class)?;
        Ok(())
    }
}
