use log::debug;
use sailfish::TemplateOnce;

use crate::dom::{Dom, Element, Parsed};
use crate::error::ButtonResult;
use crate::pages::ButtonMarkup;
use crate::request::AuthorizationRequest;

/// Extra class selecting the alternate styling.
pub const ALT_CLASS: &str = "alt";

/// Fixed presentation of one OAuth provider's login button.
#[derive(Clone, Copy, Debug)]
pub struct Provider {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub title: &'static str,
    pub class: &'static str,
}

pub const ASANA: Provider = Provider {
    name: "Asana",
    endpoint: "https://app.asana.com/-/oauth_authorize",
    title: "Login with Asana",
    class: "asana",
};

/// Render `request` into the button template and parse it with `dom`.
pub fn oauth_button<D: Dom>(
    dom: &D,
    request: &AuthorizationRequest,
) -> ButtonResult<Parsed<D::Element>> {
    let query = request.query();
    debug!("building button for {}?{}", request.endpoint(), query);

    let html = ButtonMarkup {
        endpoint: request.endpoint().as_str(),
        query: &query,
        label: request.label_markup(),
    }
    .render_once()?;

    dom.parse(&html)
}

impl Provider {
    /// Authorization request for this provider, returning to `location`.
    pub fn request(&self, location: &str, client_id: &str) -> ButtonResult<AuthorizationRequest> {
        Ok(AuthorizationRequest::new(self.endpoint, location)?
            .client_id(client_id)
            .label("&nbsp;"))
    }

    /// Login button for `client_id`. The client id is not validated, the
    /// provider rejects bad ones.
    pub fn button<D: Dom>(
        &self,
        dom: &D,
        location: &str,
        client_id: &str,
        alt: bool,
    ) -> ButtonResult<D::Element> {
        let request = self.request(location, client_id)?;
        let mut button = oauth_button(dom, &request)?.into_element()?;

        button.set_attribute("title", self.title)?;
        button.add_class(self.class)?;
        if alt {
            button.add_class(ALT_CLASS)?;
        }

        Ok(button)
    }
}

/// "Login with Asana" button for `client_id`.
pub fn asana_button<D: Dom>(
    dom: &D,
    location: &str,
    client_id: &str,
    alt: bool,
) -> ButtonResult<D::Element> {
    ASANA.button(dom, location, client_id, alt)
}
