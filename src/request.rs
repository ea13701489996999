use log::warn;
use url::Url;

use crate::error::ButtonResult;
use crate::query::{self, Params};

/// Implicit grant: the token comes back in the redirect fragment.
pub const RESPONSE_TYPE: &str = "token";

/// Rendered when no label is given.
pub const DEFAULT_LABEL: &str = "&nbsp;";

/// Parameters of a single authorization redirect.
#[derive(Clone, Debug)]
pub struct AuthorizationRequest {
    endpoint: Url,
    client_id: String,
    redirect_uri: String,
    extra_params: Params,
    label: String,
}

impl AuthorizationRequest {
    /// Start a request against `endpoint`, redirecting back to `location`
    /// (normally the URL of the page the button is shown on).
    pub fn new(endpoint: &str, location: &str) -> ButtonResult<AuthorizationRequest> {
        Ok(AuthorizationRequest {
            endpoint: Url::parse(endpoint)?,
            client_id: String::new(),
            redirect_uri: location.to_owned(),
            extra_params: Params::new(),
            label: DEFAULT_LABEL.to_owned(),
        })
    }

    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = client_id.to_owned();
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = redirect_uri.to_owned();
        self
    }

    /// Add a caller parameter. Caller parameters are merged last, so they
    /// win over `client_id`, `redirect_uri` and `response_type`.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.extra_params.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Button content. Inserted as raw markup.
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn label_markup(&self) -> &str {
        &self.label
    }

    /// Defaults merged with the caller's parameters.
    pub fn params(&self) -> Params {
        let mut defaults = Params::new();
        defaults.insert("redirect_uri".to_owned(), self.redirect_uri.clone());
        defaults.insert("response_type".to_owned(), RESPONSE_TYPE.to_owned());

        for key in self.extra_params.keys() {
            if defaults.contains_key(key) {
                warn!("caller parameter `{}` overrides the default value", key);
            }
        }

        let mut opts = Params::new();
        opts.insert("client_id".to_owned(), self.client_id.clone());
        let opts = query::merge(opts, self.extra_params.clone());

        query::merge(defaults, opts)
    }

    /// Percent-encoded query string of [`params`](Self::params).
    pub fn query(&self) -> String {
        query::stringify(&self.params())
    }

    /// Full navigation target: `{endpoint}?{query}`.
    pub fn authorize_url(&self) -> String {
        format!("{}?{}", self.endpoint, self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://example.com/oauth/authorize";

    #[test]
    fn defaults() {
        let request = AuthorizationRequest::new(ENDPOINT, "http://localhost:8081/")
            .unwrap()
            .client_id("LocalClient");

        assert_eq!(
            request.authorize_url(),
            "https://example.com/oauth/authorize?client_id=LocalClient\
             &redirect_uri=http%3A%2F%2Flocalhost%3A8081%2F&response_type=token"
        );
        assert_eq!(request.label_markup(), DEFAULT_LABEL);
    }

    #[test]
    fn caller_params_override_defaults() {
        let params = AuthorizationRequest::new(ENDPOINT, "http://localhost/")
            .unwrap()
            .client_id("abc")
            .param("response_type", "code")
            .param("scope", "default")
            .params();

        assert_eq!(params["response_type"], "code");
        assert_eq!(params["redirect_uri"], "http://localhost/");
        assert_eq!(params["scope"], "default");
        assert_eq!(params["client_id"], "abc");
    }

    #[test]
    fn redirect_uri_override() {
        let params = AuthorizationRequest::new(ENDPOINT, "http://localhost/")
            .unwrap()
            .redirect_uri("http://localhost/callback")
            .params();

        assert_eq!(params["redirect_uri"], "http://localhost/callback");
    }

    #[test]
    fn empty_client_id_passes_through() {
        let request = AuthorizationRequest::new(ENDPOINT, "/").unwrap();
        assert!(request.query().starts_with("client_id=&"));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        assert!(AuthorizationRequest::new("/-/oauth_authorize", "/").is_err());
    }
}
