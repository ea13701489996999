//! "Login with Asana" button for the OAuth implicit grant.
//!
//! The button navigates to the provider's authorization endpoint with
//! `client_id`, `redirect_uri` and `response_type=token` in the query. The
//! provider then sends the browser back to the redirect URI with the access
//! token in the fragment.
//!
//! ```
//! use asana_oauthbutton::{asana_button, dom::markup::Markup};
//!
//! let button = asana_button(&Markup, "http://localhost:8081/", "abc123", false).unwrap();
//! assert_eq!(button.class_list(), vec!["asana"]);
//! ```

pub mod button;
pub mod dom;
pub mod error;
pub mod pages;
pub mod query;
pub mod request;

pub use button::{asana_button, oauth_button, Provider, ALT_CLASS, ASANA};
pub use dom::{Dom, Element, Parsed};
pub use error::{ButtonError, ButtonResult};
pub use request::AuthorizationRequest;
