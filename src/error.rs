use thiserror::Error;

/// Failures while building a login button.
///
/// All of these are construction-time defects (a broken template, a bad
/// endpoint literal); none are meant to be recovered from at runtime.
#[derive(Debug, Error)]
pub enum ButtonError {
    #[error("No elements were generated.")]
    NoElements,

    #[error("expected a single root element, template produced {0}")]
    NotSingleElement(usize),

    #[error("invalid authorization endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to render button template: {0}")]
    Render(#[from] sailfish::RenderError),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type ButtonResult<T> = Result<T, ButtonError>;

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for ButtonError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ButtonError::Dom(format!("{:?}", value))
    }
}
