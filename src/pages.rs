use sailfish::TemplateOnce;

/// `<button onclick="location.href='{endpoint}?{query}'">{label}</button>`
#[derive(TemplateOnce)]
#[template(path = "button.stpl")]
pub(crate) struct ButtonMarkup<'a> {
    pub(crate) endpoint: &'a str,
    pub(crate) query: &'a str,
    pub(crate) label: &'a str,
}

/// Landing page of the demo server.
#[derive(TemplateOnce)]
#[template(path = "index.stpl")]
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub endpoint: &'a str,
    pub redirect_uri: &'a str,
    pub button: String,
    pub toggle_href: &'a str,
    pub toggle_text: &'a str,
}
