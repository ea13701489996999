//! Query-string helpers for building authorization URLs.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Ordered key/value parameters of a query string.
pub type Params = BTreeMap<String, String>;

/// Everything but the RFC 3986 unreserved characters gets escaped. `'` in
/// particular must never survive, the URL ends up inside a quoted JS string.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single key or value.
pub fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Serialize `params` as `key=value` pairs joined by `&`.
pub fn stringify(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string. Pairs without `=` map to an empty value; a
/// repeated key keeps the last value.
pub fn parse(query: &str) -> Params {
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = match pair.find('=') {
                Some(at) => (&pair[..at], &pair[at + 1..]),
                None => (pair, ""),
            };
            (decode(key), decode(value))
        })
        .collect()
}

/// Copy every entry of `source` onto `target`, overwriting shared keys.
pub fn merge(mut target: Params, source: Params) -> Params {
    target.extend(source);
    target
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}
