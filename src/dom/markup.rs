//! In-memory DOM used off the browser: server-side rendering and tests.

use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::{first_tag, Dom, Element, Parsed};
use crate::error::{ButtonError, ButtonResult};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(
        r#"(?s)<!--.*?-->|</\s*([\w:-]+)\s*>|<([\w:-]+)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#
    )
    .unwrap();
    static ref ATTRIBUTE: Regex = Regex::new(
        r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#
    )
    .unwrap();
    static ref ENTITY: Regex = Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap();
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parses markup into owned [`Node`] trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct Markup;

impl Dom for Markup {
    type Element = Node;

    fn parse(&self, html: &str) -> ButtonResult<Parsed<Node>> {
        let html = html.trim();
        if first_tag(html).is_none() {
            return Err(ButtonError::NoElements);
        }

        let mut elements: Vec<Node> = parse_fragment(html)
            .into_iter()
            .filter_map(|content| match content {
                Content::Element(node) => Some(node),
                Content::Text(_) => None,
            })
            .collect();

        if elements.len() == 1 {
            Ok(Parsed::Element(elements.remove(0)))
        } else {
            Ok(Parsed::Fragment(elements))
        }
    }
}

/// Child of a [`Node`].
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Element(Node),
    Text(String),
}

/// An element with its attributes and children. `Display` writes it back out
/// as HTML.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Content>,
}

impl Node {
    pub fn new(tag: &str) -> Node {
        Node {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl Element for Node {
    fn set_attribute(&mut self, name: &str, value: &str) -> ButtonResult<()> {
        let name = name.to_ascii_lowercase();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value.to_owned(),
            None => self.attributes.push((name, value.to_owned())),
        }
        Ok(())
    }

    fn add_class(&mut self, class: &str) -> ButtonResult<()> {
        let classes = self.class_list();
        if classes.contains(&class) {
            return Ok(());
        }

        let mut value = classes.join(" ");
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(class);
        self.set_attribute("class", &value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value, true))?;
        }
        f.write_str(">")?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            match child {
                Content::Element(node) => write!(f, "{}", node)?,
                Content::Text(text) => f.write_str(&escape(text, false))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn collect_text(node: &Node, out: &mut String) {
    for child in &node.children {
        match child {
            Content::Element(node) => collect_text(node, out),
            Content::Text(text) => out.push_str(text),
        }
    }
}

fn parse_fragment(html: &str) -> Vec<Content> {
    let mut root = Vec::new();
    let mut open: Vec<Node> = Vec::new();
    let mut last = 0;

    for caps in TOKEN.captures_iter(html) {
        let token = match caps.get(0) {
            Some(token) => token,
            None => continue,
        };
        push_text(&mut open, &mut root, &html[last..token.start()]);
        last = token.end();

        if let Some(name) = caps.get(1) {
            close(&mut open, &mut root, &name.as_str().to_ascii_lowercase());
        } else if let Some(name) = caps.get(2) {
            let mut node = Node::new(name.as_str());
            node.attributes = parse_attributes(caps.get(3).map_or("", |m| m.as_str()));

            let self_closing = caps.get(4).map_or(false, |m| !m.as_str().is_empty());
            if self_closing || node.is_void() {
                append(&mut open, &mut root, Content::Element(node));
            } else {
                open.push(node);
            }
        }
    }
    push_text(&mut open, &mut root, &html[last..]);

    // Unclosed elements end with the input.
    while let Some(node) = open.pop() {
        append(&mut open, &mut root, Content::Element(node));
    }
    root
}

fn parse_attributes(source: &str) -> Vec<(String, String)> {
    let mut attributes: Vec<(String, String)> = Vec::new();
    for caps in ATTRIBUTE.captures_iter(source) {
        let name = match caps.get(1) {
            Some(name) => name.as_str().to_ascii_lowercase(),
            None => continue,
        };
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or(String::new(), |m| decode_entities(m.as_str()));

        // First occurrence wins, as in browsers.
        if !attributes.iter().any(|(key, _)| *key == name) {
            attributes.push((name, value));
        }
    }
    attributes
}

fn push_text(open: &mut Vec<Node>, root: &mut Vec<Content>, raw: &str) {
    if !raw.is_empty() {
        append(open, root, Content::Text(decode_entities(raw)));
    }
}

fn append(open: &mut Vec<Node>, root: &mut Vec<Content>, content: Content) {
    match open.last_mut() {
        Some(parent) => parent.children.push(content),
        None => root.push(content),
    }
}

fn close(open: &mut Vec<Node>, root: &mut Vec<Content>, tag: &str) {
    // Stray end tags are ignored.
    if let Some(depth) = open.iter().rposition(|node| node.tag == tag) {
        while open.len() > depth {
            if let Some(node) = open.pop() {
                append(open, root, Content::Element(node));
            }
        }
    }
}

fn decode_entities(raw: &str) -> String {
    ENTITY
        .replace_all(raw, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ if name.starts_with("#x") || name.starts_with("#X") => {
                    u32::from_str_radix(&name[2..], 16).ok().and_then(std::char::from_u32)
                }
                _ if name.starts_with('#') => {
                    name[1..].parse::<u32>().ok().and_then(std::char::from_u32)
                }
                _ => None,
            };
            decoded.map_or_else(|| whole.to_owned(), |c| c.to_string())
        })
        .into_owned()
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}
