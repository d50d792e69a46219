//! Declarative display trees.
//!
//! Elements are immutable values built bottom-up. A tree serializes to the
//! `{"type": ..., "props": {...}}` component shape and renders to HTML.

use std::fmt::Write as _;

use serde::{ser::SerializeMap, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    H1,
    H2,
    H3,
    P,
    Ul,
    Li,
    Form,
    Button,
}

impl Tag {
    pub fn component_name(self) -> &'static str {
        match self {
            Tag::Div => "Div",
            Tag::H1 => "H1",
            Tag::H2 => "H2",
            Tag::H3 => "H3",
            Tag::P => "P",
            Tag::Ul => "Ul",
            Tag::Li => "Li",
            Tag::Form => "Form",
            Tag::Button => "Button",
        }
    }

    pub fn html_name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Form => "form",
            Tag::Button => "button",
        }
    }
}

/// Inline style table. Keys are camelCase CSS properties and keep their
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style(Vec<(&'static str, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&'static str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |style, (key, value)| style.with(*key, *value))
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// `self` overlaid with every entry of `other`.
    pub fn merged(&self, other: &Style) -> Style {
        other
            .0
            .iter()
            .fold(self.clone(), |style, (key, value)| style.with(*key, value.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}: {}", kebab_case(key), value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// A chart container holding plotly figure JSON.
    Graph(serde_json::Value),
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Element(element) => element.serialize(serializer),
            Node::Text(text) => serializer.serialize_str(text),
            Node::Graph(figure) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "Graph")?;
                map.serialize_entry("props", &serde_json::json!({ "figure": figure }))?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub style: Style,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            class_name: None,
            style: Style::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Depth-first search for the element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.find_by_id(id),
            _ => None,
        })
    }

    /// All text in document order, concatenated.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
                Node::Graph(_) => {}
            }
        }
    }

    /// Every figure in the tree, in document order.
    pub fn graphs(&self) -> Vec<&serde_json::Value> {
        let mut out = Vec::new();
        self.collect_graphs(&mut out);
        out
    }

    fn collect_graphs<'a>(&'a self, out: &mut Vec<&'a serde_json::Value>) {
        for child in &self.children {
            match child {
                Node::Graph(figure) => out.push(figure),
                Node::Element(element) => element.collect_graphs(out),
                Node::Text(_) => {}
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let tag = self.tag.html_name();
        let _ = write!(out, "<{tag}");
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_html(id));
        }
        if let Some(class_name) = &self.class_name {
            let _ = write!(out, " class=\"{}\"", escape_html(class_name));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape_html(&self.style.to_css()));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
                Node::Graph(figure) => {
                    let _ = write!(
                        out,
                        "<div class=\"graph\" data-figure=\"{}\"></div>",
                        escape_html(&figure.to_string())
                    );
                }
            }
        }
        let _ = write!(out, "</{tag}>");
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.tag.component_name())?;
        map.serialize_entry("props", &Props(self))?;
        map.end()
    }
}

struct Props<'a>(&'a Element);

impl Serialize for Props<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let element = self.0;
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &element.id {
            map.serialize_entry("id", id)?;
        }
        if let Some(class_name) = &element.class_name {
            map.serialize_entry("className", class_name)?;
        }
        if !element.style.is_empty() {
            map.serialize_entry("style", &element.style)?;
        }
        for (name, value) in &element.attributes {
            map.serialize_entry(name, value)?;
        }
        if !element.children.is_empty() {
            map.serialize_entry("children", &element.children)?;
        }
        map.end()
    }
}

pub fn div() -> Element {
    Element::new(Tag::Div)
}

pub fn h1(text: impl Into<String>) -> Element {
    Element::new(Tag::H1).child(text.into())
}

pub fn h2(text: impl Into<String>) -> Element {
    Element::new(Tag::H2).child(text.into())
}

pub fn h3(text: impl Into<String>) -> Element {
    Element::new(Tag::H3).child(text.into())
}

pub fn p(text: impl Into<String>) -> Element {
    Element::new(Tag::P).child(text.into())
}

pub fn ul<I: IntoIterator<Item = &'static str>>(items: I) -> Element {
    Element::new(Tag::Ul).children(items.into_iter().map(|item| Element::new(Tag::Li).child(item)))
}

pub fn graph(figure: serde_json::Value) -> Node {
    Node::Graph(figure)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_with_replaces_in_place() {
        let style = Style::from_pairs(&[("color", "white"), ("padding", "10px")])
            .with("color", "black");
        assert_eq!(style.len(), 2);
        assert_eq!(style.to_css(), "color: black; padding: 10px");
    }

    #[test]
    fn camel_case_keys_render_as_css_properties() {
        let style = Style::from_pairs(&[("backgroundColor", "#2c3e50"), ("minHeight", "100px")]);
        assert_eq!(style.to_css(), "background-color: #2c3e50; min-height: 100px");
    }

    #[test]
    fn element_serializes_to_component_shape() {
        let tree = div()
            .id("root")
            .style(Style::from_pairs(&[("display", "flex")]))
            .child(h3("Title"))
            .child("tail");
        let json = serde_json::to_value(&tree).expect("json");
        assert_eq!(json["type"], "Div");
        assert_eq!(json["props"]["id"], "root");
        assert_eq!(json["props"]["style"]["display"], "flex");
        assert_eq!(json["props"]["children"][0]["type"], "H3");
        assert_eq!(json["props"]["children"][0]["props"]["children"][0], "Title");
        assert_eq!(json["props"]["children"][1], "tail");
        assert!(json["props"].get("className").is_none());
    }

    #[test]
    fn html_output_escapes_text_and_attributes() {
        let tree = div()
            .attr("title", "a \"quoted\" value")
            .child(p("<script>alert(1)</script> & more"));
        assert_eq!(
            tree.to_html(),
            "<div title=\"a &quot;quoted&quot; value\"><p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p></div>"
        );
    }

    #[test]
    fn graph_nodes_embed_figure_json() {
        let tree = div().child(graph(serde_json::json!({ "data": [] })));
        let html = tree.to_html();
        assert!(html.contains("class=\"graph\""));
        assert!(html.contains("data-figure=\"{&quot;data&quot;:[]}\""));
        assert_eq!(tree.graphs().len(), 1);
    }

    #[test]
    fn find_by_id_and_text_content_walk_the_tree() {
        let tree = div().child(div().id("inner").child(p("one"))).child(p("two"));
        assert!(tree.find_by_id("inner").is_some());
        assert!(tree.find_by_id("missing").is_none());
        assert_eq!(tree.text_content(), "onetwo");
    }
}
