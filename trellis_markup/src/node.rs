// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::attr::AttrValue;
use crate::error::MarkupError;
use crate::serialize::Line;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Returns the next default identity from the per-build monotonic counter.
fn fresh_id() -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("e{n}")
}

/// One entry in a container's ordered child sequence.
#[derive(Clone, Debug)]
pub enum Content {
    /// Raw text, emitted verbatim at the child indent level.
    Text(String),
    /// A nested element.
    Node(Node),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// An element of the markup tree.
///
/// One type covers the whole element vocabulary: the `tag` selects the
/// element kind and `children` is `Some` for containers, `None` for void
/// elements. There are no tag-specific subtypes.
///
/// Every node carries an identity, unique within one document when the
/// default counter-derived ids are used. Class tags are deduplicated on
/// insertion; inline style declarations and attributes keep insertion order.
#[derive(Clone, Debug)]
pub struct Node {
    tag: String,
    children: Option<Vec<Content>>,
    id: String,
    title: Option<String>,
    name: Option<String>,
    href: Option<String>,
    classes: Vec<String>,
    styles: Vec<String>,
    attrs: Vec<(String, AttrValue)>,
    scripts: Vec<String>,
    style_fragments: Vec<String>,
    init_scripts: Vec<String>,
}

impl Node {
    fn new(tag: &str, children: Option<Vec<Content>>) -> Self {
        Self {
            tag: tag.to_string(),
            children,
            id: fresh_id(),
            title: None,
            name: None,
            href: None,
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            scripts: Vec::new(),
            style_fragments: Vec::new(),
            init_scripts: Vec::new(),
        }
    }

    /// Creates a container element that may hold children.
    #[must_use]
    pub fn container(tag: &str) -> Self {
        Self::new(tag, Some(Vec::new()))
    }

    /// Creates a container element with initial children.
    #[must_use]
    pub fn container_with<I>(tag: &str, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        Self::new(tag, Some(children.into_iter().map(Into::into).collect()))
    }

    /// Creates a void element, which has no content slot.
    #[must_use]
    pub fn void(tag: &str) -> Self {
        Self::new(tag, None)
    }

    /// Returns the element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Overrides the counter-derived identity with an explicit one.
    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    /// Builder form of [`Node::set_id`].
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    /// Sets the `title` attribute.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Builder form of [`Node::set_title`].
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.set_title(title);
        self
    }

    /// Sets the `name` attribute.
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Builder form of [`Node::set_name`].
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.set_name(name);
        self
    }

    /// Sets the `href` link target.
    pub fn set_href(&mut self, href: &str) {
        self.href = Some(href.to_string());
    }

    /// Builder form of [`Node::set_href`].
    #[must_use]
    pub fn with_href(mut self, href: &str) -> Self {
        self.set_href(href);
        self
    }

    /// Adds a class tag. Duplicates are ignored; first insertion wins the
    /// position. The class text itself is not validated.
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    /// Builder form of [`Node::add_class`].
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Appends an inline style declaration, e.g. `"color:red"`.
    pub fn add_style_decl(&mut self, decl: &str) {
        self.styles.push(decl.to_string());
    }

    /// Builder form of [`Node::add_style_decl`].
    #[must_use]
    pub fn with_style_decl(mut self, decl: &str) -> Self {
        self.add_style_decl(decl);
        self
    }

    /// Sets a caller-supplied attribute, keeping insertion order. Setting an
    /// existing name replaces its value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Builder form of [`Node::set_attr`].
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Registers a script fragment for the document prelude.
    pub fn add_script(&mut self, script: &str) {
        self.scripts.push(script.to_string());
    }

    /// Registers a style fragment for the document prelude.
    pub fn add_style_fragment(&mut self, style: &str) {
        self.style_fragments.push(style.to_string());
    }

    /// Registers a script fragment for the trailing initializer block, run
    /// after the whole document is in place.
    pub fn add_init_script(&mut self, script: &str) {
        self.init_scripts.push(script.to_string());
    }

    /// Returns the ordered child sequence, or `None` for void elements.
    #[must_use]
    pub fn children(&self) -> Option<&[Content]> {
        self.children.as_deref()
    }

    /// Appends one child. Fails with [`MarkupError::VoidChildren`] on a void
    /// element. There is no removal operation; the sequence is append-only.
    pub fn push_child(&mut self, child: impl Into<Content>) -> Result<(), MarkupError> {
        match &mut self.children {
            Some(children) => {
                children.push(child.into());
                Ok(())
            }
            None => Err(MarkupError::VoidChildren(self.tag.clone())),
        }
    }

    /// Appends a raw text child.
    pub fn push_text(&mut self, text: &str) -> Result<(), MarkupError> {
        self.push_child(Content::Text(text.to_string()))
    }

    /// Appends a nested element.
    pub fn push_node(&mut self, node: Self) -> Result<(), MarkupError> {
        self.push_child(Content::Node(node))
    }

    /// Extends the child sequence from an iterator.
    pub fn extend_children<I>(&mut self, children: I) -> Result<(), MarkupError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        for child in children {
            self.push_child(child)?;
        }
        Ok(())
    }

    /// Formats the attribute portion of the open tag.
    ///
    /// Fixed order: title, name, href (each omitted if absent), `id`
    /// (always), classes (space-joined, omitted if empty), inline styles
    /// (semicolon-joined, omitted if empty), then caller-supplied attributes
    /// in insertion order.
    fn attr_string(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            let _ = write!(out, " title=\"{title}\"");
        }
        if let Some(name) = &self.name {
            let _ = write!(out, " name=\"{name}\"");
        }
        if let Some(href) = &self.href {
            let _ = write!(out, " href=\"{href}\"");
        }
        let _ = write!(out, " id=\"{}\"", self.id);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", self.classes.join(" "));
        }
        if !self.styles.is_empty() {
            let _ = write!(out, " style=\"{}\"", self.styles.join(";"));
        }
        for (name, value) in &self.attrs {
            value.emit(name, &mut out);
        }
        out
    }

    /// Emits this subtree as `(indent, text)` lines: open tag, children one
    /// level deeper (text children verbatim), close tag. Void elements emit
    /// a single line.
    pub fn emit_lines(&self, indent: usize, out: &mut Vec<Line>) {
        let attrs = self.attr_string();
        match &self.children {
            None => out.push(Line::new(indent, format!("<{}{attrs} />", self.tag))),
            Some(children) => {
                out.push(Line::new(indent, format!("<{}{attrs}>", self.tag)));
                for child in children {
                    match child {
                        Content::Text(text) => out.push(Line::new(indent + 1, text.clone())),
                        Content::Node(node) => node.emit_lines(indent + 1, out),
                    }
                }
                out.push(Line::new(indent, format!("</{}>", self.tag)));
            }
        }
    }

    /// Walks the subtree, appending each node's fragments of one kind in
    /// first-contribution order.
    pub(crate) fn collect_fragments<'a>(
        &'a self,
        pick: &impl Fn(&'a Self) -> &'a [String],
        out: &mut Vec<&'a str>,
    ) {
        for fragment in pick(self) {
            if !out.contains(&fragment.as_str()) {
                out.push(fragment);
            }
        }
        if let Some(children) = &self.children {
            for child in children {
                if let Content::Node(node) = child {
                    node.collect_fragments(pick, out);
                }
            }
        }
    }

    pub(crate) fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub(crate) fn style_fragments(&self) -> &[String] {
        &self.style_fragments
    }

    pub(crate) fn init_scripts(&self) -> &[String] {
        &self.init_scripts
    }
}
