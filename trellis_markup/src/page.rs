// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use crate::error::MarkupError;
use crate::node::{Content, Node};
use crate::serialize::{join_lines, write_document, Line};

/// A page document root.
///
/// A `Page` owns the ordered body contents and, on serialization, walks its
/// subtree to aggregate the behavior fragments contributed by any
/// descendant: one script block and one style block in the head, and one
/// trailing initializer block at the end of the body. Each distinct
/// fragment appears exactly once, at the position of its first
/// contribution, deduplicated by exact text equality.
#[derive(Clone, Debug)]
pub struct Page {
    title: String,
    lang: String,
    charset: String,
    contents: Vec<Content>,
    scripts: Vec<String>,
    style_fragments: Vec<String>,
    init_scripts: Vec<String>,
}

impl Page {
    /// Creates an empty page with the given title, `lang="en"` and UTF-8
    /// charset.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lang: "en".to_string(),
            charset: "UTF-8".to_string(),
            contents: Vec::new(),
            scripts: Vec::new(),
            style_fragments: Vec::new(),
            init_scripts: Vec::new(),
        }
    }

    /// Returns the page title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the document language attribute.
    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    /// Appends one body child. The sequence is append-only.
    pub fn push_child(&mut self, child: impl Into<Content>) {
        self.contents.push(child.into());
    }

    /// Appends a nested element to the body.
    pub fn push_node(&mut self, node: Node) {
        self.push_child(Content::Node(node));
    }

    /// Appends raw text to the body.
    pub fn push_text(&mut self, text: &str) {
        self.push_child(Content::Text(text.to_string()));
    }

    /// Registers a document-level script fragment for the prelude.
    pub fn add_script(&mut self, script: &str) {
        self.scripts.push(script.to_string());
    }

    /// Registers a document-level style fragment for the prelude.
    pub fn add_style_fragment(&mut self, style: &str) {
        self.style_fragments.push(style.to_string());
    }

    /// Registers a document-level initializer fragment for the trailing
    /// block.
    pub fn add_init_script(&mut self, script: &str) {
        self.init_scripts.push(script.to_string());
    }

    fn collect<'a>(
        &'a self,
        own: &'a [String],
        pick: impl Fn(&'a Node) -> &'a [String],
    ) -> Vec<&'a str> {
        let mut out: Vec<&str> = Vec::new();
        for fragment in own {
            if !out.contains(&fragment.as_str()) {
                out.push(fragment);
            }
        }
        for child in &self.contents {
            if let Content::Node(node) = child {
                node.collect_fragments(&pick, &mut out);
            }
        }
        out
    }

    /// Returns the deduplicated script fragments in first-contribution
    /// order.
    #[must_use]
    pub fn scripts(&self) -> Vec<&str> {
        self.collect(&self.scripts, Node::scripts)
    }

    /// Returns the deduplicated style fragments in first-contribution
    /// order.
    #[must_use]
    pub fn styles(&self) -> Vec<&str> {
        self.collect(&self.style_fragments, Node::style_fragments)
    }

    /// Returns the deduplicated initializer fragments. This is a separate
    /// collection from [`Page::scripts`], under the same dedup rule.
    #[must_use]
    pub fn init_scripts(&self) -> Vec<&str> {
        self.collect(&self.init_scripts, Node::init_scripts)
    }

    /// Emits one aggregated behavior block: open tag, each fragment's lines
    /// one level deeper, close tag. Nothing is emitted when there are no
    /// fragments.
    fn emit_block(out: &mut Vec<Line>, indent: usize, tag: &str, fragments: &[&str]) {
        if fragments.is_empty() {
            return;
        }
        out.push(Line::new(indent, format!("<{tag}>")));
        for fragment in fragments {
            for line in fragment.lines() {
                out.push(Line::new(indent + 1, line));
            }
        }
        out.push(Line::new(indent, format!("</{tag}>")));
    }

    /// Serializes the page to ordered `(indent, text)` lines.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let mut out = Vec::new();
        out.push(Line::new(0, "<!DOCTYPE html>"));
        out.push(Line::new(0, format!("<html lang=\"{}\">", self.lang)));
        out.push(Line::new(1, "<head>"));
        out.push(Line::new(
            2,
            format!("<meta charset=\"{}\">", self.charset),
        ));
        out.push(Line::new(2, format!("<title>{}</title>", self.title)));
        Self::emit_block(&mut out, 2, "script", &self.scripts());
        Self::emit_block(&mut out, 2, "style", &self.styles());
        out.push(Line::new(1, "</head>"));
        out.push(Line::new(1, "<body>"));
        for child in &self.contents {
            match child {
                Content::Text(text) => out.push(Line::new(2, text.clone())),
                Content::Node(node) => node.emit_lines(2, &mut out),
            }
        }
        Self::emit_block(&mut out, 2, "script", &self.init_scripts());
        out.push(Line::new(1, "</body>"));
        out.push(Line::new(0, "</html>"));
        out
    }

    /// Serializes the page to text.
    #[must_use]
    pub fn to_html(&self) -> String {
        join_lines(&self.lines())
    }

    /// Writes the serialized page to `<dir>/<name>.html` and returns the
    /// written path. Overwrites any existing file.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf, MarkupError> {
        write_document(dir, name, "html", &self.to_html())
    }
}
