// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Markup: a polymorphic markup-tree builder with an indented-text
//! serializer.
//!
//! This crate provides the document layer of Trellis. It models markup as a
//! single [`Node`] type parameterized by a small capability set (tag name and
//! whether the element may hold children) rather than an inheritance chain,
//! and serializes finished trees to an ordered stream of indented lines.
//!
//! Key pieces:
//! - [`Node`]: container and void elements with identity, classes, inline
//!   style declarations, and typed attributes ([`AttrValue`]).
//! - [`Page`]: a document root that aggregates the script and style
//!   fragments contributed anywhere in its subtree into a single
//!   deduplicated prelude, plus a trailing initializer block.
//! - [`Line`] / [`join_lines`]: the `(indent, text)` line model shared with
//!   the vector-scene output in `trellis_scene`.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_markup::{Node, Page};
//!
//! let mut page = Page::new("Report");
//! let mut body = Node::container("div").with_id("summary");
//! body.push_text("All readings nominal.").unwrap();
//! page.push_node(body);
//!
//! let html = page.to_html();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Report</title>"));
//! ```
//!
//! ## Design notes
//!
//! - Identities default to a per-build monotonic counter so that repeated
//!   serialization of the same tree is reproducible; explicit ids override.
//! - Attribute text, class names and style declarations are **not**
//!   validated: malformed input passes through to the output verbatim.
//! - A `Node` belongs to exactly one tree. Cloning is cheap and explicit;
//!   sharing one instance across documents is not expressible.

mod attr;
mod error;
mod node;
mod page;
mod serialize;
pub mod tags;

pub use attr::AttrValue;
pub use error::MarkupError;
pub use node::{Content, Node};
pub use page::Page;
pub use serialize::{join_lines, write_document, Line, INDENT_UNIT};
