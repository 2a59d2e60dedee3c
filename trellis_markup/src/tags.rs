// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience constructors for the common element vocabulary.
//!
//! These are plain shorthands over [`Node::container`] and [`Node::void`];
//! the node model itself is permissive and accepts any tag text.

use crate::node::Node;

/// A generic block container.
#[must_use]
pub fn div() -> Node {
    Node::container("div")
}

/// A paragraph.
#[must_use]
pub fn p() -> Node {
    Node::container("p")
}

/// A top-level heading.
#[must_use]
pub fn h1() -> Node {
    Node::container("h1")
}

/// A second-level heading.
#[must_use]
pub fn h2() -> Node {
    Node::container("h2")
}

/// A third-level heading.
#[must_use]
pub fn h3() -> Node {
    Node::container("h3")
}

/// An inline span.
#[must_use]
pub fn span() -> Node {
    Node::container("span")
}

/// A hyperlink; the target is set via [`Node::set_href`].
#[must_use]
pub fn a(href: &str) -> Node {
    Node::container("a").with_href(href)
}

/// An image with a source attribute.
#[must_use]
pub fn img(src: &str) -> Node {
    Node::void("img").with_attr("src", src)
}

#[cfg(test)]
mod tests {
    use super::{a, div, img};

    #[test]
    fn shorthands_pick_the_right_capability() {
        assert!(div().children().is_some());
        assert!(img("x.png").children().is_none());
    }

    #[test]
    fn link_target_lands_in_href() {
        let mut lines = Vec::new();
        a("#top").with_id("l").emit_lines(0, &mut lines);
        assert_eq!(lines[0].text, "<a href=\"#top\" id=\"l\">");
    }
}
