// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;
use std::path::{Path, PathBuf};

use kurbo::Point;
use trellis_markup::{join_lines, write_document, Line, MarkupError, Node};
use trellis_solids::{Compound, Flat};
use trellis_view3d::{Projection, Transform, View};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const BACKGROUND: &str = "background-color:white";

/// A vector-graphics scene canvas.
///
/// The canvas is built once and rendered once: geometry is appended during
/// construction and treated as immutable afterwards. The view is applied
/// only at render time, so camera setup before or after adding geometry
/// has identical effect.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    view: View,
    graphics: Vec<Flat>,
}

impl Canvas {
    /// Creates an empty canvas with the default view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty canvas with the given view.
    #[must_use]
    pub fn with_view(view: View) -> Self {
        Self {
            view,
            graphics: Vec::new(),
        }
    }

    /// Returns the view.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Returns the rotation half of the view for camera setup.
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.view.transform_mut()
    }

    /// Returns the projection half of the view for camera setup.
    pub fn projection_mut(&mut self) -> &mut Projection {
        self.view.projection_mut()
    }

    /// Appends a graphic, flattening any compound into its constituent
    /// flats. The graphics list is append-only.
    pub fn add<C: Compound + ?Sized>(&mut self, graphic: &C) {
        self.graphics.extend(graphic.graphics());
    }

    /// Returns the flat ordered graphics list.
    #[must_use]
    pub fn graphics(&self) -> &[Flat] {
        &self.graphics
    }

    /// Renders the canvas as a markup node tree: an `svg` root with one
    /// closed 4-point polygon child per flat, in list order.
    ///
    /// Identities are deterministic per document (`canvas`, `p0`, `p1`,
    /// ...) so that repeated rendering yields byte-identical text.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let projection = self.view.projection();
        let mut root = Node::container("svg")
            .with_id("canvas")
            .with_style_decl(BACKGROUND)
            .with_attr("xmlns", SVG_NS)
            .with_attr("width", projection.width().to_string())
            .with_attr("height", projection.height().to_string());
        for (index, flat) in self.graphics.iter().enumerate() {
            let mapped = self.view.map(&flat.corners());
            let polygon = Node::void("polygon")
                .with_id(&format!("p{index}"))
                .with_attr("fill", flat.fill())
                .with_attr("points", points_attr(&mapped));
            // The root is a container; pushing cannot fail.
            let _ = root.push_node(polygon);
        }
        root
    }

    /// Serializes the canvas to SVG text: an XML declaration followed by
    /// the indented element tree.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut lines = vec![Line::new(0, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")];
        self.to_node().emit_lines(0, &mut lines);
        join_lines(&lines)
    }

    /// Writes the serialized canvas to `<dir>/<name>.svg` and returns the
    /// written path. Overwrites any existing file.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf, MarkupError> {
        write_document(dir, name, "svg", &self.to_svg())
    }
}

/// Formats projected corners as an SVG `points` attribute:
/// `"x0,y0 x1,y1 x2,y2 x3,y3"`.
fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_coord(p.x), fmt_coord(p.y));
    }
    out
}

/// Formats one device coordinate: integers without a decimal point,
/// everything else at three decimals with trailing zeros trimmed.
fn fmt_coord(v: f64) -> String {
    if v.is_finite() {
        let rounded = v.round();
        if (v - rounded).abs() < 1e-6 {
            return format!("{}", rounded as i64);
        }
    } else {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
