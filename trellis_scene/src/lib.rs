// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Scene: assembles flat solids into a renderable vector canvas.
//!
//! A [`Canvas`] owns a [`trellis_view3d::View`] and an append-only list of
//! [`trellis_solids::Flat`]s. Adding a compound flattens it into its
//! constituent patches; rendering projects every patch through the view
//! and serializes the result as an SVG document through the
//! `trellis_markup` node model.
//!
//! Overlapping figures are depth-ordered once at scene-build time with a
//! painter's-algorithm approximation: each figure gets a scalar
//! [depth key](depth_key) along the away-from-camera axis and farther
//! figures are inserted first so nearer ones are drawn on top. This is
//! **not** hidden-surface removal; it is only valid for non-intersecting,
//! convex, wall- and floor-aligned geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_scene::{room_scene, SceneOptions};
//!
//! let canvas = room_scene(&SceneOptions::default());
//! let svg = canvas.to_svg();
//! assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! assert!(svg.contains("<polygon"));
//! ```

mod assemble;
mod canvas;
mod depth;

pub use assemble::{room_scene, SceneOptions};
pub use canvas::Canvas;
pub use depth::{depth_key, place_occupants};
pub use trellis_markup::MarkupError;
