// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis View 3D: a minimal 3D-to-2D mapping for static scene output.
//!
//! This crate provides the camera half of Trellis. It is deliberately
//! small: no perspective, no hidden-surface removal, no animation. It
//! focuses on:
//! - [`Transform`]: a two-axis rotation (pan + tilt, in degrees) around a
//!   mutable focus point, with lazy recomputation of the composed rotation.
//! - [`Projection`]: uniform scale plus viewport-centered, vertically
//!   flipped placement that drops the depth axis.
//! - [`View`]: the stateless composition of the two.
//!
//! ## Minimal example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use trellis_view3d::View;
//!
//! // Default camera: no rotation, 424x300 viewport, unit scale.
//! let view = View::default();
//! let mapped = view.map(&[Vector3::zeros()]);
//! assert_eq!((mapped[0].x, mapped[0].y), (212.0, 150.0));
//! ```
//!
//! ## Design notes
//!
//! - Cameras are orthographic with a **uniform** scale factor; "up" in
//!   scene space is up on screen (the projection flips the y axis).
//! - The composed rotation is cached behind an explicit dirty slot and
//!   recomputed only when pan or tilt changed since the last read. Focus
//!   changes never invalidate it; translation uses the live focus at call
//!   time.
//! - Angle state is unbounded: panning by 400 degrees is the same rotation
//!   as panning by 40, but the stored angle keeps accumulating.

mod projection;
mod transform;
mod view;

pub use projection::Projection;
pub use transform::Transform;
pub use view::View;
