// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Solids: axis-aligned rectangular patches and the compound
//! solids built from them.
//!
//! The unit of geometry is the [`Flat`]: one planar rectangular patch in
//! 3D space, tagged by the coordinate plane it lies in
//! ([`Orientation`]). Compound solids expose a fixed, read-only tuple of
//! constituent flats through the [`Compound`] trait:
//! - [`Cuboid`]: all six faces of an axis-aligned box.
//! - [`Hollow`]: the three camera-facing faces of an open box (floor plus
//!   two walls); [`Room`] is a `Hollow` with conventional wall colors.
//! - [`Solid`]: the three visible faces of a closed box.
//! - [`Person`]: a simplified humanoid assembled from flat patches with
//!   fixed anthropometric ratios, with no underlying box.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_solids::{Compound, Room};
//!
//! let room = Room::new(6.0, 4.0, 2.7);
//! // Floor plus back and side wall.
//! assert_eq!(room.graphics().len(), 3);
//! // The underlying box still exposes all six faces.
//! assert_eq!(room.cuboid().graphics().len(), 6);
//! ```
//!
//! Fill colors are CSS color text carried through to the output verbatim;
//! this crate does not validate or parse them.

mod compound;
mod error;
mod flat;
mod orientation;
mod person;
mod room;

pub use compound::{Compound, Cuboid, Hollow, Solid};
pub use error::SolidsError;
pub use flat::Flat;
pub use orientation::Orientation;
pub use person::Person;
pub use room::Room;
