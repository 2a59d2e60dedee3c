// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nalgebra::Vector3;

use crate::flat::Flat;
use crate::orientation::Orientation;

/// A read-only aggregate exposing an ordered tuple of constituent
/// [`Flat`]s.
///
/// Flattening is not recursive: `graphics` always yields flats, never
/// nested compounds, so a consumer that flattens one level is done.
/// `Flat` implements the trait as its own singleton aggregate, which lets
/// scene containers accept single patches and solids uniformly.
pub trait Compound {
    /// Returns the constituent flats, in a fixed order.
    fn graphics(&self) -> Vec<Flat>;
}

impl Compound for Flat {
    fn graphics(&self) -> Vec<Flat> {
        vec![self.clone()]
    }
}

/// An axis-aligned box, described by six scalar bounds.
///
/// All six faces are derived from the bounds **at construction**; mutating
/// a face color afterwards is supported, but the face geometry is a
/// snapshot and does not track later bound changes.
#[derive(Clone, Debug)]
pub struct Cuboid {
    left: f64,
    right: f64,
    near: f64,
    far: f64,
    bottom: f64,
    top: f64,
    faces: [Flat; 6],
}

/// Face order inside [`Cuboid::faces`] and [`Cuboid::graphics`].
const LEFT: usize = 0;
const RIGHT: usize = 1;
const NEAR: usize = 2;
const FAR: usize = 3;
const BOTTOM: usize = 4;
const TOP: usize = 5;

impl Cuboid {
    /// Creates a box from its six bounds and derives all six faces.
    #[must_use]
    pub fn new(left: f64, right: f64, near: f64, far: f64, bottom: f64, top: f64) -> Self {
        // Side walls span depth x height, front/back walls span breadth x
        // height, floor and ceiling span breadth x depth.
        let faces = [
            Flat::new(Orientation::Yz, near, far, bottom, top, left, "black"),
            Flat::new(Orientation::Yz, near, far, bottom, top, right, "black"),
            Flat::new(Orientation::Xz, left, right, bottom, top, near, "black"),
            Flat::new(Orientation::Xz, left, right, bottom, top, far, "black"),
            Flat::new(Orientation::Xy, left, right, near, far, bottom, "black"),
            Flat::new(Orientation::Xy, left, right, near, far, top, "black"),
        ];
        Self {
            left,
            right,
            near,
            far,
            bottom,
            top,
            faces,
        }
    }

    /// Returns the bound on the left (low x) side.
    #[must_use]
    pub fn left_bound(&self) -> f64 {
        self.left
    }

    /// Returns the bound on the right (high x) side.
    #[must_use]
    pub fn right_bound(&self) -> f64 {
        self.right
    }

    /// Returns the bound on the near (low y) side.
    #[must_use]
    pub fn near_bound(&self) -> f64 {
        self.near
    }

    /// Returns the bound on the far (high y) side.
    #[must_use]
    pub fn far_bound(&self) -> f64 {
        self.far
    }

    /// Returns the bound on the bottom (low z) side.
    #[must_use]
    pub fn bottom_bound(&self) -> f64 {
        self.bottom
    }

    /// Returns the bound on the top (high z) side.
    #[must_use]
    pub fn top_bound(&self) -> f64 {
        self.top
    }

    /// Returns the extent along x.
    #[must_use]
    pub fn breadth(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the extent along y.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.far - self.near
    }

    /// Returns the extent along z.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Returns the box center.
    #[must_use]
    pub fn centre(&self) -> Vector3<f64> {
        Vector3::new(
            self.left + self.breadth() / 2.0,
            self.near + self.depth() / 2.0,
            self.bottom + self.height() / 2.0,
        )
    }

    /// Returns the left face.
    #[must_use]
    pub fn left(&self) -> &Flat {
        &self.faces[LEFT]
    }

    /// Returns the left face for coloring.
    pub fn left_mut(&mut self) -> &mut Flat {
        &mut self.faces[LEFT]
    }

    /// Returns the right face.
    #[must_use]
    pub fn right(&self) -> &Flat {
        &self.faces[RIGHT]
    }

    /// Returns the right face for coloring.
    pub fn right_mut(&mut self) -> &mut Flat {
        &mut self.faces[RIGHT]
    }

    /// Returns the near face.
    #[must_use]
    pub fn near(&self) -> &Flat {
        &self.faces[NEAR]
    }

    /// Returns the near face for coloring.
    pub fn near_mut(&mut self) -> &mut Flat {
        &mut self.faces[NEAR]
    }

    /// Returns the far face.
    #[must_use]
    pub fn far(&self) -> &Flat {
        &self.faces[FAR]
    }

    /// Returns the far face for coloring.
    pub fn far_mut(&mut self) -> &mut Flat {
        &mut self.faces[FAR]
    }

    /// Returns the bottom face.
    #[must_use]
    pub fn bottom(&self) -> &Flat {
        &self.faces[BOTTOM]
    }

    /// Returns the bottom face for coloring.
    pub fn bottom_mut(&mut self) -> &mut Flat {
        &mut self.faces[BOTTOM]
    }

    /// Returns the top face.
    #[must_use]
    pub fn top(&self) -> &Flat {
        &self.faces[TOP]
    }

    /// Returns the top face for coloring.
    pub fn top_mut(&mut self) -> &mut Flat {
        &mut self.faces[TOP]
    }
}

impl Compound for Cuboid {
    fn graphics(&self) -> Vec<Flat> {
        self.faces.to_vec()
    }
}

/// An open box seen from outside: floor plus the two far walls.
///
/// The visible faces follow the camera-facing convention of the scene
/// assembler (camera near the origin corner looking toward +y): floor,
/// back wall (far) and side wall (right).
#[derive(Clone, Debug)]
pub struct Hollow {
    cuboid: Cuboid,
}

impl Hollow {
    /// Creates an open box from the six bounds of its enclosing cuboid.
    #[must_use]
    pub fn new(left: f64, right: f64, near: f64, far: f64, bottom: f64, top: f64) -> Self {
        Self {
            cuboid: Cuboid::new(left, right, near, far, bottom, top),
        }
    }

    /// Returns the underlying box, which still exposes all six faces.
    #[must_use]
    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    /// Returns the floor (the bottom face).
    #[must_use]
    pub fn floor(&self) -> &Flat {
        self.cuboid.bottom()
    }

    /// Returns the floor for coloring.
    pub fn floor_mut(&mut self) -> &mut Flat {
        self.cuboid.bottom_mut()
    }

    /// Returns the back wall (the far face).
    #[must_use]
    pub fn back(&self) -> &Flat {
        self.cuboid.far()
    }

    /// Returns the back wall for coloring.
    pub fn back_mut(&mut self) -> &mut Flat {
        self.cuboid.far_mut()
    }

    /// Returns the side wall (the right face).
    #[must_use]
    pub fn side(&self) -> &Flat {
        self.cuboid.right()
    }

    /// Returns the side wall for coloring.
    pub fn side_mut(&mut self) -> &mut Flat {
        self.cuboid.right_mut()
    }
}

impl Compound for Hollow {
    fn graphics(&self) -> Vec<Flat> {
        vec![
            self.floor().clone(),
            self.back().clone(),
            self.side().clone(),
        ]
    }
}

/// A closed box seen from outside: the three camera-facing faces.
///
/// Visible faces are the front (near), side (left) and roof (top).
#[derive(Clone, Debug)]
pub struct Solid {
    cuboid: Cuboid,
}

impl Solid {
    /// Creates a closed box from the six bounds of its enclosing cuboid.
    #[must_use]
    pub fn new(left: f64, right: f64, near: f64, far: f64, bottom: f64, top: f64) -> Self {
        Self {
            cuboid: Cuboid::new(left, right, near, far, bottom, top),
        }
    }

    /// Returns the underlying box, which still exposes all six faces.
    #[must_use]
    pub fn cuboid(&self) -> &Cuboid {
        &self.cuboid
    }

    /// Returns the front (the near face).
    #[must_use]
    pub fn front(&self) -> &Flat {
        self.cuboid.near()
    }

    /// Returns the front for coloring.
    pub fn front_mut(&mut self) -> &mut Flat {
        self.cuboid.near_mut()
    }

    /// Returns the side (the left face).
    #[must_use]
    pub fn side(&self) -> &Flat {
        self.cuboid.left()
    }

    /// Returns the side for coloring.
    pub fn side_mut(&mut self) -> &mut Flat {
        self.cuboid.left_mut()
    }

    /// Returns the roof (the top face).
    #[must_use]
    pub fn roof(&self) -> &Flat {
        self.cuboid.top()
    }

    /// Returns the roof for coloring.
    pub fn roof_mut(&mut self) -> &mut Flat {
        self.cuboid.top_mut()
    }
}

impl Compound for Solid {
    fn graphics(&self) -> Vec<Flat> {
        vec![
            self.front().clone(),
            self.side().clone(),
            self.roof().clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Compound, Cuboid, Hollow, Solid};
    use crate::flat::Flat;
    use crate::orientation::Orientation;

    #[test]
    fn a_flat_is_its_own_singleton_aggregate() {
        let flat = Flat::new(Orientation::Xy, 0.0, 1.0, 0.0, 1.0, 0.0, "red");
        let graphics = flat.graphics();
        assert_eq!(graphics.len(), 1);
        assert_eq!(graphics[0], flat);
    }

    #[test]
    fn cuboid_derives_six_faces_with_matching_offsets() {
        let cuboid = Cuboid::new(0.0, 6.0, 0.0, 4.0, 0.0, 2.7);
        assert_eq!(cuboid.graphics().len(), 6);

        assert_eq!(cuboid.left().fixed(), 0.0);
        assert_eq!(cuboid.right().fixed(), 6.0);
        assert_eq!(cuboid.near().fixed(), 0.0);
        assert_eq!(cuboid.far().fixed(), 4.0);
        assert_eq!(cuboid.bottom().fixed(), 0.0);
        assert_eq!(cuboid.top().fixed(), 2.7);

        assert_eq!(cuboid.left().orientation(), Orientation::Yz);
        assert_eq!(cuboid.near().orientation(), Orientation::Xz);
        assert_eq!(cuboid.bottom().orientation(), Orientation::Xy);
    }

    #[test]
    fn cuboid_extents_and_centre() {
        let cuboid = Cuboid::new(1.0, 7.0, 2.0, 6.0, 0.0, 3.0);
        assert_eq!(cuboid.breadth(), 6.0);
        assert_eq!(cuboid.depth(), 4.0);
        assert_eq!(cuboid.height(), 3.0);
        let centre = cuboid.centre();
        assert_eq!((centre.x, centre.y, centre.z), (4.0, 4.0, 1.5));
    }

    #[test]
    fn hollow_shows_floor_and_two_walls() {
        let hollow = Hollow::new(0.0, 6.0, 0.0, 4.0, 0.0, 2.7);
        let graphics = hollow.graphics();
        assert_eq!(graphics.len(), 3);
        assert_eq!(graphics[0], *hollow.cuboid().bottom());
        assert_eq!(graphics[1], *hollow.cuboid().far());
        assert_eq!(graphics[2], *hollow.cuboid().right());
        // The base aggregate still exposes everything.
        assert_eq!(hollow.cuboid().graphics().len(), 6);
    }

    #[test]
    fn solid_shows_front_side_and_roof() {
        let solid = Solid::new(0.0, 1.0, 0.0, 1.0, 0.0, 2.0);
        let graphics = solid.graphics();
        assert_eq!(graphics.len(), 3);
        assert_eq!(graphics[0], *solid.cuboid().near());
        assert_eq!(graphics[1], *solid.cuboid().left());
        assert_eq!(graphics[2], *solid.cuboid().top());
    }

    #[test]
    fn face_geometry_is_a_construction_snapshot() {
        let mut cuboid = Cuboid::new(0.0, 2.0, 0.0, 2.0, 0.0, 2.0);
        cuboid.top_mut().set_fill("ivory");
        assert_eq!(cuboid.top().fill(), "ivory");
        // Geometry is untouched by coloring.
        assert_eq!(cuboid.top().fixed(), 2.0);
    }
}
