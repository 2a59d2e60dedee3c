// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nalgebra::Vector3;

use crate::compound::{Compound, Hollow};
use crate::flat::Flat;

/// A room interior: a [`Hollow`] anchored at the origin with conventional
/// wall colors.
///
/// The room spans `0..breadth` along x, `0..depth` along y and
/// `0..height` along z; the floor, back wall and side wall carry fixed
/// fills assigned at construction.
#[derive(Clone, Debug)]
pub struct Room {
    hollow: Hollow,
}

impl Room {
    /// Floor fill color.
    pub const FLOOR_FILL: &'static str = "lightblue";
    /// Back-wall fill color.
    pub const BACK_FILL: &'static str = "steelblue";
    /// Side-wall fill color.
    pub const SIDE_FILL: &'static str = "lightskyblue";

    /// Creates a room from its breadth, depth and height.
    #[must_use]
    pub fn new(breadth: f64, depth: f64, height: f64) -> Self {
        let mut hollow = Hollow::new(0.0, breadth, 0.0, depth, 0.0, height);
        hollow.floor_mut().set_fill(Self::FLOOR_FILL);
        hollow.back_mut().set_fill(Self::BACK_FILL);
        hollow.side_mut().set_fill(Self::SIDE_FILL);
        Self { hollow }
    }

    /// Returns the underlying box, which still exposes all six faces.
    #[must_use]
    pub fn cuboid(&self) -> &crate::Cuboid {
        self.hollow.cuboid()
    }

    /// Returns the floor.
    #[must_use]
    pub fn floor(&self) -> &Flat {
        self.hollow.floor()
    }

    /// Returns the back wall.
    #[must_use]
    pub fn back(&self) -> &Flat {
        self.hollow.back()
    }

    /// Returns the side wall.
    #[must_use]
    pub fn side(&self) -> &Flat {
        self.hollow.side()
    }

    /// Returns the extent along x.
    #[must_use]
    pub fn breadth(&self) -> f64 {
        self.hollow.cuboid().breadth()
    }

    /// Returns the extent along y, away from the camera.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.hollow.cuboid().depth()
    }

    /// Returns the extent along z.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.hollow.cuboid().height()
    }

    /// Returns the room center.
    #[must_use]
    pub fn centre(&self) -> Vector3<f64> {
        self.hollow.cuboid().centre()
    }
}

impl Compound for Room {
    fn graphics(&self) -> Vec<Flat> {
        self.hollow.graphics()
    }
}

#[cfg(test)]
mod tests {
    use super::Room;
    use crate::compound::Compound;

    #[test]
    fn room_shows_three_colored_faces() {
        let room = Room::new(6.0, 4.0, 2.7);
        let graphics = room.graphics();
        assert_eq!(graphics.len(), 3);

        let fills: Vec<&str> = graphics.iter().map(|f| f.fill()).collect();
        assert_eq!(
            fills,
            [Room::FLOOR_FILL, Room::BACK_FILL, Room::SIDE_FILL]
        );
    }

    #[test]
    fn underlying_box_still_exposes_all_six_faces() {
        let room = Room::new(6.0, 4.0, 2.7);
        assert_eq!(room.cuboid().graphics().len(), 6);
    }

    #[test]
    fn room_is_anchored_at_the_origin() {
        let room = Room::new(6.0, 4.0, 2.7);
        assert_eq!(room.cuboid().left_bound(), 0.0);
        assert_eq!(room.cuboid().near_bound(), 0.0);
        assert_eq!(room.cuboid().bottom_bound(), 0.0);
        let centre = room.centre();
        assert_eq!((centre.x, centre.y, centre.z), (3.0, 2.0, 1.35));
    }
}
