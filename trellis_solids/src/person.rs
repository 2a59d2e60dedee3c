// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::compound::Compound;
use crate::flat::Flat;
use crate::orientation::Orientation;

/// Crotch height as a fraction of body height.
const CROTCH: f64 = 0.47;
/// Shoulder height as a fraction of body height.
const SHOULDER: f64 = 0.78;
/// Top of the neck as a fraction of body height.
const NECK_TOP: f64 = 0.84;
/// Arm top as a fraction of body height.
const ARM_TOP: f64 = 0.76;
/// Arm bottom as a fraction of body height.
const ARM_BOTTOM: f64 = 0.42;
/// Torso width as a fraction of shoulder width.
const TORSO_W: f64 = 0.64;
/// Single leg width as a fraction of shoulder width.
const LEG_W: f64 = 0.24;
/// Single arm width as a fraction of shoulder width.
const ARM_W: f64 = 0.12;
/// Neck width as a fraction of shoulder width.
const NECK_W: f64 = 0.16;
/// Head width as a fraction of shoulder width.
const HEAD_W: f64 = 0.42;

const LIMB_FILL: &str = "beige";
const BODY_FILL: &str = "antiquewhite";
const HEAD_FILL: &str = "bisque";

/// A simplified humanoid figure.
///
/// Unlike the box-derived solids, a `Person` has no enclosing box: it
/// assembles eight flat patches (two legs, torso, two arms, shoulders,
/// neck, head) from fixed anthropometric ratios of the given shoulder
/// width and standing height. All patches lie in the xz plane at the
/// figure's depth coordinate, feet on the floor (z = 0).
#[derive(Clone, Debug)]
pub struct Person {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    flats: Vec<Flat>,
}

impl Person {
    /// Standard shoulder width in scene units.
    pub const DEFAULT_WIDTH: f64 = 0.4;
    /// Standard standing height in scene units.
    pub const DEFAULT_HEIGHT: f64 = 1.7;

    /// Creates a standard-sized figure standing at `(x, y)` on the floor.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_size(x, y, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    /// Creates a figure with explicit shoulder width and standing height.
    #[must_use]
    pub fn with_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (w, h) = (width, height);
        let torso_half = TORSO_W * w / 2.0;
        let patch = |fill: &str, x0: f64, x1: f64, z0: f64, z1: f64| {
            Flat::new(Orientation::Xz, x + x0, x + x1, z0 * h, z1 * h, y, fill)
        };
        let flats = vec![
            // Legs span the torso width from the floor to the crotch.
            patch(LIMB_FILL, -torso_half, -torso_half + LEG_W * w, 0.0, CROTCH),
            patch(LIMB_FILL, torso_half - LEG_W * w, torso_half, 0.0, CROTCH),
            patch(BODY_FILL, -torso_half, torso_half, CROTCH, SHOULDER),
            // Arms hang outside the torso, below the shoulder line.
            patch(LIMB_FILL, -w / 2.0, -w / 2.0 + ARM_W * w, ARM_BOTTOM, ARM_TOP),
            patch(LIMB_FILL, w / 2.0 - ARM_W * w, w / 2.0, ARM_BOTTOM, ARM_TOP),
            patch(BODY_FILL, -w / 2.0, w / 2.0, ARM_TOP, SHOULDER),
            patch(HEAD_FILL, -NECK_W * w / 2.0, NECK_W * w / 2.0, SHOULDER, NECK_TOP),
            patch(HEAD_FILL, -HEAD_W * w / 2.0, HEAD_W * w / 2.0, NECK_TOP, 1.0),
        ];
        Self {
            x,
            y,
            width,
            height,
            flats,
        }
    }

    /// Returns the figure's position across the floor.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the figure's position along the away-from-camera axis.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the shoulder width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the standing height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Compound for Person {
    fn graphics(&self) -> Vec<Flat> {
        self.flats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Person;
    use crate::compound::Compound;
    use crate::orientation::Orientation;

    #[test]
    fn a_person_is_eight_patches() {
        let person = Person::new(2.0, 1.5);
        assert_eq!(person.graphics().len(), 8);
    }

    #[test]
    fn all_patches_share_the_depth_plane() {
        let person = Person::new(2.0, 1.5);
        for flat in person.graphics() {
            assert_eq!(flat.orientation(), Orientation::Xz);
            assert_eq!(flat.fixed(), 1.5);
        }
    }

    #[test]
    fn figure_spans_floor_to_height_and_shoulder_width() {
        let person = Person::with_size(0.0, 0.0, 0.4, 1.7);
        let graphics = person.graphics();
        let z_min = graphics.iter().map(|f| f.v0()).fold(f64::MAX, f64::min);
        let z_max = graphics.iter().map(|f| f.v1()).fold(f64::MIN, f64::max);
        assert_eq!(z_min, 0.0);
        assert_eq!(z_max, 1.7);
        let x_min = graphics.iter().map(|f| f.u0()).fold(f64::MAX, f64::min);
        let x_max = graphics.iter().map(|f| f.u1()).fold(f64::MIN, f64::max);
        assert_eq!(x_min, -0.2);
        assert_eq!(x_max, 0.2);
    }

    #[test]
    fn patches_are_centered_on_the_figure() {
        let person = Person::new(3.0, 1.0);
        for flat in person.graphics() {
            assert!((flat.uc() - 3.0).abs() < 1e-12);
        }
    }
}
