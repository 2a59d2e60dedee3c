// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::Cell;

use nalgebra::{Rotation3, Vector3};

/// A two-axis camera rotation around a focus point.
///
/// Pan rotates about the vertical (z) axis, tilt about the horizontal (x)
/// axis; both are stored in degrees and accumulate without bounds. Applying
/// the transform subtracts the focus point and then applies the composed
/// rotation `Rx(-tilt) * Rz(-pan)` — rotate about the vertical axis by
/// `-pan` degrees first, then about the horizontal axis by `-tilt` degrees.
///
/// The composed rotation is computed lazily: mutating pan or tilt clears
/// the cached rotation, and the next read recomputes it. Mutating the
/// focus does not touch the cache, since the rotation is focus-independent.
#[derive(Debug)]
pub struct Transform {
    pan_deg: f64,
    tilt_deg: f64,
    focus: Vector3<f64>,
    rotation: Cell<Option<Rotation3<f64>>>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0, Vector3::zeros())
    }
}

impl Clone for Transform {
    fn clone(&self) -> Self {
        Self {
            pan_deg: self.pan_deg,
            tilt_deg: self.tilt_deg,
            focus: self.focus,
            rotation: Cell::new(self.rotation.get()),
        }
    }
}

impl Transform {
    /// Creates a transform with the given pan and tilt angles (degrees) and
    /// focus point.
    #[must_use]
    pub fn new(pan_deg: f64, tilt_deg: f64, focus: Vector3<f64>) -> Self {
        Self {
            pan_deg,
            tilt_deg,
            focus,
            rotation: Cell::new(None),
        }
    }

    /// Returns the accumulated pan angle in degrees.
    #[must_use]
    pub fn pan_angle(&self) -> f64 {
        self.pan_deg
    }

    /// Returns the accumulated tilt angle in degrees.
    #[must_use]
    pub fn tilt_angle(&self) -> f64 {
        self.tilt_deg
    }

    /// Sets the pan angle, invalidating the cached rotation.
    pub fn set_pan(&mut self, degrees: f64) {
        self.pan_deg = degrees;
        self.rotation.set(None);
    }

    /// Sets the tilt angle, invalidating the cached rotation.
    pub fn set_tilt(&mut self, degrees: f64) {
        self.tilt_deg = degrees;
        self.rotation.set(None);
    }

    /// Adds to the pan angle. Two sequential `pan(d)` calls compose to the
    /// same rotation as one `pan(2 * d)`.
    pub fn pan(&mut self, degrees: f64) {
        self.set_pan(self.pan_deg + degrees);
    }

    /// Adds to the tilt angle.
    pub fn tilt(&mut self, degrees: f64) {
        self.set_tilt(self.tilt_deg + degrees);
    }

    /// Returns the focus point.
    #[must_use]
    pub fn focus(&self) -> Vector3<f64> {
        self.focus
    }

    /// Mutates the focus point in place. The cached rotation stays valid;
    /// translation reads the live focus at apply time.
    pub fn set_focus(&mut self, focus: Vector3<f64>) {
        self.focus = focus;
    }

    /// Returns the composed rotation, recomputing it only when pan or tilt
    /// changed since the last read.
    #[must_use]
    pub fn rotation(&self) -> Rotation3<f64> {
        if let Some(rotation) = self.rotation.get() {
            return rotation;
        }
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), -self.tilt_deg.to_radians())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), -self.pan_deg.to_radians());
        self.rotation.set(Some(rotation));
        rotation
    }

    /// Applies the transform to a list of scene points: subtract the focus
    /// elementwise, then rotate.
    #[must_use]
    pub fn apply(&self, points: &[Vector3<f64>]) -> Vec<Vector3<f64>> {
        let rotation = self.rotation();
        points.iter().map(|p| rotation * (p - self.focus)).collect()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::Transform;

    const TOL: f64 = 1e-12;

    fn rotations_agree(a: &Transform, b: &Transform) -> bool {
        let (ma, mb) = (a.rotation(), b.rotation());
        ma.matrix()
            .iter()
            .zip(mb.matrix().iter())
            .all(|(x, y)| (x - y).abs() < TOL)
    }

    #[test]
    fn identity_transform_is_a_no_op() {
        let t = Transform::default();
        let p = Vector3::new(1.0, 2.0, 3.0);
        let out = t.apply(&[p]);
        assert!((out[0] - p).norm() < TOL);
    }

    #[test]
    fn pan_twice_equals_pan_double() {
        let mut twice = Transform::default();
        twice.pan(17.0);
        twice.pan(17.0);
        let mut once = Transform::default();
        once.pan(34.0);
        assert!(rotations_agree(&twice, &once));
    }

    #[test]
    fn tilt_twice_equals_tilt_double() {
        let mut twice = Transform::default();
        twice.tilt(-8.5);
        twice.tilt(-8.5);
        let mut once = Transform::default();
        once.tilt(-17.0);
        assert!(rotations_agree(&twice, &once));
    }

    #[test]
    fn pan_rotates_about_the_vertical_axis() {
        let mut t = Transform::default();
        t.pan(90.0);
        // Pan by -90 degrees about z maps +x onto -y.
        let out = t.apply(&[Vector3::new(1.0, 0.0, 0.0)]);
        assert!((out[0] - Vector3::new(0.0, -1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn tilt_rotates_about_the_horizontal_axis() {
        let mut t = Transform::default();
        t.tilt(90.0);
        // Tilt by -90 degrees about x maps +y onto -z.
        let out = t.apply(&[Vector3::new(0.0, 1.0, 0.0)]);
        assert!((out[0] - Vector3::new(0.0, 0.0, -1.0)).norm() < TOL);
    }

    #[test]
    fn focus_is_subtracted_before_rotation() {
        let mut t = Transform::default();
        t.set_focus(Vector3::new(1.0, 1.0, 1.0));
        let out = t.apply(&[Vector3::new(1.0, 1.0, 1.0)]);
        assert!(out[0].norm() < TOL);
    }

    #[test]
    fn focus_change_uses_live_value_without_invalidation() {
        let mut t = Transform::default();
        t.pan(30.0);
        let before = t.rotation();
        t.set_focus(Vector3::new(3.0, 0.0, 0.0));
        let after = t.rotation();
        assert!(before
            .matrix()
            .iter()
            .zip(after.matrix().iter())
            .all(|(x, y)| (x - y).abs() < TOL));
        let out = t.apply(&[Vector3::new(3.0, 0.0, 0.0)]);
        assert!(out[0].norm() < TOL);
    }

    #[test]
    fn full_turn_matches_identity() {
        let mut t = Transform::default();
        t.pan(360.0);
        assert!(rotations_agree(&t, &Transform::default()));
    }
}
