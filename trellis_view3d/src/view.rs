// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use nalgebra::Vector3;

use crate::projection::Projection;
use crate::transform::Transform;

/// The pairing of one [`Transform`] and one [`Projection`].
///
/// Mapping is stateless function composition: transform first, then
/// project. A view carries no invariants beyond those of its two parts.
#[derive(Clone, Debug, Default)]
pub struct View {
    transform: Transform,
    projection: Projection,
}

impl View {
    /// Creates a view from a transform and a projection.
    #[must_use]
    pub fn new(transform: Transform, projection: Projection) -> Self {
        Self {
            transform,
            projection,
        }
    }

    /// Returns the rotation half.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Returns the rotation half for camera setup.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Returns the projection half.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Returns the projection half for camera setup.
    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Maps scene points to device coordinates.
    #[must_use]
    pub fn map(&self, points: &[Vector3<f64>]) -> Vec<Point> {
        self.projection.project(&self.transform.apply(points))
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::View;

    #[test]
    fn default_view_centers_the_origin() {
        let view = View::default();
        let out = view.map(&[Vector3::zeros()]);
        assert_eq!((out[0].x, out[0].y), (212.0, 150.0));
    }

    #[test]
    fn map_composes_transform_then_projection() {
        let mut view = View::default();
        view.transform_mut().set_focus(Vector3::new(2.0, 0.0, 0.0));
        view.projection_mut().scale_by(10.0);
        // (3, 0, 0) - focus = (1, 0, 0), scaled by 10, centered at 212.
        let out = view.map(&[Vector3::new(3.0, 0.0, 0.0)]);
        assert_eq!(out[0].x, 222.0);
    }
}
