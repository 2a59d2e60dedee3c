// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use nalgebra::Vector3;

/// An orthographic viewport projection.
///
/// Maps already-rotated scene points to device coordinates: multiply all
/// coordinates by the uniform scale factor, translate x by `width / 2`,
/// flip y around `height / 2` so that "up" in scene space is up on screen,
/// and drop the depth axis.
///
/// The scale factor must stay positive; [`Projection::scale_by`] composes
/// multiplicatively, so positive factors preserve that.
#[derive(Clone, Debug)]
pub struct Projection {
    width: u32,
    height: u32,
    scale: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(424, 300, 1.0)
    }
}

impl Projection {
    /// Creates a projection for a `width` x `height` viewport with the
    /// given uniform scale factor.
    #[must_use]
    pub fn new(width: u32, height: u32, scale: f64) -> Self {
        debug_assert!(scale > 0.0, "projection scale must be positive");
        Self {
            width,
            height,
            scale,
        }
    }

    /// Returns the viewport width in device units.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sets the viewport width.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Returns the viewport height in device units.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets the viewport height.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Multiplies the scale factor by `factor`. Composable: scaling by 2
    /// then by 3 is the same as scaling by 6.
    pub fn scale_by(&mut self, factor: f64) {
        debug_assert!(factor > 0.0, "projection scale factor must be positive");
        self.scale *= factor;
    }

    /// Projects a list of rotated scene points to device coordinates.
    #[must_use]
    pub fn project(&self, points: &[Vector3<f64>]) -> Vec<Point> {
        let half_w = f64::from(self.width) / 2.0;
        let half_h = f64::from(self.height) / 2.0;
        points
            .iter()
            .map(|p| Point::new(p.x * self.scale + half_w, half_h - p.y * self.scale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::Projection;

    #[test]
    fn origin_maps_to_viewport_center() {
        let p = Projection::new(424, 300, 1.0);
        let out = p.project(&[Vector3::zeros()]);
        assert_eq!((out[0].x, out[0].y), (212.0, 150.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let p = Projection::new(100, 100, 1.0);
        let out = p.project(&[Vector3::new(0.0, 10.0, 0.0)]);
        // Scene-space "up" lands above the center on screen.
        assert_eq!(out[0].y, 40.0);
    }

    #[test]
    fn depth_axis_is_dropped() {
        let p = Projection::new(100, 100, 1.0);
        let near = p.project(&[Vector3::new(1.0, 2.0, 0.0)]);
        let far = p.project(&[Vector3::new(1.0, 2.0, 99.0)]);
        assert_eq!(near, far);
    }

    #[test]
    fn scale_composes_multiplicatively() {
        let mut p = Projection::new(100, 100, 1.0);
        p.scale_by(2.0);
        p.scale_by(3.0);
        assert_eq!(p.scale(), 6.0);
        let out = p.project(&[Vector3::new(1.0, 0.0, 0.0)]);
        assert_eq!(out[0].x, 56.0);
    }
}
