// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nalgebra::Vector3;

use crate::orientation::Orientation;

/// One axis-aligned rectangular patch in 3D space.
///
/// The patch is described by two bounds per free axis (`u0..u1`,
/// `v0..v1`), a fixed offset along the remaining axis, and a fill color
/// carried through to the output verbatim.
///
/// Bound ordering (`u0 <= u1`, `v0 <= v1`) is not enforced: every resize
/// operation here preserves center and half-extent, so well-formed callers
/// never invert bounds, and raw bound writes are the caller's
/// responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct Flat {
    orientation: Orientation,
    u0: f64,
    u1: f64,
    v0: f64,
    v1: f64,
    fixed: f64,
    fill: String,
}

impl Flat {
    /// Creates a patch in the given plane.
    #[must_use]
    pub fn new(
        orientation: Orientation,
        u0: f64,
        u1: f64,
        v0: f64,
        v1: f64,
        fixed: f64,
        fill: &str,
    ) -> Self {
        Self {
            orientation,
            u0,
            u1,
            v0,
            v1,
            fixed,
            fill: fill.to_string(),
        }
    }

    /// Returns the plane this patch lies in.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the fill color text.
    #[must_use]
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Sets the fill color text, uninspected.
    pub fn set_fill(&mut self, fill: &str) {
        self.fill = fill.to_string();
    }

    /// Returns the lower bound on the u axis.
    #[must_use]
    pub fn u0(&self) -> f64 {
        self.u0
    }

    /// Returns the upper bound on the u axis.
    #[must_use]
    pub fn u1(&self) -> f64 {
        self.u1
    }

    /// Returns the lower bound on the v axis.
    #[must_use]
    pub fn v0(&self) -> f64 {
        self.v0
    }

    /// Returns the upper bound on the v axis.
    #[must_use]
    pub fn v1(&self) -> f64 {
        self.v1
    }

    /// Returns the fixed-axis offset.
    #[must_use]
    pub fn fixed(&self) -> f64 {
        self.fixed
    }

    /// Sets the fixed-axis offset.
    pub fn set_fixed(&mut self, fixed: f64) {
        self.fixed = fixed;
    }

    /// Returns the extent along the u axis.
    #[must_use]
    pub fn ul(&self) -> f64 {
        self.u1 - self.u0
    }

    /// Sets the u extent, keeping the center fixed.
    pub fn set_ul(&mut self, length: f64) {
        let mid = self.uc();
        let half = length / 2.0;
        self.u0 = mid - half;
        self.u1 = mid + half;
    }

    /// Returns the extent along the v axis.
    #[must_use]
    pub fn vl(&self) -> f64 {
        self.v1 - self.v0
    }

    /// Sets the v extent, keeping the center fixed.
    pub fn set_vl(&mut self, length: f64) {
        let mid = self.vc();
        let half = length / 2.0;
        self.v0 = mid - half;
        self.v1 = mid + half;
    }

    /// Returns the center along the u axis.
    #[must_use]
    pub fn uc(&self) -> f64 {
        (self.u0 + self.u1) / 2.0
    }

    /// Sets the u center, keeping the extent fixed.
    pub fn set_uc(&mut self, center: f64) {
        let half = self.ul() / 2.0;
        self.u0 = center - half;
        self.u1 = center + half;
    }

    /// Returns the center along the v axis.
    #[must_use]
    pub fn vc(&self) -> f64 {
        (self.v0 + self.v1) / 2.0
    }

    /// Sets the v center, keeping the extent fixed.
    pub fn set_vc(&mut self, center: f64) {
        let half = self.vl() / 2.0;
        self.v0 = center - half;
        self.v1 = center + half;
    }

    /// Scales the u extent about its center.
    pub fn uscale(&mut self, factor: f64) {
        self.set_ul(self.ul() * factor);
    }

    /// Scales the v extent about its center.
    pub fn vscale(&mut self, factor: f64) {
        self.set_vl(self.vl() * factor);
    }

    /// Scales both extents symmetrically about their centers.
    pub fn scale(&mut self, factor: f64) {
        self.uscale(factor);
        self.vscale(factor);
    }

    /// Returns the four corner points in winding order
    /// `(u0,v0), (u0,v1), (u1,v1), (u1,v0)`, mapped into the axes selected
    /// by the orientation. Exactly one coordinate axis is constant across
    /// all four points.
    #[must_use]
    pub fn corners(&self) -> [Vector3<f64>; 4] {
        let (u_axis, v_axis, f_axis) = self.orientation.axes();
        let us = [self.u0, self.u0, self.u1, self.u1];
        let vs = [self.v0, self.v1, self.v1, self.v0];
        core::array::from_fn(|i| {
            let mut p = Vector3::zeros();
            p[u_axis] = us[i];
            p[v_axis] = vs[i];
            p[f_axis] = self.fixed;
            p
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Flat;
    use crate::orientation::Orientation;

    const TOL: f64 = 1e-12;

    fn patch(orientation: Orientation) -> Flat {
        Flat::new(orientation, 1.0, 3.0, 10.0, 14.0, 5.0, "black")
    }

    #[test]
    fn corners_hold_one_axis_constant() {
        for orientation in [Orientation::Xy, Orientation::Xz, Orientation::Yz] {
            let corners = patch(orientation).corners();
            let (_, _, f_axis) = orientation.axes();
            assert!(
                corners.iter().all(|p| p[f_axis] == 5.0),
                "fixed axis must be constant for {orientation:?}"
            );
        }
    }

    #[test]
    fn corners_trace_the_winding_order() {
        let corners = patch(Orientation::Xy).corners();
        let expect = [
            (1.0, 10.0),
            (1.0, 14.0),
            (3.0, 14.0),
            (3.0, 10.0),
        ];
        for (p, (u, v)) in corners.iter().zip(expect) {
            assert_eq!((p.x, p.y), (u, v));
        }
    }

    #[test]
    fn xz_patch_maps_v_to_the_z_axis() {
        let corners = patch(Orientation::Xz).corners();
        assert_eq!((corners[0].x, corners[0].z, corners[0].y), (1.0, 10.0, 5.0));
    }

    #[test]
    fn resize_preserves_center() {
        let mut flat = patch(Orientation::Xy);
        let (uc, vc) = (flat.uc(), flat.vc());
        flat.set_ul(8.0);
        flat.set_vl(1.0);
        assert!((flat.uc() - uc).abs() < TOL);
        assert!((flat.vc() - vc).abs() < TOL);
        assert!((flat.ul() - 8.0).abs() < TOL);
        assert!((flat.vl() - 1.0).abs() < TOL);
    }

    #[test]
    fn recenter_preserves_extent() {
        let mut flat = patch(Orientation::Xy);
        let (ul, vl) = (flat.ul(), flat.vl());
        flat.set_uc(0.0);
        flat.set_vc(-2.0);
        assert!((flat.ul() - ul).abs() < TOL);
        assert!((flat.vl() - vl).abs() < TOL);
        assert!(flat.uc().abs() < TOL);
        assert!((flat.vc() + 2.0).abs() < TOL);
    }

    #[test]
    fn scale_is_symmetric_about_centers() {
        let mut flat = patch(Orientation::Yz);
        let (uc, vc) = (flat.uc(), flat.vc());
        flat.scale(3.0);
        assert!((flat.uc() - uc).abs() < TOL);
        assert!((flat.vc() - vc).abs() < TOL);
        assert!((flat.ul() - 6.0).abs() < TOL);
        assert!((flat.vl() - 12.0).abs() < TOL);
    }
}
