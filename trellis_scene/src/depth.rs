// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_solids::{Person, Room};

use crate::canvas::Canvas;

/// Computes the depth key for a position along the away-from-camera axis,
/// normalized to `0..=1` across the floor extent (0 nearest the camera,
/// 1 at the back wall).
#[must_use]
pub fn depth_key(away: f64, floor_depth: f64) -> f64 {
    if floor_depth <= 0.0 {
        return 0.0;
    }
    (away / floor_depth).clamp(0.0, 1.0)
}

/// Adds figures to the canvas in painter's order.
///
/// Each occupant gets a depth key from its position across the room's
/// floor; occupants are appended in descending key order (farthest first)
/// so that nearer figures are emitted later and drawn on top.
///
/// This is a heuristic approximation, not hidden-surface removal: it is
/// only valid for non-intersecting, convex, wall- and floor-aligned
/// figures. The ordering is fixed at this call; the graphics list itself
/// stays append-only.
pub fn place_occupants(canvas: &mut Canvas, room: &Room, mut occupants: Vec<Person>) {
    let floor_depth = room.depth();
    occupants.sort_by(|a, b| {
        let (ka, kb) = (depth_key(a.y(), floor_depth), depth_key(b.y(), floor_depth));
        kb.partial_cmp(&ka).unwrap_or(core::cmp::Ordering::Equal)
    });
    for occupant in &occupants {
        canvas.add(occupant);
    }
}
