// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_solids::{Flat, Orientation, Person, Room};

use crate::canvas::Canvas;
use crate::depth::place_occupants;

/// Half-width of the door opening, in scene units.
const DOOR_HALF_WIDTH: f64 = 0.3;
/// Door height, in scene units.
const DOOR_HEIGHT: f64 = 2.0;
/// Half-width of a window, in scene units.
const WINDOW_HALF_WIDTH: f64 = 0.25;
/// Window sill and lintel heights, in scene units.
const WINDOW_BOTTOM: f64 = 0.8;
const WINDOW_TOP: f64 = 1.6;

/// Parameters for [`room_scene`].
#[derive(Clone, Debug)]
pub struct SceneOptions {
    /// Room extent along x.
    pub breadth: f64,
    /// Room extent along y, away from the camera.
    pub depth: f64,
    /// Room extent along z.
    pub height: f64,
    /// Number of windows spaced evenly along the back wall.
    pub windows: u32,
    /// Output size multiplier: scales the viewport and the projection
    /// together.
    pub size: f64,
    /// Occupant positions `(x, y)` on the floor; depth-ordered on
    /// insertion.
    pub occupants: Vec<(f64, f64)>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            breadth: 6.0,
            depth: 4.0,
            height: 2.7,
            windows: 2,
            size: 1.0,
            occupants: Vec::new(),
        }
    }
}

/// Builds a furnished room scene: the room interior, a door on the side
/// wall, evenly spaced windows on the back wall, and depth-ordered
/// occupants, viewed by a fixed camera.
///
/// The camera focuses on the room centre, pans -30 degrees, tilts 60
/// degrees and scales by 50; `options.size` multiplies both the viewport
/// extents and the scale on top of that.
#[must_use]
pub fn room_scene(options: &SceneOptions) -> Canvas {
    let mut canvas = Canvas::new();
    {
        let projection = canvas.projection_mut();
        let width = f64::from(projection.width()) * options.size;
        let height = f64::from(projection.height()) * options.size;
        projection.set_width(width.round() as u32);
        projection.set_height(height.round() as u32);
        projection.scale_by(options.size);
    }

    let room = Room::new(options.breadth, options.depth, options.height);
    canvas.add(&room);

    let side = room.side();
    let door = Flat::new(
        Orientation::Yz,
        side.uc() - DOOR_HALF_WIDTH,
        side.uc() + DOOR_HALF_WIDTH,
        0.0,
        DOOR_HEIGHT,
        room.cuboid().right_bound(),
        "white",
    );
    canvas.add(&door);

    let spacing = options.breadth / f64::from(options.windows + 1);
    for i in 1..=options.windows {
        let centre = f64::from(i) * spacing;
        let window = Flat::new(
            Orientation::Xz,
            centre - WINDOW_HALF_WIDTH,
            centre + WINDOW_HALF_WIDTH,
            WINDOW_BOTTOM,
            WINDOW_TOP,
            room.cuboid().far_bound(),
            "white",
        );
        canvas.add(&window);
    }

    let occupants = options
        .occupants
        .iter()
        .map(|&(x, y)| Person::new(x, y))
        .collect();
    place_occupants(&mut canvas, &room, occupants);

    let centre = room.centre();
    canvas.transform_mut().set_focus(centre);
    canvas.transform_mut().pan(-30.0);
    canvas.transform_mut().tilt(60.0);
    canvas.projection_mut().scale_by(50.0);

    canvas
}
