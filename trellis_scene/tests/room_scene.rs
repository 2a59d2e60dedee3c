// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end render of a furnished room scene.

use nalgebra::Vector3;
use trellis_scene::{room_scene, Canvas, SceneOptions};
use trellis_solids::{Compound, Person, Room};

#[test]
fn default_scene_renders_a_complete_svg_document() {
    let canvas = room_scene(&SceneOptions::default());
    let svg = canvas.to_svg();

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(svg.contains("<svg"));
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>\n"));

    // One polygon per graphic: 3 room faces, a door, 2 windows.
    assert_eq!(svg.matches("<polygon").count(), 6);
    for fill in ["lightblue", "steelblue", "lightskyblue", "white"] {
        assert!(
            svg.contains(&format!("fill=\"{fill}\"")),
            "missing fill {fill}"
        );
    }
}

#[test]
fn every_polygon_has_four_points() {
    let canvas = room_scene(&SceneOptions {
        occupants: vec![(2.0, 1.0)],
        ..SceneOptions::default()
    });
    let svg = canvas.to_svg();
    for line in svg.lines().filter(|l| l.contains("<polygon")) {
        let points = line
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("polygon must carry a points attribute");
        assert_eq!(points.split(' ').count(), 4, "not a quad: {points}");
        for pair in points.split(' ') {
            assert_eq!(pair.split(',').count(), 2, "not a pair: {pair}");
        }
    }
}

#[test]
fn an_untransformed_canvas_centers_the_origin() {
    let mut canvas = Canvas::new();
    let room = Room::new(6.0, 4.0, 2.7);
    canvas.add(&room);

    // With the default view, the room's origin corner is the first point
    // of the floor polygon and lands at the viewport center.
    let mapped = canvas.view().map(&[Vector3::zeros()]);
    assert_eq!((mapped[0].x, mapped[0].y), (212.0, 150.0));

    let svg = canvas.to_svg();
    assert!(svg.contains("points=\"212,150"));
}

#[test]
fn occupants_render_behind_nearer_occupants() {
    let options = SceneOptions {
        occupants: vec![(1.5, 0.8), (4.0, 3.2)],
        ..SceneOptions::default()
    };
    let canvas = room_scene(&options);

    let person_patches = Person::new(0.0, 0.0).graphics().len();
    let figures = &canvas.graphics()[6..];
    assert_eq!(figures.len(), 2 * person_patches);
    // Farthest figure first.
    assert_eq!(figures[0].fixed(), 3.2);
    assert_eq!(figures[person_patches].fixed(), 0.8);
}

#[test]
fn save_writes_an_svg_file() {
    let canvas = room_scene(&SceneOptions::default());
    let dir = std::env::temp_dir();
    let path = canvas.save(&dir, "trellis_room_scene_test").unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, canvas.to_svg());
    let _ = std::fs::remove_file(path);
}
