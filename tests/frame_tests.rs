//! Frame builder properties over many scenes and player positions.

use tui_roam::core::{build_frame, is_border, Entity, InteriorPos, Scene, SimpleRng};
use tui_roam::types::{Glyph, GRID_COLS, GRID_ROWS};

fn random_pos(rng: &mut SimpleRng) -> InteriorPos {
    // Deliberately wider than the grid: the constructor must clamp.
    let x = rng.next_range(GRID_COLS as u32 + 20) as i32 - 10;
    let y = rng.next_range(GRID_ROWS as u32 + 20) as i32 - 10;
    InteriorPos::clamped(x, y)
}

#[test]
fn border_is_always_border() {
    let mut rng = SimpleRng::new(2024);
    for seed in 0..50 {
        let scene = Scene::from_seed(seed);
        let player = random_pos(&mut rng);
        let frame = build_frame(scene.entities(), player);

        for (row, col, glyph) in frame.iter() {
            if is_border(row, col) {
                assert_eq!(glyph, Glyph::Border, "seed {seed} at ({row},{col})");
            } else {
                assert_ne!(glyph, Glyph::Border, "seed {seed} at ({row},{col})");
            }
        }
    }
}

#[test]
fn border_survives_entities_on_and_beyond_the_edge() {
    let entities = [
        Entity::new(0, 0),
        Entity::new(GRID_COLS as i32 - 1, 10),
        Entity::new(10, GRID_ROWS as i32 - 1),
        Entity::new(GRID_COLS as i32, GRID_ROWS as i32),
        Entity::new(-5, 3),
    ];
    let frame = build_frame(&entities, InteriorPos::start());
    for (row, col, glyph) in frame.iter() {
        if is_border(row, col) {
            assert_eq!(glyph, Glyph::Border);
        }
    }
    assert_eq!(frame.iter().filter(|&(_, _, g)| g == Glyph::Object).count(), 0);
}

#[test]
fn interior_entities_are_drawn_unless_under_the_player() {
    for seed in 0..50 {
        let scene = Scene::from_seed(seed);
        let player = InteriorPos::clamped(12, 15);
        let frame = build_frame(scene.entities(), player);

        for e in scene.entities() {
            let at = frame.get(e.y as usize, e.x as usize);
            if (e.x, e.y) == (player.x(), player.y()) {
                assert_eq!(at, Some(Glyph::Player));
            } else {
                assert_eq!(at, Some(Glyph::Object), "seed {seed}: {e:?}");
            }
        }
    }
}

#[test]
fn player_covers_an_object_on_the_same_cell() {
    let player = InteriorPos::clamped(50, 20);
    let frame = build_frame(&[Entity::new(50, 20), Entity::new(51, 20)], player);
    assert_eq!(frame.get(20, 50), Some(Glyph::Player));
    assert_eq!(frame.get(20, 51), Some(Glyph::Object));
}

#[test]
fn exactly_one_player_glyph() {
    let mut rng = SimpleRng::new(5);
    for seed in 0..20 {
        let frame = build_frame(Scene::from_seed(seed).entities(), random_pos(&mut rng));
        let players = frame.iter().filter(|&(_, _, g)| g == Glyph::Player).count();
        assert_eq!(players, 1);
    }
}

#[test]
fn building_is_idempotent() {
    let scene = Scene::from_seed(99);
    let player = InteriorPos::clamped(100, 20);
    let a = build_frame(scene.entities(), player);
    let b = build_frame(scene.entities(), player);
    assert_eq!(a, b);

    let mut c = a.clone();
    c.rebuild(scene.entities(), player);
    assert_eq!(a, c);
}

#[test]
fn frame_has_fixed_dimensions() {
    let frame = build_frame(&[], InteriorPos::start());
    assert_eq!(frame.rows(), GRID_ROWS);
    assert_eq!(frame.cols(), GRID_COLS);
    assert_eq!(frame.iter().count(), GRID_ROWS * GRID_COLS);
}
