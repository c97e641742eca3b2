//! Movement resolver tests - clamping and quit latching

use tui_roam::core::{resolve, InteriorPos, QuitFlag, SimpleRng};
use tui_roam::types::{Key, KeyState, GRID_COLS, GRID_ROWS};

fn random_keys(rng: &mut SimpleRng) -> KeyState {
    let bits = rng.next_u32();
    KeyState {
        up: bits & 1 != 0,
        left: bits & 2 != 0,
        down: bits & 4 != 0,
        right: bits & 8 != 0,
        quit: false,
    }
}

#[test]
fn test_up_left_from_start() {
    let keys = KeyState::default().with(Key::Up).with(Key::Left);
    let out = resolve(InteriorPos::clamped(12, 15), keys, QuitFlag::default());
    assert_eq!((out.pos.x(), out.pos.y()), (11, 14));
}

#[test]
fn test_random_walks_stay_in_interior() {
    let mut rng = SimpleRng::new(31337);
    let mut pos = InteriorPos::start();
    let mut quit = QuitFlag::default();

    for _ in 0..20_000 {
        let out = resolve(pos, random_keys(&mut rng), quit);
        pos = out.pos;
        quit = out.quit;

        assert!((1..=GRID_COLS as i32 - 2).contains(&pos.x()), "x = {}", pos.x());
        assert!((1..=GRID_ROWS as i32 - 2).contains(&pos.y()), "y = {}", pos.y());
    }
    assert!(!quit.is_raised());
}

#[test]
fn test_holding_a_direction_pins_to_the_edge() {
    let mut pos = InteriorPos::start();
    let left = KeyState::default().with(Key::Left).with(Key::Up);
    for _ in 0..500 {
        pos = resolve(pos, left, QuitFlag::default()).pos;
    }
    assert_eq!((pos.x(), pos.y()), (1, 1));

    let right = KeyState::default().with(Key::Right).with(Key::Down);
    for _ in 0..500 {
        pos = resolve(pos, right, QuitFlag::default()).pos;
    }
    assert_eq!((pos.x(), pos.y()), (GRID_COLS as i32 - 2, GRID_ROWS as i32 - 2));
}

#[test]
fn test_each_key_moves_one_unit() {
    let start = InteriorPos::clamped(50, 20);
    let cases = [
        (Key::Up, (50, 19)),
        (Key::Left, (49, 20)),
        (Key::Down, (50, 21)),
        (Key::Right, (51, 20)),
    ];
    for (key, expected) in cases {
        let out = resolve(start, KeyState::default().with(key), QuitFlag::default());
        assert_eq!((out.pos.x(), out.pos.y()), expected, "{key:?}");
    }
}

#[test]
fn test_quit_once_raised_stays_raised() {
    let mut quit = QuitFlag::default();
    let mut pos = InteriorPos::start();

    let out = resolve(pos, KeyState::default().with(Key::Quit), quit);
    assert!(out.quit.is_raised());
    pos = out.pos;
    quit = out.quit;

    for _ in 0..10 {
        let out = resolve(pos, KeyState::default().with(Key::Down), quit);
        assert!(out.quit.is_raised());
        pos = out.pos;
        quit = out.quit;
    }
}
