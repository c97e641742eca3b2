//! Scene placement tests - reproducibility for a fixed seed

use tui_roam::core::{Scene, SimpleRng};
use tui_roam::types::{ENTITY_COUNT, GRID_COLS, GRID_ROWS};

#[test]
fn test_fixed_seed_is_reproducible() {
    for seed in [1, 7, 12345, u32::MAX] {
        let a = Scene::from_seed(seed);
        let b = Scene::generate(&mut SimpleRng::new(seed));
        assert_eq!(a, b);
        assert_eq!(a.entities().len(), ENTITY_COUNT);
    }
}

#[test]
fn test_all_coordinates_in_interior_range() {
    for seed in 0..500 {
        for e in Scene::from_seed(seed).entities() {
            assert!(e.x >= 1 && e.x <= GRID_COLS as i32 - 2, "seed {seed}: {e:?}");
            assert!(e.y >= 1 && e.y <= GRID_ROWS as i32 - 2, "seed {seed}: {e:?}");
        }
    }
}

#[test]
fn test_different_seeds_usually_differ() {
    let distinct = (0..20u32)
        .map(Scene::from_seed)
        .collect::<Vec<_>>()
        .windows(2)
        .filter(|w| w[0] != w[1])
        .count();
    assert!(distinct >= 15);
}

#[test]
fn test_placement_covers_the_grid() {
    // Across many seeds both edges of each axis should be reachable.
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for seed in 0..2000 {
        for e in Scene::from_seed(seed).entities() {
            min_x = min_x.min(e.x);
            max_x = max_x.max(e.x);
            min_y = min_y.min(e.y);
            max_y = max_y.max(e.y);
        }
    }
    assert!(min_y <= 3 && max_y >= GRID_ROWS as i32 - 4, "y in {min_y}..={max_y}");
    assert!(min_x <= 5 && max_x >= GRID_COLS as i32 - 6, "x in {min_x}..={max_x}");
}
