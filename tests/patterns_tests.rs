//! Pattern library tests - seed data stays valid for the default grid

use tui_life::core::{patterns, Simulation};
use tui_life::types::GRID_SIZE;

#[test]
fn test_all_patterns_within_default_grid() {
    for pattern in patterns::PATTERNS {
        for &(col, row) in pattern.cells {
            assert!(
                col < GRID_SIZE && row < GRID_SIZE,
                "{} has cell ({col}, {row}) outside the grid",
                pattern.name
            );
        }
    }
}

#[test]
fn test_patterns_avoid_frozen_rings() {
    // Every canonical pattern lives fully inside the evaluated region, so
    // seeded structures actually evolve.
    for pattern in patterns::PATTERNS {
        for &(col, row) in pattern.cells {
            assert!(
                (2..GRID_SIZE - 1).contains(&col) && (2..GRID_SIZE - 1).contains(&row),
                "{} has cell ({col}, {row}) in a frozen ring",
                pattern.name
            );
        }
    }
}

#[test]
fn test_demo_layout_population() {
    let mut sim = Simulation::new(GRID_SIZE);
    sim.seed(&patterns::demo_layout()).unwrap();

    let expected: usize = patterns::PATTERNS.iter().map(|p| p.cells.len()).sum();
    assert_eq!(sim.grid().population(), expected);
}

#[test]
fn test_patterns_have_unique_names() {
    let mut names: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), patterns::PATTERNS.len());
}

#[test]
fn test_block_pattern_coordinates() {
    // The canonical still-life used throughout the rule tests.
    assert_eq!(patterns::BLOCK, &[(4, 8), (5, 8), (4, 9), (5, 9)]);
    assert_eq!(patterns::BLINKER, &[(3, 3), (4, 3), (5, 3)]);
}
