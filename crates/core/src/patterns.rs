//! Pattern library - canonical Life structures as plain coordinate data
//!
//! Each pattern is a list of `(col, row)` pairs positioned on the default
//! 80×80 grid, taken verbatim from the original seed layout. Patterns are
//! data, not engine behavior: any caller may supply its own lists to
//! [`crate::Simulation::seed`].

/// A named seed pattern.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// 2×2 block, the smallest still life.
pub const BLOCK: &[(usize, usize)] = &[(4, 8), (5, 8), (4, 9), (5, 9)];

/// Three in a row, the period-2 oscillator.
pub const BLINKER: &[(usize, usize)] = &[(3, 3), (4, 3), (5, 3)];

/// Toad, period-2 oscillator.
pub const TOAD: &[(usize, usize)] = &[(20, 3), (18, 4), (21, 4), (18, 5), (21, 5), (19, 6)];

/// Ship still life.
pub const SHIP: &[(usize, usize)] = &[(14, 15), (15, 15), (14, 16), (16, 16), (15, 17), (16, 17)];

/// Glider, translates by (1, 1) every 4 generations.
pub const GLIDER: &[(usize, usize)] = &[(9, 25), (7, 26), (9, 26), (8, 27), (9, 27)];

/// Gosper glider gun.
pub const GOSPER_GLIDER_GUN: &[(usize, usize)] = &[
    (42, 20),
    (43, 20),
    (44, 21),
    (31, 22),
    (32, 22),
    (45, 22),
    (54, 22),
    (55, 22),
    (31, 23),
    (32, 23),
    (37, 23),
    (45, 23),
    (54, 23),
    (55, 23),
    (20, 24),
    (21, 24),
    (28, 24),
    (29, 24),
    (35, 24),
    (36, 24),
    (45, 24),
    (20, 25),
    (21, 25),
    (27, 25),
    (28, 25),
    (29, 25),
    (35, 25),
    (38, 25),
    (39, 25),
    (44, 25),
    (28, 26),
    (29, 26),
    (36, 26),
    (37, 26),
    (38, 26),
    (39, 26),
    (40, 26),
    (42, 26),
    (43, 26),
    (31, 27),
    (32, 27),
    (37, 27),
    (31, 28),
    (32, 28),
];

/// Block-and-beehive assembly placed above the gun in the original layout.
pub const GUN_SHIP: &[(usize, usize)] = &[
    (30, 10),
    (31, 10),
    (30, 11),
    (31, 11),
    (41, 8),
    (42, 8),
    (41, 9),
    (42, 9),
    (38, 10),
    (39, 10),
    (37, 11),
    (38, 11),
    (39, 11),
    (38, 12),
    (39, 12),
    (41, 13),
    (42, 13),
    (41, 14),
    (42, 14),
];

/// Top half of a pulsar. Incomplete in the original layout; kept as-is.
pub const HALF_PULSAR: &[(usize, usize)] = &[
    (6, 60),
    (7, 60),
    (8, 60),
    (12, 60),
    (13, 60),
    (14, 60),
    (4, 61),
    (9, 61),
    (11, 61),
    (16, 61),
    (4, 62),
    (9, 62),
    (11, 62),
    (16, 62),
    (4, 63),
    (9, 63),
    (11, 63),
    (16, 63),
    (6, 65),
    (7, 65),
    (8, 65),
    (12, 65),
    (13, 65),
    (14, 65),
];

/// All patterns of the default layout, in seeding order.
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: BLOCK,
    },
    Pattern {
        name: "Blinker",
        cells: BLINKER,
    },
    Pattern {
        name: "Toad",
        cells: TOAD,
    },
    Pattern {
        name: "Ship",
        cells: SHIP,
    },
    Pattern {
        name: "Glider",
        cells: GLIDER,
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: GOSPER_GLIDER_GUN,
    },
    Pattern {
        name: "Gun Ship",
        cells: GUN_SHIP,
    },
    Pattern {
        name: "Half Pulsar",
        cells: HALF_PULSAR,
    },
];

/// The complete default seed layout: every pattern at its canonical spot.
pub fn demo_layout() -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for pattern in PATTERNS {
        cells.extend_from_slice(pattern.cells);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    #[test]
    fn test_patterns_fit_default_grid() {
        for pattern in PATTERNS {
            for &(col, row) in pattern.cells {
                assert!(
                    col < GRID_SIZE && row < GRID_SIZE,
                    "{} cell ({col}, {row}) outside {GRID_SIZE}x{GRID_SIZE} grid",
                    pattern.name
                );
            }
        }
    }

    #[test]
    fn test_demo_layout_concatenates_all_patterns() {
        let total: usize = PATTERNS.iter().map(|p| p.cells.len()).sum();
        assert_eq!(demo_layout().len(), total);
    }

    #[test]
    fn test_no_pattern_overlap_in_layout() {
        let mut cells = demo_layout();
        cells.sort_unstable();
        let before = cells.len();
        cells.dedup();
        assert_eq!(cells.len(), before);
    }
}
