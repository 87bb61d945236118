use std::fmt;

use serde::Serialize;

/// Grid intersection as (row, column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of grid steps between two intersections.
pub fn manhattan_distance(a: Coord, b: Coord) -> u64 {
    u64::from(a.row.abs_diff(b.row)) + u64::from(a.col.abs_diff(b.col))
}

/// Ranking heuristic: spatial detour plus how far `t` is from the ride's
/// earliest start, early and late weighted alike.
pub fn space_time_distance(location: Coord, t: u64, ride_start: Coord, earliest_start: u64) -> u64 {
    manhattan_distance(location, ride_start) + t.abs_diff(earliest_start)
}
