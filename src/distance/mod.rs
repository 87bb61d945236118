pub mod metric;

pub use metric::{manhattan_distance, space_time_distance, Coord};
