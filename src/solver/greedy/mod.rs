pub mod dispatch;
mod ready;

pub use dispatch::{select_ride, solve};
