pub mod earliest_start;
pub mod greedy;
pub mod strategy;

pub use strategy::{strategy_fn, SolveFn, Strategy, UnknownStrategy};
