//! Offline ride dispatch: assigns grid transport requests to a fixed fleet
//! so as to maximise distance served plus on-time-start bonuses.

pub mod cli;
pub mod config;
pub mod distance;
pub mod domain;
pub mod evaluation;
pub mod fixtures;
pub mod output;
pub mod setup;
pub mod solver;

pub use domain::{Problem, ProblemError, Ride, Solution, SolutionError, Vehicle};
pub use solver::Strategy;
