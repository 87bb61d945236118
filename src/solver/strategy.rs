use std::fmt;
use std::str::FromStr;

use crate::domain::{Problem, Solution};

use super::{earliest_start, greedy};

/// A scheduler: takes the whole instance, returns one itinerary per vehicle.
pub type SolveFn = fn(&Problem) -> Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Greedy,
    EarliestStart,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Greedy, Strategy::EarliestStart];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::EarliestStart => "earliest-start",
        }
    }

    pub fn solver(self) -> SolveFn {
        match self {
            Strategy::Greedy => greedy::solve,
            Strategy::EarliestStart => earliest_start::solve,
        }
    }

    pub fn solve(self, problem: &Problem) -> Solution {
        (self.solver())(problem)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        write!(
            f,
            "unknown strategy '{}' (available: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Look up a scheduler by name.
pub fn strategy_fn(name: &str) -> Result<SolveFn, UnknownStrategy> {
    name.parse::<Strategy>().map(Strategy::solver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = strategy_fn("aron").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("aron"));
        assert!(message.contains("greedy"));
        assert!(message.contains("earliest-start"));
    }
}
