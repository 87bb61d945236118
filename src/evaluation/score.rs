use serde::Serialize;

use crate::domain::{Problem, Solution, SolutionError};

use super::checker::check;

/// Which bonus terms count towards the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Award the problem's bonus for every ride started at its earliest start.
    pub on_time_bonus: bool,
    /// Awarded once when every ride in the problem is served.
    pub completion_bonus: Option<u64>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            on_time_bonus: true,
            completion_bonus: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub distance: u64,
    pub bonus: u64,
    pub completion_bonus: u64,
    pub total: u64,
    pub assigned: usize,
    pub on_time: usize,
    pub unassigned: usize,
}

impl ScoreBreakdown {
    pub(crate) fn record(&mut self, length: u64, on_time: bool, bonus: u64, config: &ScoreConfig) {
        self.assigned += 1;
        self.distance = self.distance.saturating_add(length);
        if on_time {
            self.on_time += 1;
            if config.on_time_bonus {
                self.bonus = self.bonus.saturating_add(bonus);
            }
        }
    }

    pub(crate) fn finish(mut self, ride_count: usize, config: &ScoreConfig) -> Self {
        self.unassigned = ride_count - self.assigned;
        if self.unassigned == 0 {
            self.completion_bonus = config.completion_bonus.unwrap_or(0);
        }
        self.total = self
            .distance
            .saturating_add(self.bonus)
            .saturating_add(self.completion_bonus);
        self
    }
}

/// Score a scheduler's output. Errors only if the solution breaks the problem's rules.
pub fn find_score(
    problem: &Problem,
    solution: &Solution,
    config: &ScoreConfig,
) -> Result<ScoreBreakdown, SolutionError> {
    check(problem, solution.itineraries(), config).map(|(_, breakdown)| breakdown)
}
