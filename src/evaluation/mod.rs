pub mod checker;
pub mod feasibility;
pub mod score;

pub use checker::check;
pub use feasibility::{is_feasible, plan_leg, Leg};
pub use score::{find_score, ScoreBreakdown, ScoreConfig};
