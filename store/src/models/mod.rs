pub mod attempt;
pub mod contest;
pub mod problem;
pub mod problem_part;

pub use attempt::{Attempt, AttemptStatus, VerdictReason};
pub use contest::{Contest, ContestPhase};
pub use problem::Problem;
pub use problem_part::ProblemPart;
