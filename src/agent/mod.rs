pub mod assistant;
pub mod requester;
pub mod simulation;

pub use assistant::{Assistant, RunOutcome, RunReport};
pub use requester::DecisionRequester;
