mod relevancy_index;
mod solver;

pub use relevancy_index::IRelevancyIndex;
pub use solver::{IClassifierSolver, IDecisionFunction, SolverParams};
