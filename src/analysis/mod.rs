pub mod confidence;
pub mod cost;
pub mod evaluator;

pub use confidence::calculate_confidence;
pub use cost::{analyze_cost, BaseCosts};
pub use evaluator::Evaluator;
