//! Year-by-year rent versus buy projection.

pub mod comparison;
pub mod discount;
pub mod engine;

pub use comparison::{find_crossover, Crossover, HorizonComparison};
pub use discount::present_value;
pub use engine::{property_value, Projection, ProjectionEngine};
