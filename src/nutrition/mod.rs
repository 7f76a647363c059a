pub mod aggregator;
pub mod constants;
pub mod energy;

pub use aggregator::NutritionAggregator;
pub use constants::*;
pub use energy::{MacroSplit, activity_factor, suggested_calories, suggested_macros};
