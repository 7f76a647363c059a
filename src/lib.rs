pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod shopping;
pub mod state;

pub use error::{DietError, Result};
pub use models::{FoodEntry, Ingredient, MealType, NutritionGoal, NutritionReport};
