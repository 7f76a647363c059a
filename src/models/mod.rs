pub mod food;
pub mod goal;
pub mod ingredient;
pub mod report;

pub use food::{FoodEntry, Nutrients};
pub use goal::NutritionGoal;
pub use ingredient::{Ingredient, MealType, RecipeComponent};
pub use report::NutritionReport;
