use serde::{Deserialize, Serialize};

/// Per-user daily nutrition targets.
///
/// One goal per user at a time; setting new targets replaces the old record
/// wholesale rather than merging field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoal {
    /// Daily calorie target (kcal).
    pub calories: u32,

    /// Daily protein target (grams).
    pub protein: f64,

    /// Daily carbohydrate target (grams).
    pub carbs: f64,

    /// Daily fat target (grams).
    pub fat: f64,
}

impl Default for NutritionGoal {
    /// Fallback targets used when a user never set goals.
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 50.0,
            carbs: 250.0,
            fat: 70.0,
        }
    }
}
