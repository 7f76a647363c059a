use crate::models::NutritionGoal;

/// Immutable nutrition snapshot for one date.
///
/// Rebuilt from the food log on every request, never persisted.
#[derive(Debug, Clone)]
pub struct NutritionReport {
    /// Date the report covers (YYYY-MM-DD).
    pub date: String,

    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
    pub total_sugar: f64,
    pub total_sodium: f64,

    /// Goal in effect when the report was built.
    pub goal: NutritionGoal,

    pub calorie_pct: f64,
    pub protein_pct: f64,
    pub carb_pct: f64,
    pub fat_pct: f64,
}

/// Percentage of a goal reached, with a zero-goal guard.
///
/// A zero goal yields 0% rather than a division error.
pub fn percent_of_goal(total: f64, goal: f64) -> f64 {
    if goal > 0.0 { total * 100.0 / goal } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_goal() {
        assert!((percent_of_goal(50.0, 200.0) - 25.0).abs() < 1e-9);
        assert_eq!(percent_of_goal(50.0, 0.0), 0.0);
        assert_eq!(percent_of_goal(0.0, 200.0), 0.0);
    }
}
