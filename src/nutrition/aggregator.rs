use std::collections::HashMap;

use crate::models::report::percent_of_goal;
use crate::models::{FoodEntry, NutritionGoal, NutritionReport};

/// Builds nutrition reports and owns the per-user goal map.
///
/// Report building never fails: a missing goal falls back to the default
/// targets and zero goals yield zero percentages.
#[derive(Debug, Default)]
pub struct NutritionAggregator {
    /// Goals keyed by user name.
    goals: HashMap<String, NutritionGoal>,
}

impl NutritionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the goal map from flat (user, goal) records.
    pub fn from_goals<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, NutritionGoal)>,
    {
        Self {
            goals: records.into_iter().collect(),
        }
    }

    /// Store daily targets for a user, replacing any previous goal.
    pub fn set_goals(&mut self, user: &str, goal: NutritionGoal) {
        self.goals.insert(user.to_string(), goal);
    }

    /// The user's stored goal, or the default targets when unset.
    pub fn goals_for(&self, user: &str) -> NutritionGoal {
        self.goals.get(user).cloned().unwrap_or_default()
    }

    /// Whether the user has explicitly stored goals.
    pub fn has_goals(&self, user: &str) -> bool {
        self.goals.contains_key(user)
    }

    /// Sum one date's entries into a report against the user's goals.
    ///
    /// Entries without a nutrient breakdown contribute to the calorie total
    /// only.
    pub fn build_report(&self, user: &str, date: &str, entries: &[FoodEntry]) -> NutritionReport {
        let goal = self.goals_for(user);

        let mut calories = 0.0;
        let mut protein = 0.0;
        let mut carbs = 0.0;
        let mut fat = 0.0;
        let mut fiber = 0.0;
        let mut sugar = 0.0;
        let mut sodium = 0.0;

        for entry in entries {
            calories += entry.calories;
            protein += entry.protein();
            carbs += entry.carbs();
            fat += entry.fat();
            fiber += entry.fiber();
            sugar += entry.sugar();
            sodium += entry.sodium();
        }

        NutritionReport {
            date: date.to_string(),
            total_calories: calories,
            total_protein: protein,
            total_carbs: carbs,
            total_fat: fat,
            total_fiber: fiber,
            total_sugar: sugar,
            total_sodium: sodium,
            calorie_pct: percent_of_goal(calories, f64::from(goal.calories)),
            protein_pct: percent_of_goal(protein, goal.protein),
            carb_pct: percent_of_goal(carbs, goal.carbs),
            fat_pct: percent_of_goal(fat, goal.fat),
            goal,
        }
    }

    /// One report per date, preserving the given order.
    ///
    /// `entries_for` resolves a date to the user's logged entries; repeated
    /// or unordered dates simply produce repeated or unordered reports.
    pub fn build_weekly_report<F>(
        &self,
        user: &str,
        dates: &[String],
        mut entries_for: F,
    ) -> Vec<NutritionReport>
    where
        F: FnMut(&str) -> Vec<FoodEntry>,
    {
        dates
            .iter()
            .map(|date| self.build_report(user, date, &entries_for(date)))
            .collect()
    }

    /// Flat (user, goal) records for the persistence layer.
    pub fn goal_records(&self) -> Vec<(String, NutritionGoal)> {
        self.goals
            .iter()
            .map(|(user, goal)| (user.clone(), goal.clone()))
            .collect()
    }
}
