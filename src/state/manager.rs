use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, MealType};

/// Flat persisted record of one logged food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub user: String,
    pub date: String,
    pub entry: FoodEntry,
}

/// Flat persisted record of one planned food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecord {
    pub user: String,
    pub date: String,
    pub meal: MealType,
    pub entry: FoodEntry,
}

/// Owns every logged and planned entry, keyed by composite keys.
///
/// The on-disk format is flat record lists; the maps are rebuilt on load.
#[derive(Debug, Default)]
pub struct JournalManager {
    /// (user, date) -> logged entries in log order.
    logs: HashMap<(String, String), Vec<FoodEntry>>,

    /// (user, date, meal) -> planned entries in plan order.
    plans: HashMap<(String, String, MealType), Vec<FoodEntry>>,
}

impl JournalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the composite-key maps from flat records.
    pub fn from_records(logs: Vec<LogRecord>, plans: Vec<PlanRecord>) -> Self {
        let mut manager = Self::new();
        for record in logs {
            manager.log_food(&record.user, &record.date, record.entry);
        }
        for record in plans {
            manager.plan_meal(&record.user, &record.date, record.meal, record.entry);
        }
        manager
    }

    /// Append a food to a user's log for a date.
    pub fn log_food(&mut self, user: &str, date: &str, entry: FoodEntry) {
        self.logs
            .entry((user.to_string(), date.to_string()))
            .or_default()
            .push(entry);
    }

    /// All entries logged by a user on a date; empty when none.
    pub fn food_log(&self, user: &str, date: &str) -> &[FoodEntry] {
        self.logs
            .get(&(user.to_string(), date.to_string()))
            .map_or(&[], Vec::as_slice)
    }

    /// Drop a user's log for a date, returning how many entries it held.
    pub fn clear_log(&mut self, user: &str, date: &str) -> usize {
        self.logs
            .remove(&(user.to_string(), date.to_string()))
            .map_or(0, |entries| entries.len())
    }

    /// Append a food to a user's meal plan.
    pub fn plan_meal(&mut self, user: &str, date: &str, meal: MealType, entry: FoodEntry) {
        self.plans
            .entry((user.to_string(), date.to_string(), meal))
            .or_default()
            .push(entry);
    }

    /// Planned entries for one meal of a date; empty when none.
    pub fn meal_plan(&self, user: &str, date: &str, meal: MealType) -> &[FoodEntry] {
        self.plans
            .get(&(user.to_string(), date.to_string(), meal))
            .map_or(&[], Vec::as_slice)
    }

    /// Every planned entry for a date, in meal order (breakfast first).
    pub fn planned_for_date(&self, user: &str, date: &str) -> Vec<FoodEntry> {
        MealType::ALL
            .iter()
            .flat_map(|meal| self.meal_plan(user, date, *meal))
            .cloned()
            .collect()
    }

    /// Dates a user has logged on, sorted ascending.
    pub fn logged_dates(&self, user: &str) -> Vec<String> {
        let mut dates: Vec<String> = self
            .logs
            .keys()
            .filter(|(u, _)| u == user)
            .map(|(_, date)| date.clone())
            .collect();
        dates.sort();
        dates
    }

    /// One user's log as flat records, sorted by date.
    pub fn user_log_records(&self, user: &str) -> Vec<LogRecord> {
        let mut records: Vec<LogRecord> = Vec::new();
        for date in self.logged_dates(user) {
            for entry in self.food_log(user, &date) {
                records.push(LogRecord {
                    user: user.to_string(),
                    date: date.clone(),
                    entry: entry.clone(),
                });
            }
        }
        records
    }

    /// Every log as flat records for serialization.
    pub fn log_records(&self) -> Vec<LogRecord> {
        let mut records: Vec<LogRecord> = self
            .logs
            .iter()
            .flat_map(|((user, date), entries)| {
                entries.iter().map(|entry| LogRecord {
                    user: user.clone(),
                    date: date.clone(),
                    entry: entry.clone(),
                })
            })
            .collect();
        records.sort_by(|a, b| (&a.user, &a.date).cmp(&(&b.user, &b.date)));
        records
    }

    /// Every plan as flat records for serialization.
    pub fn plan_records(&self) -> Vec<PlanRecord> {
        let mut records: Vec<PlanRecord> = self
            .plans
            .iter()
            .flat_map(|((user, date, meal), entries)| {
                entries.iter().map(|entry| PlanRecord {
                    user: user.clone(),
                    date: date.clone(),
                    meal: *meal,
                    entry: entry.clone(),
                })
            })
            .collect();
        records.sort_by(|a, b| (&a.user, &a.date, a.meal as u8).cmp(&(&b.user, &b.date, b.meal as u8)));
        records
    }

    /// Number of distinct (user, date) log keys.
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty() && self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_log_empty_for_unknown_key() {
        let manager = JournalManager::new();
        assert!(manager.food_log("ana", "2025-06-01").is_empty());
    }

    #[test]
    fn test_log_food_appends_per_user_and_date() {
        let mut manager = JournalManager::new();
        manager.log_food("ana", "2025-06-01", FoodEntry::basic("Apple", 100.0, 52.0));
        manager.log_food("ana", "2025-06-01", FoodEntry::basic("Egg", 50.0, 78.0));
        manager.log_food("ana", "2025-06-02", FoodEntry::basic("Milk", 100.0, 42.0));
        manager.log_food("bo", "2025-06-01", FoodEntry::basic("Bread", 25.0, 66.0));

        assert_eq!(manager.food_log("ana", "2025-06-01").len(), 2);
        assert_eq!(manager.food_log("ana", "2025-06-02").len(), 1);
        assert_eq!(manager.food_log("bo", "2025-06-01").len(), 1);
    }

    #[test]
    fn test_planned_for_date_is_in_meal_order() {
        let mut manager = JournalManager::new();
        manager.plan_meal(
            "ana",
            "2025-06-01",
            MealType::Dinner,
            FoodEntry::basic("Baked Salmon", 220.0, 460.0),
        );
        manager.plan_meal(
            "ana",
            "2025-06-01",
            MealType::Breakfast,
            FoodEntry::basic("Oatmeal", 240.0, 220.0),
        );

        let planned = manager.planned_for_date("ana", "2025-06-01");
        assert_eq!(planned.len(), 2);
        assert_eq!(planned[0].name, "Oatmeal");
        assert_eq!(planned[1].name, "Baked Salmon");
    }

    #[test]
    fn test_records_round_trip() {
        let mut manager = JournalManager::new();
        manager.log_food("ana", "2025-06-02", FoodEntry::basic("Milk", 100.0, 42.0));
        manager.log_food("ana", "2025-06-01", FoodEntry::basic("Apple", 100.0, 52.0));
        manager.plan_meal(
            "ana",
            "2025-06-03",
            MealType::Lunch,
            FoodEntry::basic("Chicken Salad", 280.0, 320.0),
        );

        let rebuilt = JournalManager::from_records(manager.log_records(), manager.plan_records());
        assert_eq!(rebuilt.food_log("ana", "2025-06-01").len(), 1);
        assert_eq!(rebuilt.food_log("ana", "2025-06-02").len(), 1);
        assert_eq!(
            rebuilt.meal_plan("ana", "2025-06-03", MealType::Lunch).len(),
            1
        );
    }

    #[test]
    fn test_clear_log() {
        let mut manager = JournalManager::new();
        manager.log_food("ana", "2025-06-01", FoodEntry::basic("Apple", 100.0, 52.0));
        assert_eq!(manager.clear_log("ana", "2025-06-01"), 1);
        assert!(manager.food_log("ana", "2025-06-01").is_empty());
        assert_eq!(manager.clear_log("ana", "2025-06-01"), 0);
    }
}
