use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::NutritionGoal;
use crate::state::{LogRecord, PlanRecord};

/// Flat persisted record of one user's goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecord {
    pub user: String,
    pub goal: NutritionGoal,
}

/// On-disk journal document.
///
/// Flat record lists only; the in-memory maps are rebuilt on load.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JournalFile {
    #[serde(default)]
    pub logs: Vec<LogRecord>,

    #[serde(default)]
    pub plans: Vec<PlanRecord>,

    #[serde(default)]
    pub goals: Vec<GoalRecord>,
}

/// Load the journal from a JSON file.
///
/// A missing file is an empty journal, not an error.
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<JournalFile> {
    if !path.as_ref().exists() {
        return Ok(JournalFile::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the journal to a JSON file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &JournalFile) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write log records to a CSV file, one row per logged entry.
pub fn write_log_csv<P: AsRef<Path>>(path: P, records: &[LogRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date", "name", "grams", "calories", "protein", "carbs", "fat", "fiber", "sugar",
        "sodium",
    ])?;

    for record in records {
        let entry = &record.entry;
        wtr.write_record([
            record.date.clone(),
            entry.name.clone(),
            format!("{:.1}", entry.grams),
            format!("{:.1}", entry.calories),
            format!("{:.2}", entry.protein()),
            format!("{:.2}", entry.carbs()),
            format!("{:.2}", entry.fat()),
            format!("{:.2}", entry.fiber()),
            format!("{:.2}", entry.sugar()),
            format!("{:.2}", entry.sodium()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodEntry, MealType};
    use tempfile::NamedTempFile;

    fn sample_journal() -> JournalFile {
        JournalFile {
            logs: vec![LogRecord {
                user: "ana".to_string(),
                date: "2025-06-01".to_string(),
                entry: FoodEntry::basic("Apple", 100.0, 52.0),
            }],
            plans: vec![PlanRecord {
                user: "ana".to_string(),
                date: "2025-06-02".to_string(),
                meal: MealType::Breakfast,
                entry: FoodEntry::basic("Oatmeal", 240.0, 220.0),
            }],
            goals: vec![GoalRecord {
                user: "ana".to_string(),
                goal: NutritionGoal {
                    calories: 1800,
                    protein: 90.0,
                    carbs: 180.0,
                    fat: 60.0,
                },
            }],
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let file = NamedTempFile::new().unwrap();
        save_journal(file.path(), &sample_journal()).unwrap();

        let loaded = load_journal(file.path()).unwrap();
        assert_eq!(loaded.logs.len(), 1);
        assert_eq!(loaded.logs[0].entry.name, "Apple");
        assert_eq!(loaded.plans[0].meal, MealType::Breakfast);
        assert_eq!(loaded.goals[0].goal.calories, 1800);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let journal = load_journal("does_not_exist.json").unwrap();
        assert!(journal.logs.is_empty());
        assert!(journal.plans.is_empty());
        assert!(journal.goals.is_empty());
    }

    #[test]
    fn test_write_log_csv() {
        let file = NamedTempFile::new().unwrap();
        write_log_csv(file.path(), &sample_journal().logs).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("date,name,grams"));
        assert!(lines.next().unwrap().starts_with("2025-06-01,Apple,100.0,52.0"));
    }
}
