use serde::{Deserialize, Serialize};

/// Detailed nutrient breakdown for a food.
///
/// All values are grams, except sodium which is milligrams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub carbs: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub fiber: f64,

    #[serde(default)]
    pub sugar: f64,

    #[serde(default)]
    pub sodium: f64,
}

impl Nutrients {
    /// Multiply every field by a factor (e.g. number of servings).
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
        }
    }

    /// Basic validation: no negative values.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
            && self.fiber >= 0.0
            && self.sugar >= 0.0
            && self.sodium >= 0.0
    }
}

/// A single logged or planned food: what was eaten, how much, its calories.
///
/// The nutrient breakdown is optional. Entries without one contribute only
/// to the calorie total of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    pub grams: f64,

    pub calories: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Nutrients>,
}

impl FoodEntry {
    /// An entry with calorie data only.
    pub fn basic(name: impl Into<String>, grams: f64, calories: f64) -> Self {
        Self {
            name: name.into(),
            grams,
            calories,
            nutrients: None,
        }
    }

    /// An entry with a full nutrient breakdown.
    pub fn with_nutrients(
        name: impl Into<String>,
        grams: f64,
        calories: f64,
        nutrients: Nutrients,
    ) -> Self {
        Self {
            name: name.into(),
            grams,
            calories,
            nutrients: Some(nutrients),
        }
    }

    /// Scale the entry by a serving count.
    pub fn scaled(&self, servings: f64) -> Self {
        Self {
            name: self.name.clone(),
            grams: self.grams * servings,
            calories: self.calories * servings,
            nutrients: self.nutrients.as_ref().map(|n| n.scale(servings)),
        }
    }

    pub fn protein(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.protein)
    }

    pub fn carbs(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.carbs)
    }

    pub fn fat(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.fat)
    }

    pub fn fiber(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.fiber)
    }

    pub fn sugar(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.sugar)
    }

    pub fn sodium(&self) -> f64 {
        self.nutrients.as_ref().map_or(0.0, |n| n.sodium)
    }

    /// Basic validation: non-empty name, positive amount, non-negative rest.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.grams > 0.0
            && self.calories >= 0.0
            && self.nutrients.as_ref().is_none_or(Nutrients::is_valid)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> FoodEntry {
        FoodEntry::with_nutrients(
            "Apple",
            100.0,
            52.0,
            Nutrients {
                protein: 0.3,
                carbs: 14.0,
                fat: 0.2,
                fiber: 2.4,
                sugar: 10.3,
                sodium: 1.0,
            },
        )
    }

    #[test]
    fn test_accessors_default_to_zero_without_nutrients() {
        let entry = FoodEntry::basic("Mystery Bar", 40.0, 180.0);
        assert_eq!(entry.protein(), 0.0);
        assert_eq!(entry.carbs(), 0.0);
        assert_eq!(entry.fat(), 0.0);
        assert_eq!(entry.fiber(), 0.0);
        assert_eq!(entry.sugar(), 0.0);
        assert_eq!(entry.sodium(), 0.0);
    }

    #[test]
    fn test_scaled_multiplies_everything() {
        let doubled = sample_entry().scaled(2.0);
        assert!((doubled.grams - 200.0).abs() < 1e-9);
        assert!((doubled.calories - 104.0).abs() < 1e-9);
        assert!((doubled.carbs() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_entry().is_valid());

        let mut invalid = sample_entry();
        invalid.grams = 0.0;
        assert!(!invalid.is_valid());

        let mut negative = sample_entry();
        negative.nutrients.as_mut().unwrap().protein = -1.0;
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_key_is_lowercase() {
        assert_eq!(sample_entry().key(), "apple");
    }

    #[test]
    fn test_nutrients_round_trip_missing_fields() {
        let partial: Nutrients = serde_json::from_str(r#"{"protein": 6.3, "carbs": 0.6}"#).unwrap();
        assert_eq!(partial.protein, 6.3);
        assert_eq!(partial.fat, 0.0);
        assert_eq!(partial.sodium, 0.0);
    }
}
