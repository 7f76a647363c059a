use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A raw shopping-list ingredient.
///
/// Two ingredients merge only when both name and unit match exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub amount: f64,

    /// Unit of measure ("unit", "tbsp", "cup", "g", ...).
    pub unit: String,

    pub category: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Consolidation key: exact name + unit.
    pub fn merge_key(&self) -> (String, String) {
        (self.name.clone(), self.unit.clone())
    }
}

/// One component of a fixed per-serving recipe.
#[derive(Debug, Clone)]
pub struct RecipeComponent {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

impl RecipeComponent {
    /// Emit this component as a fresh shopping-list ingredient.
    pub fn to_ingredient(&self) -> Ingredient {
        Ingredient::new(&self.name, self.amount, &self.unit, &self.category)
    }
}

/// Which meal of the day a planned food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meals in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
