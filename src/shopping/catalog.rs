use std::collections::HashMap;

use crate::models::{FoodEntry, Nutrients, RecipeComponent};

/// Fixed category list used for shopping-list display order.
///
/// Advisory only: unlisted categories are still accepted everywhere.
pub const CATEGORIES: [&str; 9] = [
    "Fruits",
    "Vegetables",
    "Meat",
    "Dairy",
    "Grains",
    "Spices",
    "Oils",
    "Sweeteners",
    "Other",
];

/// A fixed sample-catalog item with nutrients and a unit cost.
#[derive(Debug, Clone)]
pub struct CatalogFood {
    pub name: &'static str,

    /// Grams in one serving.
    pub serving_grams: f64,

    /// Calories in one serving.
    pub calories: f64,

    pub nutrients: Nutrients,

    /// Price of one serving.
    pub cost: f64,
}

impl CatalogFood {
    /// A log entry for one serving of this food.
    pub fn to_entry(&self) -> FoodEntry {
        FoodEntry::with_nutrients(
            self.name,
            self.serving_grams,
            self.calories,
            self.nutrients.clone(),
        )
    }
}

fn item(
    name: &'static str,
    serving_grams: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    cost: f64,
) -> CatalogFood {
    CatalogFood {
        name,
        serving_grams,
        calories,
        nutrients: Nutrients {
            protein,
            carbs,
            fat,
            ..Nutrients::default()
        },
        cost,
    }
}

/// Everyday single foods with per-serving nutrient data.
pub fn common_foods() -> Vec<CatalogFood> {
    vec![
        item("Apple", 100.0, 52.0, 0.3, 14.0, 0.2, 0.50),
        item("Banana", 118.0, 105.0, 1.3, 27.0, 0.4, 0.30),
        item("Egg", 50.0, 78.0, 6.3, 0.6, 5.3, 0.30),
        item("Milk", 100.0, 42.0, 3.4, 5.0, 1.0, 0.25),
        item("Chicken Breast", 100.0, 165.0, 31.0, 0.0, 3.6, 2.20),
        item("White Rice", 100.0, 130.0, 2.7, 28.0, 0.3, 0.40),
        item("Bread", 25.0, 66.0, 2.2, 12.0, 0.8, 0.20),
        item("Oats", 40.0, 150.0, 5.0, 27.0, 2.5, 0.35),
        item("Broccoli", 100.0, 34.0, 2.8, 7.0, 0.4, 0.60),
        item("Carrot", 60.0, 25.0, 0.6, 6.0, 0.1, 0.15),
        item("Salmon", 100.0, 208.0, 20.0, 0.0, 13.0, 3.50),
        item("Yogurt", 150.0, 90.0, 10.0, 6.0, 2.5, 0.90),
        item("Cheese", 30.0, 120.0, 7.0, 0.5, 10.0, 0.70),
        item("Peanut Butter", 32.0, 190.0, 8.0, 7.0, 16.0, 0.45),
    ]
}

/// Prepared breakfast dishes; most have a recipe in the builtin catalog.
pub fn breakfast_options() -> Vec<CatalogFood> {
    vec![
        item("Scrambled Eggs", 120.0, 200.0, 13.0, 2.0, 15.0, 1.10),
        item("Oatmeal", 240.0, 220.0, 6.0, 38.0, 4.0, 0.80),
        item("Pancakes", 150.0, 350.0, 8.0, 55.0, 10.0, 1.50),
        item("Fruit Smoothie", 300.0, 180.0, 5.0, 38.0, 1.5, 1.80),
    ]
}

/// Prepared lunch dishes.
pub fn lunch_options() -> Vec<CatalogFood> {
    vec![
        item("Chicken Salad", 280.0, 320.0, 35.0, 8.0, 16.0, 3.60),
        item("Turkey Sandwich", 200.0, 330.0, 22.0, 35.0, 11.0, 2.90),
        item("Vegetable Soup", 350.0, 140.0, 4.0, 24.0, 3.0, 1.60),
    ]
}

/// Prepared dinner dishes.
pub fn dinner_options() -> Vec<CatalogFood> {
    vec![
        item("Grilled Chicken", 250.0, 420.0, 52.0, 1.0, 22.0, 4.40),
        item("Spaghetti Bolognese", 400.0, 560.0, 28.0, 65.0, 20.0, 3.80),
        item("Baked Salmon", 220.0, 460.0, 40.0, 2.0, 32.0, 5.20),
        item("Vegetable Stir Fry", 350.0, 380.0, 9.0, 62.0, 11.0, 2.40),
    ]
}

/// Immutable lookup tables for shopping-list consolidation.
///
/// Built once at startup and passed by reference; never mutated afterwards.
/// All three tables are keyed by lowercase name.
#[derive(Debug)]
pub struct RecipeCatalog {
    /// Prepared food name -> per-serving ingredient components.
    recipes: HashMap<String, Vec<RecipeComponent>>,

    /// Ingredient or food name -> shopping category.
    categories: HashMap<String, String>,

    /// Ingredient name -> price per unit of its amount.
    prices: HashMap<String, f64>,
}

fn comp(name: &str, amount: f64, unit: &str, category: &str) -> RecipeComponent {
    RecipeComponent {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        category: category.to_string(),
    }
}

impl RecipeCatalog {
    /// The builtin recipe, category, and price tables.
    pub fn builtin() -> Self {
        let mut recipes = HashMap::new();

        let recipe_list: [(&str, Vec<RecipeComponent>); 11] = [
            (
                "Scrambled Eggs",
                vec![
                    comp("Eggs", 2.0, "unit", "Dairy"),
                    comp("Milk", 2.0, "tbsp", "Dairy"),
                    comp("Salt", 1.0, "pinch", "Spices"),
                ],
            ),
            (
                "Oatmeal",
                vec![
                    comp("Oats", 0.5, "cup", "Grains"),
                    comp("Milk", 1.0, "cup", "Dairy"),
                    comp("Honey", 1.0, "tbsp", "Sweeteners"),
                ],
            ),
            (
                "Pancakes",
                vec![
                    comp("Flour", 1.0, "cup", "Grains"),
                    comp("Milk", 1.0, "cup", "Dairy"),
                    comp("Eggs", 1.0, "unit", "Dairy"),
                    comp("Butter", 1.0, "tbsp", "Dairy"),
                    comp("Maple Syrup", 2.0, "tbsp", "Sweeteners"),
                ],
            ),
            (
                "Fruit Smoothie",
                vec![
                    comp("Banana", 1.0, "unit", "Fruits"),
                    comp("Strawberries", 0.5, "cup", "Fruits"),
                    comp("Yogurt", 0.5, "cup", "Dairy"),
                    comp("Honey", 1.0, "tsp", "Sweeteners"),
                ],
            ),
            (
                "Chicken Salad",
                vec![
                    comp("Chicken Breast", 150.0, "g", "Meat"),
                    comp("Lettuce", 1.0, "head", "Vegetables"),
                    comp("Tomato", 1.0, "unit", "Vegetables"),
                    comp("Olive Oil", 1.0, "tbsp", "Oils"),
                    comp("Salt", 1.0, "pinch", "Spices"),
                ],
            ),
            (
                "Turkey Sandwich",
                vec![
                    comp("Bread", 2.0, "slice", "Grains"),
                    comp("Turkey", 80.0, "g", "Meat"),
                    comp("Lettuce", 2.0, "leaf", "Vegetables"),
                    comp("Tomato", 0.5, "unit", "Vegetables"),
                ],
            ),
            (
                "Vegetable Soup",
                vec![
                    comp("Carrot", 2.0, "unit", "Vegetables"),
                    comp("Potato", 2.0, "unit", "Vegetables"),
                    comp("Onion", 1.0, "unit", "Vegetables"),
                    comp("Vegetable Stock", 4.0, "cup", "Other"),
                    comp("Salt", 1.0, "pinch", "Spices"),
                ],
            ),
            (
                "Grilled Chicken",
                vec![
                    comp("Chicken Breast", 200.0, "g", "Meat"),
                    comp("Olive Oil", 1.0, "tbsp", "Oils"),
                    comp("Black Pepper", 1.0, "pinch", "Spices"),
                ],
            ),
            (
                "Spaghetti Bolognese",
                vec![
                    comp("Spaghetti", 100.0, "g", "Grains"),
                    comp("Ground Beef", 150.0, "g", "Meat"),
                    comp("Tomato Sauce", 1.0, "cup", "Vegetables"),
                    comp("Onion", 1.0, "unit", "Vegetables"),
                ],
            ),
            (
                "Baked Salmon",
                vec![
                    comp("Salmon Fillet", 180.0, "g", "Meat"),
                    comp("Lemon", 0.5, "unit", "Fruits"),
                    comp("Olive Oil", 1.0, "tbsp", "Oils"),
                ],
            ),
            (
                "Vegetable Stir Fry",
                vec![
                    comp("Broccoli", 1.0, "cup", "Vegetables"),
                    comp("Carrot", 1.0, "unit", "Vegetables"),
                    comp("Bell Pepper", 1.0, "unit", "Vegetables"),
                    comp("Soy Sauce", 2.0, "tbsp", "Other"),
                    comp("White Rice", 1.0, "cup", "Grains"),
                ],
            ),
        ];

        for (name, components) in recipe_list {
            recipes.insert(name.to_lowercase(), components);
        }

        let categories = [
            ("Apple", "Fruits"),
            ("Banana", "Fruits"),
            ("Lemon", "Fruits"),
            ("Strawberries", "Fruits"),
            ("Broccoli", "Vegetables"),
            ("Carrot", "Vegetables"),
            ("Lettuce", "Vegetables"),
            ("Onion", "Vegetables"),
            ("Potato", "Vegetables"),
            ("Tomato", "Vegetables"),
            ("Bell Pepper", "Vegetables"),
            ("Chicken Breast", "Meat"),
            ("Ground Beef", "Meat"),
            ("Salmon", "Meat"),
            ("Salmon Fillet", "Meat"),
            ("Turkey", "Meat"),
            ("Butter", "Dairy"),
            ("Cheese", "Dairy"),
            ("Egg", "Dairy"),
            ("Eggs", "Dairy"),
            ("Milk", "Dairy"),
            ("Yogurt", "Dairy"),
            ("Bread", "Grains"),
            ("Flour", "Grains"),
            ("Oats", "Grains"),
            ("Spaghetti", "Grains"),
            ("White Rice", "Grains"),
            ("Black Pepper", "Spices"),
            ("Salt", "Spices"),
            ("Olive Oil", "Oils"),
            ("Honey", "Sweeteners"),
            ("Maple Syrup", "Sweeteners"),
            ("Peanut Butter", "Other"),
        ]
        .into_iter()
        .map(|(name, category)| (name.to_lowercase(), category.to_string()))
        .collect();

        let prices = [
            ("Eggs", 0.30),
            ("Milk", 0.12),
            ("Salt", 0.02),
            ("Black Pepper", 0.03),
            ("Oats", 0.45),
            ("Honey", 0.25),
            ("Flour", 0.30),
            ("Butter", 0.35),
            ("Maple Syrup", 0.40),
            ("Banana", 0.30),
            ("Strawberries", 1.20),
            ("Yogurt", 0.60),
            ("Chicken Breast", 0.011),
            ("Lettuce", 1.10),
            ("Tomato", 0.45),
            ("Olive Oil", 0.30),
            ("Bread", 0.20),
            ("Turkey", 0.014),
            ("Carrot", 0.15),
            ("Potato", 0.25),
            ("Onion", 0.30),
            ("Vegetable Stock", 0.50),
            ("Spaghetti", 0.004),
            ("Ground Beef", 0.012),
            ("Tomato Sauce", 0.90),
            ("Salmon Fillet", 0.028),
            ("Lemon", 0.40),
            ("Broccoli", 0.80),
            ("Bell Pepper", 0.70),
            ("Soy Sauce", 0.10),
            ("White Rice", 0.60),
        ]
        .into_iter()
        .map(|(name, price)| (name.to_lowercase(), price))
        .collect();

        Self {
            recipes,
            categories,
            prices,
        }
    }

    /// Per-serving components for a prepared food (case-insensitive).
    pub fn recipe(&self, food: &str) -> Option<&[RecipeComponent]> {
        self.recipes.get(&food.to_lowercase()).map(Vec::as_slice)
    }

    /// Shopping category for a name (case-insensitive).
    pub fn category_for(&self, name: &str) -> Option<&str> {
        self.categories.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Price for one unit of an ingredient's amount (case-insensitive).
    pub fn unit_price(&self, name: &str) -> Option<f64> {
        self.prices.get(&name.to_lowercase()).copied()
    }

    /// Number of prepared foods with a recipe.
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_lookup_is_case_insensitive() {
        let catalog = RecipeCatalog::builtin();
        assert!(catalog.recipe("scrambled eggs").is_some());
        assert!(catalog.recipe("SCRAMBLED EGGS").is_some());
        assert!(catalog.recipe("ratatouille").is_none());
    }

    #[test]
    fn test_scrambled_eggs_recipe() {
        let catalog = RecipeCatalog::builtin();
        let components = catalog.recipe("Scrambled Eggs").unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].name, "Eggs");
        assert_eq!(components[0].amount, 2.0);
        assert_eq!(components[0].unit, "unit");
    }

    #[test]
    fn test_recipe_components_use_known_categories() {
        let catalog = RecipeCatalog::builtin();
        let recipes = [
            "Scrambled Eggs",
            "Oatmeal",
            "Pancakes",
            "Fruit Smoothie",
            "Chicken Salad",
            "Turkey Sandwich",
            "Vegetable Soup",
            "Grilled Chicken",
            "Spaghetti Bolognese",
            "Baked Salmon",
            "Vegetable Stir Fry",
        ];
        for name in recipes {
            for component in catalog.recipe(name).unwrap() {
                assert!(
                    CATEGORIES.contains(&component.category.as_str()),
                    "{} has unlisted category {}",
                    component.name,
                    component.category
                );
            }
        }
    }

    #[test]
    fn test_catalog_foods_are_valid_entries() {
        for food in common_foods()
            .iter()
            .chain(breakfast_options().iter())
            .chain(lunch_options().iter())
            .chain(dinner_options().iter())
        {
            assert!(food.to_entry().is_valid(), "{} is invalid", food.name);
        }
    }
}
