use std::collections::HashMap;

use crate::models::{FoodEntry, Ingredient};
use crate::shopping::catalog::RecipeCatalog;

/// Expand planned foods into raw ingredients via the recipe table.
///
/// Recipe amounts are per serving of the prepared food; the logged quantity
/// does not scale them. Foods without a recipe become a single placeholder
/// ingredient of one "serving".
pub fn expand(catalog: &RecipeCatalog, foods: &[FoodEntry]) -> Vec<Ingredient> {
    let mut out = Vec::new();

    for food in foods {
        match catalog.recipe(&food.name) {
            Some(components) => out.extend(components.iter().map(|c| c.to_ingredient())),
            None => {
                let category = catalog.category_for(&food.name).unwrap_or("Other");
                out.push(Ingredient::new(&food.name, 1.0, "serving", category));
            }
        }
    }

    out
}

/// Merge duplicates by exact (name, unit) key, summing amounts.
///
/// The first ingredient seen for a key supplies the category. Output order
/// is unspecified.
pub fn merge(ingredients: &[Ingredient]) -> Vec<Ingredient> {
    let mut merged: HashMap<(String, String), Ingredient> = HashMap::new();

    for ingredient in ingredients {
        merged
            .entry(ingredient.merge_key())
            .and_modify(|m| m.amount += ingredient.amount)
            .or_insert_with(|| ingredient.clone());
    }

    merged.into_values().collect()
}

/// Partition ingredients by category.
///
/// Categories outside the fixed display list still get their own group; the
/// list only drives rendering order.
pub fn categorize(ingredients: &[Ingredient]) -> HashMap<String, Vec<Ingredient>> {
    let mut groups: HashMap<String, Vec<Ingredient>> = HashMap::new();

    for ingredient in ingredients {
        groups
            .entry(ingredient.category.clone())
            .or_default()
            .push(ingredient.clone());
    }

    groups
}

/// Total price of a list; unpriced ingredients cost nothing.
pub fn total_cost(catalog: &RecipeCatalog, ingredients: &[Ingredient]) -> f64 {
    ingredients
        .iter()
        .map(|i| i.amount * catalog.unit_price(&i.name).unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("Eggs", 2.0, "unit", "Dairy"),
            Ingredient::new("Milk", 2.0, "tbsp", "Dairy"),
            Ingredient::new("Eggs", 1.0, "unit", "Dairy"),
            Ingredient::new("Milk", 1.0, "cup", "Dairy"),
        ]
    }

    fn amount_of(list: &[Ingredient], name: &str, unit: &str) -> f64 {
        list.iter()
            .find(|i| i.name == name && i.unit == unit)
            .map(|i| i.amount)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_merge_sums_same_name_and_unit() {
        let merged = merge(&sample_ingredients());
        assert_eq!(merged.len(), 3);
        assert!((amount_of(&merged, "Eggs", "unit") - 3.0).abs() < 1e-9);
        assert!((amount_of(&merged, "Milk", "tbsp") - 2.0).abs() < 1e-9);
        // Different unit stays separate.
        assert!((amount_of(&merged, "Milk", "cup") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_keeps_first_category() {
        let mixed = vec![
            Ingredient::new("Honey", 1.0, "tbsp", "Sweeteners"),
            Ingredient::new("Honey", 2.0, "tbsp", "Other"),
        ];
        let merged = merge(&mixed);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].category, "Sweeteners");
        assert!((merged[0].amount - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_categorize_accepts_unlisted_categories() {
        let list = vec![
            Ingredient::new("Eggs", 2.0, "unit", "Dairy"),
            Ingredient::new("Tofu", 1.0, "block", "Plant Protein"),
        ];
        let groups = categorize(&list);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Plant Protein"].len(), 1);
    }

    #[test]
    fn test_expand_unknown_food_synthesizes_serving() {
        let catalog = RecipeCatalog::builtin();
        let foods = vec![FoodEntry::basic("Dragonfruit Tart", 120.0, 310.0)];

        let expanded = expand(&catalog, &foods);
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].name, "Dragonfruit Tart");
        assert_eq!(expanded[0].unit, "serving");
        assert!((expanded[0].amount - 1.0).abs() < 1e-9);
        assert_eq!(expanded[0].category, "Other");
    }

    #[test]
    fn test_expand_unknown_food_uses_category_table() {
        let catalog = RecipeCatalog::builtin();
        let foods = vec![FoodEntry::basic("Apple", 100.0, 52.0)];

        let expanded = expand(&catalog, &foods);
        assert_eq!(expanded[0].category, "Fruits");
    }

    #[test]
    fn test_total_cost_skips_unpriced() {
        let catalog = RecipeCatalog::builtin();
        let list = vec![
            Ingredient::new("Eggs", 2.0, "unit", "Dairy"),
            Ingredient::new("Moon Dust", 5.0, "g", "Other"),
        ];

        let eggs_price = catalog.unit_price("Eggs").unwrap();
        let cost = total_cost(&catalog, &list);
        assert!((cost - 2.0 * eggs_price).abs() < 1e-9);
    }
}
