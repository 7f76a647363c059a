use std::collections::HashMap;

use crate::models::{Ingredient, NutritionReport};
use crate::nutrition::energy::MacroSplit;
use crate::shopping::catalog::{CATEGORIES, CatalogFood};

/// Display a single-day nutrition report.
pub fn display_report(report: &NutritionReport) {
    println!();
    println!("=== Nutrition Report for {} ===", report.date);
    println!();

    println!(
        "Calories {:>8.0} / {:<6} ({:.1}%)",
        report.total_calories, report.goal.calories, report.calorie_pct
    );
    println!(
        "Protein  {:>8.1} / {:<6.0} ({:.1}%)",
        report.total_protein, report.goal.protein, report.protein_pct
    );
    println!(
        "Carbs    {:>8.1} / {:<6.0} ({:.1}%)",
        report.total_carbs, report.goal.carbs, report.carb_pct
    );
    println!(
        "Fat      {:>8.1} / {:<6.0} ({:.1}%)",
        report.total_fat, report.goal.fat, report.fat_pct
    );

    println!();
    println!("Fiber  {:>6.1} g", report.total_fiber);
    println!("Sugar  {:>6.1} g", report.total_sugar);
    println!("Sodium {:>6.0} mg", report.total_sodium);
    println!();
}

/// Display one line per day of a weekly report.
pub fn display_weekly(reports: &[NutritionReport]) {
    if reports.is_empty() {
        println!("No reports to display.");
        return;
    }

    println!();
    println!("=== Weekly Report ===");
    println!();
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "Date", "Cal", "Protein", "Carbs", "Fat", "Cal %"
    );

    for report in reports {
        println!(
            "{:<12} {:>8.0} {:>8.1} {:>8.1} {:>8.1} {:>6.1}%",
            report.date,
            report.total_calories,
            report.total_protein,
            report.total_carbs,
            report.total_fat,
            report.calorie_pct
        );
    }

    let avg_cal: f64 =
        reports.iter().map(|r| r.total_calories).sum::<f64>() / reports.len() as f64;

    println!();
    println!("--- Summary ---");
    println!("Days: {}", reports.len());
    println!("Average calories: {avg_cal:.0}");
    println!();
}

/// Display a consolidated shopping list grouped by category.
///
/// Fixed categories render first in their canonical order, then any extra
/// categories sorted by name.
pub fn display_shopping_list(groups: &HashMap<String, Vec<Ingredient>>, total_cost: f64) {
    if groups.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    let mut extra: Vec<&String> = groups
        .keys()
        .filter(|c| !CATEGORIES.contains(&c.as_str()))
        .collect();
    extra.sort();

    let ordered = CATEGORIES
        .iter()
        .filter_map(|c| groups.get_key_value(*c))
        .chain(extra.into_iter().filter_map(|c| groups.get_key_value(c)));

    for (category, ingredients) in ordered {
        println!();
        println!("{category}:");
        for ingredient in ingredients {
            println!(
                "  {:>6.1} {:<8} {}",
                ingredient.amount, ingredient.unit, ingredient.name
            );
        }
    }

    println!();
    println!("--- Summary ---");
    let item_count: usize = groups.values().map(Vec::len).sum();
    println!("Items: {item_count}");
    println!("Estimated cost: ${total_cost:.2}");
    println!();
}

/// Display a fixed food catalog.
pub fn display_catalog(title: &str, foods: &[CatalogFood]) {
    if foods.is_empty() {
        println!("{title}: (none)");
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$} {:>5.0} g {:>5.0} cal  P:{:<5.1} C:{:<5.1} F:{:<5.1} ${:.2}",
            food.name,
            food.serving_grams,
            food.calories,
            food.nutrients.protein,
            food.nutrients.carbs,
            food.nutrients.fat,
            food.cost,
            width = max_name_len
        );
    }

    println!();
}

/// Display a calorie suggestion with its macro split.
pub fn display_suggestion(calories: u32, split: &MacroSplit) {
    println!();
    println!("=== Suggested Daily Targets ===");
    println!();
    println!("Calories: {calories} kcal");
    println!("Protein:  {:.0} g", split.protein);
    println!("Carbs:    {:.0} g", split.carbs);
    println!("Fat:      {:.0} g", split.fat);
    println!();
}
