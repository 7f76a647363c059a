use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};
use crate::models::{FoodEntry, MealType, Nutrients, NutritionGoal};
use crate::nutrition::constants::ACTIVITY_NAMES;
use crate::shopping::catalog::CatalogFood;

/// Body data collected for a calorie suggestion.
#[derive(Debug, Clone)]
pub struct Profile {
    pub gender: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: u8,
}

fn parse_f64(input: &str) -> Result<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Not a number: {input}")))
}

fn parse_u32(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Not a whole number: {input}")))
}

/// Resolve a typed name against the catalog.
///
/// Exact case-insensitive match first, then jaro-winkler candidates above
/// 0.7 with a confirm (single hit) or a top-5 selection (several hits).
fn resolve_catalog_food<'a>(
    catalog: &'a [CatalogFood],
    input: &str,
) -> Result<Option<&'a CatalogFood>> {
    let exact = catalog
        .iter()
        .find(|f| f.name.to_lowercase() == input.to_lowercase());

    if let Some(food) = exact {
        return Ok(Some(food));
    }

    let mut candidates: Vec<(&CatalogFood, f64)> = catalog
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(food) } else { None });
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(f, _)| f.name.to_string())
        .collect();
    let real_options = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection < real_options {
        Some(candidates[selection].0)
    } else {
        None
    })
}

/// Prompt for a serving count (default 1).
fn prompt_servings() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("How many servings?")
        .default("1".to_string())
        .interact_text()?;

    let servings = parse_f64(&input)?;
    if servings <= 0.0 {
        return Err(DietError::InvalidInput(
            "Servings must be positive".to_string(),
        ));
    }
    Ok(servings)
}

/// Prompt for a custom food the catalog does not know.
fn prompt_custom_entry(name: &str) -> Result<FoodEntry> {
    let grams: String = Input::new()
        .with_prompt("Amount in grams")
        .default("100".to_string())
        .interact_text()?;
    let grams = parse_f64(&grams)?;

    let calories: String = Input::new().with_prompt("Calories").interact_text()?;
    let calories = parse_f64(&calories)?;

    let detailed = Confirm::new()
        .with_prompt("Add nutrient details?")
        .default(false)
        .interact()?;

    if !detailed {
        return Ok(FoodEntry::basic(name, grams, calories));
    }

    let mut values = [0.0; 6];
    let fields = [
        "Protein (g)",
        "Carbs (g)",
        "Fat (g)",
        "Fiber (g)",
        "Sugar (g)",
        "Sodium (mg)",
    ];
    for (value, field) in values.iter_mut().zip(fields) {
        let input: String = Input::new()
            .with_prompt(field)
            .default("0".to_string())
            .interact_text()?;
        *value = parse_f64(&input)?;
    }

    Ok(FoodEntry::with_nutrients(
        name,
        grams,
        calories,
        Nutrients {
            protein: values[0],
            carbs: values[1],
            fat: values[2],
            fiber: values[3],
            sugar: values[4],
            sodium: values[5],
        },
    ))
}

/// Collect food entries until the user enters an empty name.
///
/// Catalog matches are scaled by a serving count; unknown names fall back
/// to a custom entry.
pub fn collect_food_entries(catalog: &[CatalogFood]) -> Result<Vec<FoodEntry>> {
    let mut entries = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Food name (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        match resolve_catalog_food(catalog, input)? {
            Some(food) => {
                let servings = prompt_servings()?;
                let entry = food.to_entry().scaled(servings);
                println!(
                    "Added: {} ({:.0} g, {:.0} cal)",
                    entry.name, entry.grams, entry.calories
                );
                entries.push(entry);
            }
            None => {
                let custom = Confirm::new()
                    .with_prompt(format!("'{input}' is not in the catalog. Enter it manually?"))
                    .default(true)
                    .interact()?;

                if custom {
                    let entry = prompt_custom_entry(input)?;
                    println!("Added: {} ({:.0} cal)", entry.name, entry.calories);
                    entries.push(entry);
                }
            }
        }
    }

    Ok(entries)
}

/// Prompt for daily nutrition targets.
pub fn prompt_goal() -> Result<NutritionGoal> {
    let defaults = NutritionGoal::default();

    let calories: String = Input::new()
        .with_prompt("Daily calorie goal (kcal)")
        .default(defaults.calories.to_string())
        .interact_text()?;
    let calories = parse_u32(&calories)?;
    if calories == 0 {
        return Err(DietError::InvalidInput(
            "Calorie goal must be positive".to_string(),
        ));
    }

    let mut values = [defaults.protein, defaults.carbs, defaults.fat];
    let fields = ["Protein goal (g)", "Carb goal (g)", "Fat goal (g)"];
    for (value, field) in values.iter_mut().zip(fields) {
        let input: String = Input::new()
            .with_prompt(field)
            .default(format!("{value}"))
            .interact_text()?;
        *value = parse_f64(&input)?;
        if *value <= 0.0 {
            return Err(DietError::InvalidInput(format!(
                "{field} must be positive"
            )));
        }
    }

    Ok(NutritionGoal {
        calories,
        protein: values[0],
        carbs: values[1],
        fat: values[2],
    })
}

/// Prompt for the body data the calorie suggestion needs.
pub fn prompt_profile() -> Result<Profile> {
    let gender_options = ["Male", "Female"];
    let gender = Select::new()
        .with_prompt("Gender")
        .items(&gender_options)
        .default(0)
        .interact()?;

    let age: String = Input::new().with_prompt("Age (years)").interact_text()?;
    let age = parse_u32(&age)?;

    let height: String = Input::new().with_prompt("Height (cm)").interact_text()?;
    let height_cm = parse_f64(&height)?;

    let weight: String = Input::new().with_prompt("Weight (kg)").interact_text()?;
    let weight_kg = parse_f64(&weight)?;

    let activity = Select::new()
        .with_prompt("Activity level")
        .items(&ACTIVITY_NAMES)
        .default(0)
        .interact()?;

    Ok(Profile {
        gender: gender_options[gender].to_string(),
        age,
        height_cm,
        weight_kg,
        activity_level: (activity + 1) as u8,
    })
}

/// Prompt for which meal a plan entry belongs to.
pub fn prompt_meal_type() -> Result<MealType> {
    let labels: Vec<&str> = MealType::ALL.iter().map(MealType::label).collect();

    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MealType::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
