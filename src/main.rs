use chrono::{Duration, Local, NaiveDate};
use clap::Parser;

use diet_journal_rs::cli::{Cli, Command};
use diet_journal_rs::error::Result;
use diet_journal_rs::interface::{
    collect_food_entries, display_catalog, display_report, display_shopping_list,
    display_suggestion, display_weekly, prompt_goal, prompt_meal_type, prompt_profile,
    prompt_yes_no,
};
use diet_journal_rs::models::{MealType, NutritionGoal};
use diet_journal_rs::nutrition::{NutritionAggregator, suggested_calories, suggested_macros};
use diet_journal_rs::shopping::{
    CatalogFood, RecipeCatalog, breakfast_options, categorize, common_foods, dinner_options,
    expand, lunch_options, merge, total_cost,
};
use diet_journal_rs::state::{
    GoalRecord, JournalFile, JournalManager, load_journal, save_journal, write_log_csv,
};

const DATE_FMT: &str = "%Y-%m-%d";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Log { date } => cmd_log(&cli.file, &cli.user, date),
        Command::Report { date } => cmd_report(&cli.file, &cli.user, date),
        Command::Week { end } => cmd_week(&cli.file, &cli.user, end),
        Command::Goals { show } => cmd_goals(&cli.file, &cli.user, show),
        Command::Suggest => cmd_suggest(&cli.file, &cli.user),
        Command::Plan { date, meal } => cmd_plan(&cli.file, &cli.user, date, meal),
        Command::Shopping { date } => cmd_shopping(&cli.file, &cli.user, date),
        Command::Export { out } => cmd_export(&cli.file, &cli.user, &out),
        Command::Catalog => cmd_catalog(),
    }
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FMT).to_string()
}

/// Validate a date argument, defaulting to today.
fn resolve_date(arg: Option<String>) -> Result<String> {
    match arg {
        Some(date) => {
            NaiveDate::parse_from_str(&date, DATE_FMT)?;
            Ok(date)
        }
        None => Ok(today()),
    }
}

/// The 7 consecutive dates ending at `end`, oldest first.
fn week_dates(end: &str) -> Result<Vec<String>> {
    let end = NaiveDate::parse_from_str(end, DATE_FMT)?;
    Ok((0..7)
        .rev()
        .map(|i| (end - Duration::days(i)).format(DATE_FMT).to_string())
        .collect())
}

fn load_app(path: &str) -> Result<(JournalManager, NutritionAggregator)> {
    let journal = load_journal(path)?;
    let manager = JournalManager::from_records(journal.logs, journal.plans);
    let aggregator =
        NutritionAggregator::from_goals(journal.goals.into_iter().map(|g| (g.user, g.goal)));
    Ok((manager, aggregator))
}

fn save_app(path: &str, manager: &JournalManager, aggregator: &NutritionAggregator) -> Result<()> {
    let journal = JournalFile {
        logs: manager.log_records(),
        plans: manager.plan_records(),
        goals: aggregator
            .goal_records()
            .into_iter()
            .map(|(user, goal)| GoalRecord { user, goal })
            .collect(),
    };
    save_journal(path, &journal)
}

/// Interactively log foods for a date, then show the updated report.
fn cmd_log(file_path: &str, user: &str, date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let (mut manager, aggregator) = load_app(file_path)?;

    println!("Logging foods for {} on {}", user, date);
    println!();

    let entries = collect_food_entries(&common_foods())?;
    if entries.is_empty() {
        println!("Nothing logged.");
        return Ok(());
    }

    let count = entries.len();
    for entry in entries {
        manager.log_food(user, &date, entry);
    }
    save_app(file_path, &manager, &aggregator)?;
    println!("Logged {} foods.", count);

    let report = aggregator.build_report(user, &date, manager.food_log(user, &date));
    display_report(&report);

    Ok(())
}

/// Show the nutrition report for one date.
fn cmd_report(file_path: &str, user: &str, date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let (manager, aggregator) = load_app(file_path)?;

    let entries = manager.food_log(user, &date);
    if entries.is_empty() {
        println!("No foods logged for {} on {}.", user, date);
    }

    let report = aggregator.build_report(user, &date, entries);
    display_report(&report);

    Ok(())
}

/// Show reports for the 7 days ending at a date.
fn cmd_week(file_path: &str, user: &str, end: Option<String>) -> Result<()> {
    let end = resolve_date(end)?;
    let (manager, aggregator) = load_app(file_path)?;

    let dates = week_dates(&end)?;
    let reports =
        aggregator.build_weekly_report(user, &dates, |date| manager.food_log(user, date).to_vec());
    display_weekly(&reports);

    Ok(())
}

/// Set or show daily nutrition goals.
fn cmd_goals(file_path: &str, user: &str, show: bool) -> Result<()> {
    let (manager, mut aggregator) = load_app(file_path)?;

    if show {
        let goal = aggregator.goals_for(user);
        let source = if aggregator.has_goals(user) {
            "set by you"
        } else {
            "default"
        };
        println!("Goals for {} ({}):", user, source);
        println!("  Calories: {} kcal", goal.calories);
        println!("  Protein:  {:.0} g", goal.protein);
        println!("  Carbs:    {:.0} g", goal.carbs);
        println!("  Fat:      {:.0} g", goal.fat);
        return Ok(());
    }

    let goal = prompt_goal()?;
    aggregator.set_goals(user, goal);
    save_app(file_path, &manager, &aggregator)?;
    println!("Goals saved for {}.", user);

    Ok(())
}

/// Suggest daily calories from a BMR estimate and offer to store them.
fn cmd_suggest(file_path: &str, user: &str) -> Result<()> {
    let (manager, mut aggregator) = load_app(file_path)?;

    let profile = prompt_profile()?;
    let calories = suggested_calories(
        &profile.gender,
        profile.age,
        profile.height_cm,
        profile.weight_kg,
        profile.activity_level,
    );
    let split = suggested_macros(calories);
    display_suggestion(calories, &split);

    if prompt_yes_no("Store these as your daily goals?", false)? {
        aggregator.set_goals(
            user,
            NutritionGoal {
                calories,
                protein: split.protein,
                carbs: split.carbs,
                fat: split.fat,
            },
        );
        save_app(file_path, &manager, &aggregator)?;
        println!("Goals saved for {}.", user);
    }

    Ok(())
}

/// Catalog options offered when planning a meal.
fn plan_options(meal: MealType) -> Vec<CatalogFood> {
    match meal {
        MealType::Breakfast => breakfast_options(),
        MealType::Lunch => lunch_options(),
        MealType::Dinner => dinner_options(),
        MealType::Snack => common_foods(),
    }
}

/// Add foods to a meal plan for a date.
fn cmd_plan(file_path: &str, user: &str, date: Option<String>, meal: Option<MealType>) -> Result<()> {
    let date = resolve_date(date)?;
    let (mut manager, aggregator) = load_app(file_path)?;

    let meal = match meal {
        Some(meal) => meal,
        None => prompt_meal_type()?,
    };

    println!("Planning {} for {} on {}", meal, user, date);
    let options = plan_options(meal);
    display_catalog(&format!("{} Options", meal), &options);

    let entries = collect_food_entries(&options)?;
    if entries.is_empty() {
        println!("Nothing planned.");
        return Ok(());
    }

    let count = entries.len();
    for entry in entries {
        manager.plan_meal(user, &date, meal, entry);
    }
    save_app(file_path, &manager, &aggregator)?;
    println!("Planned {} foods for {} on {}.", count, meal, date);

    let planned = manager.planned_for_date(user, &date);
    println!("Total planned foods that day: {}", planned.len());

    Ok(())
}

/// Expand, merge, and categorize a date's planned meals into a shopping list.
fn cmd_shopping(file_path: &str, user: &str, date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let (manager, _) = load_app(file_path)?;
    let catalog = RecipeCatalog::builtin();

    let planned = manager.planned_for_date(user, &date);
    if planned.is_empty() {
        println!("No meals planned for {} on {}.", user, date);
        println!("Use 'plan' to add foods to a meal first.");
        return Ok(());
    }

    let expanded = expand(&catalog, &planned);
    let consolidated = merge(&expanded);
    let cost = total_cost(&catalog, &consolidated);
    let groups = categorize(&consolidated);

    display_shopping_list(&groups, cost);

    Ok(())
}

/// Export the user's full food log to CSV.
fn cmd_export(file_path: &str, user: &str, out: &str) -> Result<()> {
    let (manager, _) = load_app(file_path)?;

    let records = manager.user_log_records(user);
    if records.is_empty() {
        println!("No foods logged for {}.", user);
        return Ok(());
    }

    write_log_csv(out, &records)?;
    println!("Exported {} entries to {}", records.len(), out);

    Ok(())
}

/// Show the built-in food catalogs.
fn cmd_catalog() -> Result<()> {
    display_catalog("Common Foods", &common_foods());
    display_catalog("Breakfast Options", &breakfast_options());
    display_catalog("Lunch Options", &lunch_options());
    display_catalog("Dinner Options", &dinner_options());
    Ok(())
}
