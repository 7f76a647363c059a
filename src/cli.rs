use clap::{Parser, Subcommand};

use crate::models::MealType;

/// DietJournal — a console diet tracker: log meals, track nutrients, plan shopping.
#[derive(Parser, Debug)]
#[command(name = "diet_journal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the journal JSON file.
    #[arg(short, long, default_value = "diet_journal.json")]
    pub file: String,

    /// Profile name the command applies to.
    #[arg(short, long, default_value = "guest")]
    pub user: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log foods eaten on a date (default: today).
    Log {
        /// Date to log for (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the nutrition report for a date (default: today).
    Report {
        /// Date to report on (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
    },

    /// Show reports for the 7 days ending at a date (default: today).
    Week {
        /// Last day of the week (YYYY-MM-DD).
        #[arg(long)]
        end: Option<String>,
    },

    /// Set daily nutrition goals interactively.
    Goals {
        /// Show the current goals instead of setting new ones.
        #[arg(long)]
        show: bool,
    },

    /// Suggest daily calories and macros from a BMR estimate.
    Suggest,

    /// Plan foods for a meal on a date (default: today).
    Plan {
        /// Date to plan for (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,

        /// Meal to plan; prompted for when omitted.
        #[arg(long, value_enum)]
        meal: Option<MealType>,
    },

    /// Build a consolidated shopping list from a date's planned meals.
    Shopping {
        /// Date whose meal plan to shop for (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
    },

    /// Export the food log to a CSV file.
    Export {
        /// Output CSV path.
        #[arg(short, long)]
        out: String,
    },

    /// Show the built-in food catalogs.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Report { date: None }
    }
}
