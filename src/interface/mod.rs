pub mod prompts;
pub mod render;

pub use prompts::{
    Profile, collect_food_entries, prompt_goal, prompt_meal_type, prompt_profile, prompt_yes_no,
};
pub use render::{
    display_catalog, display_report, display_shopping_list, display_suggestion, display_weekly,
};
