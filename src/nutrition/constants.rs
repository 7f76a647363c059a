/// Mifflin-St Jeor coefficients: BMR = 10w + 6.25h - 5a + gender constant.
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = 5.0;

/// Gender constants for the Mifflin-St Jeor estimate.
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Activity multipliers for levels 1 (sedentary) through 5 (extra active).
pub const ACTIVITY_FACTORS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Calories per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of daily calories assigned to each macro by the suggestion.
pub const PROTEIN_SPLIT: f64 = 0.20;
pub const CARB_SPLIT: f64 = 0.50;
pub const FAT_SPLIT: f64 = 0.30;

/// Human-readable names for activity levels 1-5.
pub const ACTIVITY_NAMES: [&str; 5] = [
    "Sedentary (little or no exercise)",
    "Lightly active (1-3 days/week)",
    "Moderately active (3-5 days/week)",
    "Very active (6-7 days/week)",
    "Extra active (hard training twice a day)",
];
