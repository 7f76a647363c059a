use crate::nutrition::constants::*;

/// Gram targets derived from a calorie budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Resolve an activity level (1-5) to its multiplier.
///
/// Out-of-range levels fall back to sedentary rather than erroring.
pub fn activity_factor(level: u8) -> f64 {
    match level {
        1..=5 => ACTIVITY_FACTORS[(level - 1) as usize],
        _ => ACTIVITY_FACTORS[0],
    }
}

fn is_male(gender: &str) -> bool {
    gender.eq_ignore_ascii_case("m") || gender.eq_ignore_ascii_case("male")
}

/// Daily calorie suggestion from the Mifflin-St Jeor BMR estimate.
///
/// The gender flag is case-insensitive; anything other than "m"/"male"
/// takes the female constant. Result is rounded half-up.
pub fn suggested_calories(
    gender: &str,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: u8,
) -> u32 {
    let gender_constant = if is_male(gender) {
        MSJ_MALE_CONSTANT
    } else {
        MSJ_FEMALE_CONSTANT
    };

    let bmr = MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm
        - MSJ_AGE_COEF * f64::from(age)
        + gender_constant;

    (bmr * activity_factor(activity_level)).round() as u32
}

/// Split a calorie budget into gram targets (20% protein / 50% carbs / 30% fat).
pub fn suggested_macros(calories: u32) -> MacroSplit {
    let cal = f64::from(calories);
    MacroSplit {
        protein: cal * PROTEIN_SPLIT / KCAL_PER_G_PROTEIN,
        carbs: cal * CARB_SPLIT / KCAL_PER_G_CARBS,
        fat: cal * FAT_SPLIT / KCAL_PER_G_FAT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_moderate_activity() {
        // (10*80 + 6.25*180 - 5*30 + 5) * 1.55 = 1780 * 1.55 = 2759
        assert_eq!(suggested_calories("M", 30, 180.0, 80.0, 3), 2759);
        assert_eq!(suggested_calories("male", 30, 180.0, 80.0, 3), 2759);
    }

    #[test]
    fn test_female_constant_applies_to_other_flags() {
        let female = suggested_calories("F", 30, 180.0, 80.0, 1);
        assert_eq!(suggested_calories("f", 30, 180.0, 80.0, 1), female);
        assert_eq!(suggested_calories("other", 30, 180.0, 80.0, 1), female);

        // Constant gap of 166 kcal before the activity multiplier.
        let male = suggested_calories("M", 30, 180.0, 80.0, 1);
        assert_eq!(male - female, (166.0_f64 * 1.2).round() as u32);
    }

    #[test]
    fn test_invalid_activity_level_is_sedentary() {
        assert_eq!(
            suggested_calories("M", 30, 180.0, 80.0, 99),
            suggested_calories("M", 30, 180.0, 80.0, 1)
        );
        assert_eq!(
            suggested_calories("M", 30, 180.0, 80.0, 0),
            suggested_calories("M", 30, 180.0, 80.0, 1)
        );
    }

    #[test]
    fn test_macro_split_grams() {
        let split = suggested_macros(2000);
        assert!((split.protein - 100.0).abs() < 1e-9); // 2000*0.2/4
        assert!((split.carbs - 250.0).abs() < 1e-9); // 2000*0.5/4
        assert!((split.fat - 2000.0 * 0.3 / 9.0).abs() < 1e-9);
    }
}
