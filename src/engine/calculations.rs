use crate::engine::constants::*;
use crate::models::{ActivityLevel, BmiClass, Gender, Goal, HealthFlags, Profile};

/// Body mass index: weight (kg) over height (m) squared.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value.
///
/// Bands are half-open: each lower bound inclusive, upper bound exclusive.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    if bmi < 18.5 {
        BmiClass::Underweight
    } else if bmi < 24.9 {
        BmiClass::Normal
    } else if bmi < 29.9 {
        BmiClass::Overweight
    } else if bmi < 34.9 {
        BmiClass::ObesityI
    } else if bmi < 39.9 {
        BmiClass::ObesityII
    } else {
        BmiClass::ObesityIII
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn calculate_bmr(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total daily energy expenditure.
pub fn calculate_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Lowest intake prescribed while losing weight.
pub fn calorie_floor(gender: Gender) -> f64 {
    match gender {
        Gender::Male => MALE_CALORIE_FLOOR,
        Gender::Female => FEMALE_CALORIE_FLOOR,
    }
}

/// Goal-adjusted daily calorie target.
///
/// At-risk profiles (cardiac or elderly) always get `tdee` back regardless of
/// the goal.
pub fn resolve_target_calories(tdee: f64, goal: Goal, gender: Gender, flags: &HealthFlags) -> f64 {
    if flags.is_at_risk() {
        return tdee;
    }

    match goal {
        Goal::Lose => (tdee - LOSE_DEFICIT_KCAL).max(calorie_floor(gender)),
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
        Goal::Maintain => tdee,
    }
}

/// Daily water target in litres, rounded to one decimal.
pub fn water_target(weight_kg: f64) -> f64 {
    round_to(weight_kg * WATER_LITRES_PER_KG, 1)
}

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, gender: Gender, weight: f64, height: f64) -> Profile {
        Profile {
            age,
            gender,
            weight,
            height,
            ..Profile::default()
        }
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 165.0);
        assert!((bmi - 25.712).abs() < 0.001);
    }

    #[test]
    fn test_bmi_bands_are_half_open() {
        assert_eq!(classify_bmi(18.49), BmiClass::Underweight);
        assert_eq!(classify_bmi(18.5), BmiClass::Normal);
        assert_eq!(classify_bmi(24.89), BmiClass::Normal);
        assert_eq!(classify_bmi(24.9), BmiClass::Overweight);
        assert_eq!(classify_bmi(29.9), BmiClass::ObesityI);
        assert_eq!(classify_bmi(34.9), BmiClass::ObesityII);
        assert_eq!(classify_bmi(39.89), BmiClass::ObesityII);
        assert_eq!(classify_bmi(39.9), BmiClass::ObesityIII);
    }

    #[test]
    fn test_bmr_mifflin_st_jeor() {
        let female = profile(30, Gender::Female, 70.0, 165.0);
        assert!((calculate_bmr(&female) - 1420.25).abs() < 0.001);

        let male = profile(30, Gender::Male, 70.0, 165.0);
        assert!((calculate_bmr(&male) - 1586.25).abs() < 0.001);
    }

    #[test]
    fn test_tdee() {
        assert!((calculate_tdee(1000.0, ActivityLevel::Moderate) - 1550.0).abs() < 0.001);
    }

    #[test]
    fn test_target_floors() {
        let flags = HealthFlags::default();
        assert_eq!(resolve_target_calories(1500.0, Goal::Lose, Gender::Female, &flags), 1200.0);
        assert_eq!(resolve_target_calories(1600.0, Goal::Lose, Gender::Male, &flags), 1500.0);
        assert_eq!(resolve_target_calories(2600.0, Goal::Lose, Gender::Male, &flags), 2100.0);
    }

    #[test]
    fn test_target_goals() {
        let flags = HealthFlags::default();
        assert_eq!(resolve_target_calories(2000.0, Goal::Gain, Gender::Female, &flags), 2300.0);
        assert_eq!(resolve_target_calories(2000.0, Goal::Maintain, Gender::Male, &flags), 2000.0);
    }

    #[test]
    fn test_target_at_risk_override() {
        let elderly = HealthFlags {
            is_elderly: true,
            ..Default::default()
        };
        assert_eq!(resolve_target_calories(1800.0, Goal::Gain, Gender::Male, &elderly), 1800.0);

        let cardiac = HealthFlags {
            has_heart_condition: true,
            ..Default::default()
        };
        assert_eq!(resolve_target_calories(1800.0, Goal::Lose, Gender::Female, &cardiac), 1800.0);
    }

    #[test]
    fn test_water_target() {
        assert_eq!(water_target(70.0), 2.5);
        assert_eq!(water_target(82.0), 2.9);
    }
}
