//! Rule engine turning a questionnaire into a diet and workout plan.
//!
//! Pipeline: eligibility gate, anthropometrics, risk classification, energy
//! target, menu composition, plan assembly. Every step is a pure function of
//! the profile and the static tables, so identical inputs give identical plans.

pub mod assembler;
pub mod calculations;
pub mod classifier;
pub mod composer;
pub mod constants;
pub mod guide;
pub mod substitution;

use tracing::{debug, info, instrument};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{HealthFlags, PlanResult, PlanStatus, Profile};

pub use assembler::{build_diet, build_workout, group_meals};
pub use calculations::{
    calculate_bmi, calculate_bmr, calculate_tdee, classify_bmi, resolve_target_calories,
    round_to, water_target,
};
pub use classifier::{KeywordTable, RiskCategory, classify};
pub use composer::{ComposedMenu, compose_menu, round_portion};
pub use constants::{FOOD_TABLE, FoodTable, TEMPLATE_MENU};
pub use guide::{ExerciseGuide, find_guide, guide_for};
pub use substitution::{SubstitutionOutcome, apply_substitutions};

/// Compute a plan with the built-in tables.
pub fn compute_plan(profile: &Profile) -> Result<PlanResult> {
    compute_plan_with(profile, &EngineConfig::default())
}

/// Compute a plan with a custom keyword table, pass order and age limits.
#[instrument(skip_all, fields(age = profile.age, goal = ?profile.goal))]
pub fn compute_plan_with(profile: &Profile, config: &EngineConfig) -> Result<PlanResult> {
    if profile.age < config.adult_age {
        info!("profile denied: below adult age");
        return Ok(denied_minor());
    }

    let bmi = calculate_bmi(profile.weight, profile.height);
    let bmi_class = classify_bmi(bmi);

    let flags = classify(profile, &config.keywords, config.elderly_age);
    let status = resolve_status(&flags);
    debug!(bmi, ?bmi_class, ?flags, ?status, "profile classified");

    let bmr = calculate_bmr(profile);
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let target_calories = resolve_target_calories(tdee, profile.goal, profile.gender, &flags);
    debug!(bmr, tdee, target_calories, "energy targets resolved");

    let substitution = apply_substitutions(&TEMPLATE_MENU, &flags, &config.substitution_order);
    let menu = compose_menu(&substitution.entries, target_calories, &FOOD_TABLE)?;

    let diet = build_diet(
        profile,
        &flags,
        &menu,
        target_calories,
        substitution.applied,
        substitution.conflicts,
    );
    let workout = build_workout(status, profile, &flags);

    info!(
        ?status,
        target = diet.target_calories,
        calories = diet.calories,
        drift = diet.calorie_drift,
        "plan computed"
    );

    Ok(PlanResult {
        status,
        justification: justification(status),
        flags: Some(flags),
        diet: Some(diet),
        workout: Some(workout),
        bmr: Some(bmr.round()),
        tdee: Some(tdee.round()),
        target_calories: Some(target_calories.round()),
        goal: Some(profile.goal),
        bmi: round_to(bmi, 1),
        bmi_class: Some(bmi_class),
    })
}

/// Status precedence: cardiac, then elderly, then approved.
pub fn resolve_status(flags: &HealthFlags) -> PlanStatus {
    if flags.has_heart_condition {
        PlanStatus::RestrictedHealth
    } else if flags.is_elderly {
        PlanStatus::RestrictedElderly
    } else {
        PlanStatus::Approved
    }
}

/// Fixed justification lines for a status.
pub fn justification(status: PlanStatus) -> Vec<String> {
    let lines: &[&str] = match status {
        PlanStatus::DeniedMinor => &constants::MINOR_JUSTIFICATION,
        PlanStatus::RestrictedHealth => &constants::CARDIAC_JUSTIFICATION,
        PlanStatus::RestrictedElderly => &constants::ELDERLY_JUSTIFICATION,
        PlanStatus::Approved => &[constants::APPROVED_JUSTIFICATION],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

fn denied_minor() -> PlanResult {
    PlanResult {
        status: PlanStatus::DeniedMinor,
        justification: justification(PlanStatus::DeniedMinor),
        flags: None,
        diet: None,
        workout: None,
        bmr: None,
        tdee: None,
        target_calories: None,
        goal: None,
        bmi: 0.0,
        bmi_class: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_precedence() {
        let both = HealthFlags {
            has_heart_condition: true,
            is_elderly: true,
            ..Default::default()
        };
        assert_eq!(resolve_status(&both), PlanStatus::RestrictedHealth);

        let elderly = HealthFlags {
            is_elderly: true,
            ..Default::default()
        };
        assert_eq!(resolve_status(&elderly), PlanStatus::RestrictedElderly);
        assert_eq!(resolve_status(&HealthFlags::default()), PlanStatus::Approved);
    }

    #[test]
    fn test_minor_short_circuits() {
        let profile = Profile {
            age: 17,
            conditions: "arritmia".to_string(),
            ..Profile::default()
        };
        let plan = compute_plan(&profile).unwrap();
        assert_eq!(plan.status, PlanStatus::DeniedMinor);
        assert_eq!(plan.justification.len(), 2);
        assert!(plan.flags.is_none());
        assert_eq!(plan.bmi, 0.0);
    }

    #[test]
    fn test_custom_adult_age() {
        let config = EngineConfig {
            adult_age: 21,
            ..Default::default()
        };
        let profile = Profile {
            age: 19,
            ..Profile::default()
        };
        let plan = compute_plan_with(&profile, &config).unwrap();
        assert_eq!(plan.status, PlanStatus::DeniedMinor);
    }
}
