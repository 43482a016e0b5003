use crate::engine::calculations::water_target;
use crate::engine::composer::ComposedMenu;
use crate::engine::constants::*;
use crate::models::{
    ActivityLevel, AppliedSubstitution, DietPlan, DietaryPass, Exercise, HealthFlags,
    MacroTotals, Meal, MealSlot, PlanStatus, Profile, SubstitutionConflict, WorkoutPlan,
    WorkoutProgram,
};

/// Group portioned items into the four timed meals.
///
/// Meals keep serving order; items keep menu order within a meal.
pub fn group_meals(menu: &ComposedMenu) -> Vec<Meal> {
    MealSlot::ALL
        .into_iter()
        .map(|slot| {
            let items: Vec<_> = menu
                .items
                .iter()
                .filter(|item| item.slot == slot)
                .cloned()
                .collect();
            let totals: MacroTotals = items.iter().map(|i| i.macros).sum();

            Meal {
                slot,
                name: slot.label().to_string(),
                time: slot.time_window().to_string(),
                rationale: slot.rationale().to_string(),
                items,
                totals,
            }
        })
        .collect()
}

/// Diet warnings for the detected conditions.
pub fn diet_warnings(flags: &HealthFlags, conflicts: &[SubstitutionConflict]) -> Vec<String> {
    let mut warnings = vec![
        DIET_DATA_DISCLAIMER.to_string(),
        DIET_EDUCATIONAL_DISCLAIMER.to_string(),
    ];
    if flags.is_diabetic {
        warnings.push(DIET_DIABETIC_WARNING.to_string());
    }
    if flags.is_hypertensive {
        warnings.push(DIET_HYPERTENSIVE_WARNING.to_string());
    }
    for conflict in conflicts {
        let warning = conflict_warning(conflict);
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }
    warnings.push(DIET_HYDRATION_WARNING.to_string());
    warnings
}

/// Warning line for one pass override.
pub fn conflict_warning(conflict: &SubstitutionConflict) -> String {
    match (conflict.overridden, conflict.winner) {
        (DietaryPass::Gluten, DietaryPass::Diabetic) => DIET_GLUTEN_REVERTED_WARNING.to_string(),
        (overridden, winner) => format!(
            "Substituição {} revertida pela dieta {}: {} mantido no {}.",
            overridden.label(),
            winner.label(),
            conflict.kept,
            conflict.slot.label()
        ),
    }
}

/// Assemble the diet section from a composed menu.
pub fn build_diet(
    profile: &Profile,
    flags: &HealthFlags,
    menu: &ComposedMenu,
    target_calories: f64,
    substitutions: Vec<AppliedSubstitution>,
    conflicts: Vec<SubstitutionConflict>,
) -> DietPlan {
    let totals = menu.totals.rounded();
    let target = target_calories.round();
    let warnings = diet_warnings(flags, &conflicts);

    DietPlan {
        calories: totals.calories,
        protein: totals.protein,
        carbs: totals.carbs,
        fats: totals.fats,
        water: water_target(profile.weight),
        target_calories: target,
        calorie_drift: totals.calories - target,
        meals: group_meals(menu),
        substitutions,
        substitution_conflicts: conflicts,
        warnings,
    }
}

/// Workout warnings; the Valsalva caution applies to hypertensive profiles.
pub fn workout_warnings(flags: &HealthFlags) -> Vec<String> {
    let mut warnings = vec![
        WORKOUT_PROFESSIONAL_WARNING.to_string(),
        WORKOUT_LIMITS_WARNING.to_string(),
        WORKOUT_POSTURE_WARNING.to_string(),
    ];
    if flags.is_hypertensive {
        warnings.push(WORKOUT_VALSALVA_WARNING.to_string());
    }
    warnings
}

/// Exercise list for an approved profile.
pub fn build_exercises(profile: &Profile, flags: &HealthFlags) -> Vec<Exercise> {
    let mut exercises: Vec<Exercise> = BASE_PROGRAM
        .iter()
        .map(|exercise| {
            if !flags.is_hypertensive {
                return exercise.clone();
            }
            let mut note = format!("{} {}", exercise.note, BREATHING_CAUTION);
            if exercise.name.contains(PLANK_NAME_FRAGMENT) {
                note = format!("{} {}", note, PLANK_CAUTION);
            }
            Exercise {
                note,
                ..exercise.clone()
            }
        })
        .collect();

    if profile.age < YOUNG_ADULT_AGE && !flags.is_hypertensive {
        exercises.push(YOUNG_ADULT_EXTRA.clone());
    }

    exercises
}

/// Assemble the workout section.
///
/// Only approved profiles receive a program; everyone else gets the reason
/// it was withheld.
pub fn build_workout(status: PlanStatus, profile: &Profile, flags: &HealthFlags) -> WorkoutPlan {
    let warnings = workout_warnings(flags);

    if !status.is_approved() {
        let reason = if flags.has_heart_condition {
            CARDIAC_WORKOUT_REASON
        } else {
            ELDERLY_WORKOUT_REASON
        };
        return WorkoutPlan {
            allowed: false,
            reason: Some(reason.to_string()),
            program: None,
            warnings,
        };
    }

    let frequency = if profile.activity_level == ActivityLevel::Sedentary {
        FREQUENCY_SEDENTARY
    } else {
        FREQUENCY_ACTIVE
    };
    let cardio = if flags.is_hypertensive {
        CARDIO_HYPERTENSIVE
    } else {
        CARDIO_DEFAULT
    };

    WorkoutPlan {
        allowed: true,
        reason: None,
        program: Some(WorkoutProgram {
            kind: WORKOUT_KIND.to_string(),
            frequency: frequency.to_string(),
            cardio: cardio.to_string(),
            focus: WORKOUT_FOCUS.to_string(),
            exercises: build_exercises(profile, flags),
        }),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::composer::compose_menu;

    fn hypertensive() -> HealthFlags {
        HealthFlags {
            is_hypertensive: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_meals_order_and_totals() {
        let menu = compose_menu(&TEMPLATE_MENU, 2000.0, &FOOD_TABLE).unwrap();
        let meals = group_meals(&menu);

        let slots: Vec<MealSlot> = meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert_eq!(meals[0].time, "07:00 - 08:00");
        assert_eq!(meals[1].items.len(), 5);

        let sum: f64 = meals.iter().map(|m| m.totals.calories).sum();
        assert!((sum - menu.totals.calories).abs() < 1e-6);
    }

    #[test]
    fn test_base_program() {
        let profile = Profile::default();
        let exercises = build_exercises(&profile, &HealthFlags::default());
        assert_eq!(exercises.len(), 5);
        assert_eq!(exercises[3].note, "Corpo alinhado.");
    }

    #[test]
    fn test_young_adult_gets_burpees() {
        let profile = Profile {
            age: 22,
            ..Profile::default()
        };
        let exercises = build_exercises(&profile, &HealthFlags::default());
        assert_eq!(exercises.len(), 6);
        assert_eq!(exercises[5].name, "Burpees (Adaptado)");

        let exercises = build_exercises(&profile, &hypertensive());
        assert_eq!(exercises.len(), 5);
    }

    #[test]
    fn test_hypertensive_cautions() {
        let exercises = build_exercises(&Profile::default(), &hypertensive());
        for exercise in &exercises {
            assert!(exercise.note.contains(BREATHING_CAUTION));
        }
        assert_eq!(
            exercises[3].note,
            "Corpo alinhado. Não prenda a respiração. Evite apnéia."
        );
        assert!(!exercises[0].note.contains(PLANK_CAUTION));
    }

    #[test]
    fn test_withheld_workout_reasons() {
        let profile = Profile::default();
        let cardiac = HealthFlags {
            has_heart_condition: true,
            is_elderly: true,
            ..Default::default()
        };
        let workout = build_workout(PlanStatus::RestrictedHealth, &profile, &cardiac);
        assert!(!workout.allowed);
        assert!(workout.program.is_none());
        assert_eq!(workout.reason.as_deref(), Some(CARDIAC_WORKOUT_REASON));

        let elderly = HealthFlags {
            is_elderly: true,
            ..Default::default()
        };
        let workout = build_workout(PlanStatus::RestrictedElderly, &profile, &elderly);
        assert_eq!(workout.reason.as_deref(), Some(ELDERLY_WORKOUT_REASON));
    }

    #[test]
    fn test_frequency_and_cardio() {
        let active = Profile {
            activity_level: ActivityLevel::Active,
            ..Profile::default()
        };
        let workout = build_workout(PlanStatus::Approved, &active, &HealthFlags::default());
        let program = workout.program.unwrap();
        assert_eq!(program.frequency, FREQUENCY_ACTIVE);
        assert_eq!(program.cardio, CARDIO_DEFAULT);

        let workout = build_workout(PlanStatus::Approved, &Profile::default(), &hypertensive());
        let program = workout.program.unwrap();
        assert_eq!(program.frequency, FREQUENCY_SEDENTARY);
        assert!(program.cardio.contains("Caminhada leve"));
        assert!(workout.warnings.iter().any(|w| w.contains("Valsalva")));
    }

    #[test]
    fn test_diet_warnings() {
        let flags = HealthFlags {
            is_diabetic: true,
            is_hypertensive: true,
            ..Default::default()
        };
        let warnings = diet_warnings(&flags, &[]);
        assert_eq!(warnings.len(), 5);
        assert_eq!(warnings.last().map(String::as_str), Some(DIET_HYDRATION_WARNING));
        assert!(warnings.contains(&DIET_DIABETIC_WARNING.to_string()));
        assert!(warnings.contains(&DIET_HYPERTENSIVE_WARNING.to_string()));

        assert_eq!(diet_warnings(&HealthFlags::default(), &[]).len(), 3);
    }

    #[test]
    fn test_conflict_warnings() {
        let reverted = SubstitutionConflict {
            slot: MealSlot::Breakfast,
            overridden: DietaryPass::Gluten,
            winner: DietaryPass::Diabetic,
            replaced: "Tapioca".to_string(),
            kept: "Aveia".to_string(),
        };
        let banana = SubstitutionConflict {
            slot: MealSlot::Snack,
            overridden: DietaryPass::Diabetic,
            winner: DietaryPass::Lactose,
            replaced: "Iogurte Natural".to_string(),
            kept: "Banana".to_string(),
        };

        let warnings = diet_warnings(
            &HealthFlags::default(),
            &[reverted.clone(), reverted, banana],
        );
        assert_eq!(warnings.len(), 5);
        assert!(warnings.contains(&DIET_GLUTEN_REVERTED_WARNING.to_string()));
        assert!(warnings.iter().any(|w| w.contains("Banana") && w.contains("Lanche")));
        assert_eq!(warnings.last().map(String::as_str), Some(DIET_HYDRATION_WARNING));
    }
}
