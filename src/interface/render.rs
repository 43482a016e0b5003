use crate::engine::guide::{ExerciseGuide, guide_for};
use crate::models::{DietPlan, PlanResult, WorkoutPlan};

/// Display a full plan.
pub fn display_plan(plan: &PlanResult) {
    println!();
    println!("=== Resultado: {} ===", plan.status.label());
    for line in &plan.justification {
        println!("  {}", line);
    }
    println!();

    if plan.diet.is_none() {
        return;
    }

    println!("IMC: {:.1} ({})", plan.bmi, plan.bmi_label());
    if let (Some(bmr), Some(tdee), Some(target)) = (plan.bmr, plan.tdee, plan.target_calories) {
        println!(
            "Metabolismo basal: {:.0} kcal | Gasto diário: {:.0} kcal | Meta: {:.0} kcal",
            bmr, tdee, target
        );
    }

    if let Some(diet) = &plan.diet {
        display_diet(diet);
    }
    if let Some(workout) = &plan.workout {
        display_workout(workout);
    }
}

/// Display the diet section.
pub fn display_diet(diet: &DietPlan) {
    println!();
    println!("=== Plano Alimentar ===");
    println!();

    for meal in &diet.meals {
        println!("{} ({})  {}", meal.name, meal.time, meal.macros());
        for option in meal.options() {
            println!("  - {}", option);
        }
        println!("  {}", meal.rationale);
        println!();
    }

    println!("--- Totais ---");
    println!(
        "{:.0} kcal (meta {:.0}, desvio {:+.0}) | P:{:.0}g C:{:.0}g G:{:.0}g",
        diet.calories, diet.target_calories, diet.calorie_drift, diet.protein, diet.carbs, diet.fats
    );
    println!("Água: {:.1} L/dia", diet.water);

    if !diet.substitutions.is_empty() {
        println!();
        println!("Substituições aplicadas:");
        for sub in &diet.substitutions {
            println!("  {:?}: {} -> {} ({})", sub.pass, sub.from, sub.to, sub.slot.label());
        }
    }

    println!();
    for warning in &diet.warnings {
        println!("! {}", warning);
    }
}

/// Display the workout section.
pub fn display_workout(workout: &WorkoutPlan) {
    println!();
    println!("=== Treino ===");
    println!();

    match &workout.program {
        Some(program) => {
            println!("{} - {}", program.kind, program.frequency);
            println!("Foco: {}", program.focus);
            println!();

            let max_name_len = program
                .exercises
                .iter()
                .map(|e| e.name.chars().count())
                .max()
                .unwrap_or(10);

            for (i, exercise) in program.exercises.iter().enumerate() {
                println!(
                    "{:>3}. {:<width$}  {}x {}  {}",
                    i + 1,
                    exercise.name,
                    exercise.sets,
                    exercise.reps,
                    exercise.note,
                    width = max_name_len
                );
            }
            println!();
            println!("Cardio: {}", program.cardio);
        }
        None => {
            let reason = workout.reason.as_deref().unwrap_or("");
            println!("Treino não liberado. {}", reason);
        }
    }

    println!();
    for warning in &workout.warnings {
        println!("! {}", warning);
    }
    println!();
}

/// Display one exercise guide entry.
pub fn display_guide(guide: &ExerciseGuide) {
    println!();
    println!("=== {} ===", guide.name);
    println!();
    println!("Posição:     {}", guide.position);
    println!("Execução:    {}", guide.execution);
    println!("Cuidados:    {}", guide.cautions);
    println!("Erros comuns: {}", guide.common_mistakes);
    println!("Respiração:  {}", guide.breathing);
    println!();
}

/// Display the guides of every exercise in a plan.
pub fn display_plan_guides(plan: &PlanResult) {
    for exercise in plan.exercises() {
        if let Some(guide) = guide_for(&exercise.name) {
            display_guide(guide);
        }
    }
}
