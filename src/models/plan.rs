use serde::{Deserialize, Serialize};

use crate::models::food::{MacroTotals, MealSlot, PortionedItem};
use crate::models::profile::Goal;

/// Policy outcome of a submitted profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Approved,
    DeniedMinor,
    RestrictedElderly,
    RestrictedHealth,
}

impl PlanStatus {
    pub fn is_approved(self) -> bool {
        self == PlanStatus::Approved
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanStatus::Approved => "Aprovado",
            PlanStatus::DeniedMinor => "Negado (menor de idade)",
            PlanStatus::RestrictedElderly => "Restrito (protocolo sênior)",
            PlanStatus::RestrictedHealth => "Restrito (condição de saúde)",
        }
    }
}

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiClass {
    pub fn label(self) -> &'static str {
        match self {
            BmiClass::Underweight => "Abaixo do peso",
            BmiClass::Normal => "Peso adequado",
            BmiClass::Overweight => "Sobrepeso",
            BmiClass::ObesityI => "Obesidade grau I",
            BmiClass::ObesityII => "Obesidade grau II",
            BmiClass::ObesityIII => "Obesidade grau III",
        }
    }
}

/// Risk and restriction flags detected from the free-text fields and age.
///
/// Flags are independent; any combination may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFlags {
    pub has_heart_condition: bool,
    pub is_elderly: bool,
    pub is_diabetic: bool,
    pub is_hypertensive: bool,
    pub has_lactose_intolerance: bool,
    pub has_gluten_intolerance: bool,
    pub is_vegetarian: bool,
}

impl HealthFlags {
    /// At-risk profiles get no caloric deficit or surplus and no workout.
    pub fn is_at_risk(&self) -> bool {
        self.has_heart_condition || self.is_elderly
    }
}

/// One substitution pass over the menu, keyed by the restriction it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPass {
    Vegetarian,
    Lactose,
    Gluten,
    Diabetic,
}

impl DietaryPass {
    pub const DEFAULT_ORDER: [DietaryPass; 4] = [
        DietaryPass::Vegetarian,
        DietaryPass::Lactose,
        DietaryPass::Gluten,
        DietaryPass::Diabetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DietaryPass::Vegetarian => "vegetariana",
            DietaryPass::Lactose => "sem lactose",
            DietaryPass::Gluten => "sem glúten",
            DietaryPass::Diabetic => "para diabéticos",
        }
    }

    /// Whether the flags call for this pass.
    pub fn applies_to(self, flags: &HealthFlags) -> bool {
        match self {
            DietaryPass::Vegetarian => flags.is_vegetarian,
            DietaryPass::Lactose => flags.has_lactose_intolerance,
            DietaryPass::Gluten => flags.has_gluten_intolerance,
            DietaryPass::Diabetic => flags.is_diabetic,
        }
    }
}

/// Audit record of one rewrite performed on a menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedSubstitution {
    pub pass: DietaryPass,
    pub slot: MealSlot,
    pub from: String,
    pub to: String,
    pub quantity: f64,
}

/// A later pass put a food on the menu that an earlier applied pass removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionConflict {
    pub slot: MealSlot,
    /// Pass whose restriction is no longer honoured.
    pub overridden: DietaryPass,
    /// Pass that won.
    pub winner: DietaryPass,
    /// Food key the winning pass rewrote.
    pub replaced: String,
    /// Food key that ended up on the menu.
    pub kept: String,
}

/// A timed meal with its portioned items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub slot: MealSlot,
    pub name: String,
    pub time: String,
    pub rationale: String,
    pub items: Vec<PortionedItem>,
    pub totals: MacroTotals,
}

impl Meal {
    /// One description per item, in menu order.
    pub fn options(&self) -> Vec<String> {
        self.items.iter().map(PortionedItem::describe).collect()
    }

    pub fn macros(&self) -> String {
        self.totals.summary()
    }
}

/// Daily diet prescription.
///
/// `calories` is recomputed from the rounded portions and therefore differs
/// from `target_calories` by `calorie_drift`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// Daily water target in litres.
    pub water: f64,
    pub target_calories: f64,
    pub calorie_drift: f64,
    pub meals: Vec<Meal>,
    pub substitutions: Vec<AppliedSubstitution>,
    pub substitution_conflicts: Vec<SubstitutionConflict>,
    pub warnings: Vec<String>,
}

impl DietPlan {
    pub fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub note: String,
}

impl Exercise {
    pub fn new(name: &str, sets: &str, reps: &str, note: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            note: note.to_string(),
        }
    }
}

/// Exercise program handed to approved profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutProgram {
    pub kind: String,
    pub frequency: String,
    pub cardio: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

/// Workout section of a plan.
///
/// `program` is present exactly when `allowed`; otherwise `reason` explains
/// why the workout was withheld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub allowed: bool,
    pub reason: Option<String>,
    pub program: Option<WorkoutProgram>,
    pub warnings: Vec<String>,
}

/// Full engine output for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub status: PlanStatus,
    pub justification: Vec<String>,
    pub flags: Option<HealthFlags>,
    pub diet: Option<DietPlan>,
    pub workout: Option<WorkoutPlan>,
    pub bmr: Option<f64>,
    pub tdee: Option<f64>,
    pub target_calories: Option<f64>,
    pub goal: Option<Goal>,
    /// BMI rounded to one decimal; zero for denied minors.
    pub bmi: f64,
    pub bmi_class: Option<BmiClass>,
}

impl PlanResult {
    pub fn bmi_label(&self) -> &'static str {
        self.bmi_class.map(BmiClass::label).unwrap_or("")
    }

    /// Exercises of the approved program, empty otherwise.
    pub fn exercises(&self) -> &[Exercise] {
        self.workout
            .as_ref()
            .and_then(|w| w.program.as_ref())
            .map(|p| p.exercises.as_slice())
            .unwrap_or(&[])
    }
}
