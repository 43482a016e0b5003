pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, MacroTotals, MealSlot, MenuEntry, PortionedItem, UnitKind};
pub use plan::{
    AppliedSubstitution, BmiClass, DietPlan, DietaryPass, Exercise, HealthFlags, Meal,
    PlanResult, PlanStatus, SubstitutionConflict, WorkoutPlan, WorkoutProgram,
};
pub use profile::{ActivityLevel, Gender, Goal, Profile};
