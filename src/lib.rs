pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod sweep;

pub use config::EngineConfig;
pub use engine::{compute_plan, compute_plan_with};
pub use error::{PlanError, Result};
pub use models::{DietPlan, PlanResult, PlanStatus, Profile, WorkoutPlan};
