use serde::Serialize;

use crate::config::EngineConfig;
use crate::engine::compute_plan_with;
use crate::error::Result;
use crate::models::{PlanStatus, Profile};

/// Engine outcome for one sampled profile.
#[derive(Debug, Clone, Serialize)]
pub struct DriftRecord {
    pub profile: Profile,
    pub status: PlanStatus,
    pub bmi: f64,
    pub target_calories: Option<f64>,
    pub calories: Option<f64>,
    pub drift: Option<f64>,
    /// Drift relative to the target, in percent.
    pub drift_pct: Option<f64>,
    /// Gap between listed calories and 4/4/9 macro energy, in percent.
    pub macro_residual_pct: Option<f64>,
    pub substitutions: usize,
    pub conflicts: usize,
}

impl DriftRecord {
    /// Absolute relative drift; zero when no diet was produced.
    pub fn abs_drift_pct(&self) -> f64 {
        self.drift_pct.map(f64::abs).unwrap_or(0.0)
    }
}

/// Run the engine on one profile and measure the rounding drift.
pub fn evaluate_profile(profile: &Profile, config: &EngineConfig) -> Result<DriftRecord> {
    let plan = compute_plan_with(profile, config)?;
    let diet = plan.diet.as_ref();

    let drift_pct = diet
        .filter(|d| d.target_calories > 0.0)
        .map(|d| d.calorie_drift / d.target_calories * 100.0);
    let macro_residual_pct = diet.filter(|d| d.calories > 0.0).map(|d| {
        let energy = d.totals().energy_from_macros();
        (energy - d.calories).abs() / d.calories * 100.0
    });

    Ok(DriftRecord {
        profile: profile.clone(),
        status: plan.status,
        bmi: plan.bmi,
        target_calories: diet.map(|d| d.target_calories),
        calories: diet.map(|d| d.calories),
        drift: diet.map(|d| d.calorie_drift),
        drift_pct,
        macro_residual_pct,
        substitutions: diet.map(|d| d.substitutions.len()).unwrap_or(0),
        conflicts: diet.map(|d| d.substitution_conflicts.len()).unwrap_or(0),
    })
}

/// Aggregate statistics over a sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepSummary {
    pub samples: usize,
    pub approved: usize,
    pub restricted: usize,
    pub denied: usize,
    pub mean_abs_drift_pct: f64,
    pub max_abs_drift_pct: f64,
    pub mean_macro_residual_pct: f64,
    pub max_macro_residual_pct: f64,
    /// Profiles whose diet reported at least one substitution conflict.
    pub with_conflicts: usize,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Summarize a set of records.
pub fn summarize(records: &[DriftRecord]) -> SweepSummary {
    let drifts: Vec<f64> = records
        .iter()
        .filter_map(|r| r.drift_pct.map(f64::abs))
        .collect();
    let residuals: Vec<f64> = records.iter().filter_map(|r| r.macro_residual_pct).collect();

    let count = |status: PlanStatus| records.iter().filter(|r| r.status == status).count();

    SweepSummary {
        samples: records.len(),
        approved: count(PlanStatus::Approved),
        restricted: count(PlanStatus::RestrictedHealth) + count(PlanStatus::RestrictedElderly),
        denied: count(PlanStatus::DeniedMinor),
        mean_abs_drift_pct: mean(&drifts),
        max_abs_drift_pct: max(&drifts),
        mean_macro_residual_pct: mean(&residuals),
        max_macro_residual_pct: max(&residuals),
        with_conflicts: records.iter().filter(|r| r.conflicts > 0).count(),
    }
}
