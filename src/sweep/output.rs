use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::{DriftRecord, SweepSummary};

/// Round a float to n decimal places.
fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

/// Write every record to a CSV file.
pub fn write_csv(records: &[DriftRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "age",
        "gender",
        "weight",
        "height",
        "activity",
        "goal",
        "restrictions",
        "conditions",
        "status",
        "bmi",
        "target_calories",
        "calories",
        "drift",
        "drift_pct",
        "macro_residual_pct",
        "substitutions",
        "conflicts",
    ])?;

    for (i, record) in records.iter().enumerate() {
        let profile = &record.profile;
        wtr.write_record([
            (i + 1).to_string(),
            profile.age.to_string(),
            format!("{:?}", profile.gender),
            format!("{:.1}", profile.weight),
            format!("{:.1}", profile.height),
            format!("{:?}", profile.activity_level),
            format!("{:?}", profile.goal),
            profile.restrictions.clone(),
            profile.conditions.clone(),
            format!("{:?}", record.status),
            format!("{:.1}", record.bmi),
            optional(record.target_calories, 1),
            optional(record.calories, 1),
            optional(record.drift, 1),
            optional(record.drift_pct, 3),
            optional(record.macro_residual_pct, 3),
            record.substitutions.to_string(),
            record.conflicts.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the summary and the worst `k` records to a JSON file.
pub fn write_summary_json(
    summary: &SweepSummary,
    records: &[DriftRecord],
    k: usize,
    path: &Path,
) -> Result<()> {
    let json = serde_json::json!({
        "summary": {
            "samples": summary.samples,
            "approved": summary.approved,
            "restricted": summary.restricted,
            "denied": summary.denied,
            "mean_abs_drift_pct": round_dp(summary.mean_abs_drift_pct, 3),
            "max_abs_drift_pct": round_dp(summary.max_abs_drift_pct, 3),
            "mean_macro_residual_pct": round_dp(summary.mean_macro_residual_pct, 3),
            "max_macro_residual_pct": round_dp(summary.max_macro_residual_pct, 3),
            "with_conflicts": summary.with_conflicts,
        },
        "worst": records.iter().take(k).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the worst `k` drifts to stdout.
pub fn print_worst(records: &[DriftRecord], k: usize) {
    println!("\n=== Worst {} Drifts ===\n", k.min(records.len()));

    for (i, record) in records.iter().take(k).enumerate() {
        let profile = &record.profile;
        println!(
            "#{}: drift={:+.1} kcal ({:+.2}%) target={} residual={:.2}%",
            i + 1,
            record.drift.unwrap_or(0.0),
            record.drift_pct.unwrap_or(0.0),
            optional(record.target_calories, 1),
            record.macro_residual_pct.unwrap_or(0.0),
        );
        println!(
            "    {}y {:?} {:.1}kg {:.1}cm {:?} {:?} [{}] [{}]",
            profile.age,
            profile.gender,
            profile.weight,
            profile.height,
            profile.activity_level,
            profile.goal,
            profile.restrictions,
            profile.conditions
        );
    }
}

/// Print the summary block.
pub fn print_summary(summary: &SweepSummary) {
    println!("─────────────────────────────────────────────────────────────");
    println!(
        "{} profiles: {} approved, {} restricted, {} denied",
        summary.samples, summary.approved, summary.restricted, summary.denied
    );
    println!(
        "Calorie drift: mean {:.2}% | max {:.2}%",
        summary.mean_abs_drift_pct, summary.max_abs_drift_pct
    );
    println!(
        "Macro residual: mean {:.2}% | max {:.2}%",
        summary.mean_macro_residual_pct, summary.max_macro_residual_pct
    );
    println!("Profiles with substitution conflicts: {}", summary.with_conflicts);
}
