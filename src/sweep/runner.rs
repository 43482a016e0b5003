use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::sweep::evaluation::{DriftRecord, SweepSummary, evaluate_profile, summarize};
use crate::sweep::sampling::{ProfileRanges, random_profile};

/// Configuration for a drift sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub samples: usize,
    pub seed: u64,
    pub ranges: ProfileRanges,
    pub engine: EngineConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            seed: 123,
            ranges: ProfileRanges::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// Results of a sweep.
pub struct SweepResults {
    /// Every record, worst absolute drift first.
    pub records: Vec<DriftRecord>,
    pub summary: SweepSummary,
}

/// Sample `config.samples` profiles and evaluate each one.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResults> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.samples);

    info!(samples = config.samples, seed = config.seed, "starting drift sweep");

    for _ in 0..config.samples {
        let profile = random_profile(&mut rng, &config.ranges);
        records.push(evaluate_profile(&profile, &config.engine)?);
    }

    records.sort_by(|a, b| {
        b.abs_drift_pct()
            .partial_cmp(&a.abs_drift_pct())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let summary = summarize(&records);
    info!(
        mean = summary.mean_abs_drift_pct,
        max = summary.max_abs_drift_pct,
        "drift sweep finished"
    );

    Ok(SweepResults { records, summary })
}
