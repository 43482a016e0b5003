use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{ActivityLevel, Gender, Goal, Profile};

/// Free-text health conditions drawn by the sweep. Empty means none.
pub const CONDITION_POOL: &[&str] = &[
    "",
    "Hipertensão controlada",
    "Diabetes tipo 2",
    "Pressão alta",
    "Asma leve",
    "Arritmia",
    "Marcapasso",
    "Enxaqueca",
];

/// Free-text restrictions drawn by the sweep. Empty means none.
pub const RESTRICTION_POOL: &[&str] = &[
    "",
    "Intolerância à lactose",
    "Doença celíaca (sem glúten)",
    "Vegetariano",
    "Não como carne",
    "Alergia a trigo",
    "Sem leite",
    "Amendoim",
];

/// Sampling ranges for random profiles.
#[derive(Debug, Clone)]
pub struct ProfileRanges {
    pub age: (u32, u32),
    pub weight: (f64, f64),
    pub height: (f64, f64),
    /// Chance that a profile carries a health condition.
    pub condition_rate: f64,
    /// Chance that a profile carries a dietary restriction.
    pub restriction_rate: f64,
}

impl Default for ProfileRanges {
    fn default() -> Self {
        Self {
            age: (18, 85),
            weight: (45.0, 140.0),
            height: (145.0, 200.0),
            condition_rate: 0.3,
            restriction_rate: 0.3,
        }
    }
}

fn pick<T: Copy>(rng: &mut impl Rng, options: &[T], fallback: T) -> T {
    options.choose(rng).copied().unwrap_or(fallback)
}

/// Round to one decimal, as a user would type it.
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Draw one profile within `ranges`.
pub fn random_profile(rng: &mut impl Rng, ranges: &ProfileRanges) -> Profile {
    let conditions = if rng.gen_bool(ranges.condition_rate) {
        pick(rng, CONDITION_POOL, "")
    } else {
        ""
    };
    let restrictions = if rng.gen_bool(ranges.restriction_rate) {
        pick(rng, RESTRICTION_POOL, "")
    } else {
        ""
    };

    Profile {
        age: rng.gen_range(ranges.age.0..=ranges.age.1),
        gender: pick(rng, &Gender::ALL, Gender::Female),
        weight: one_decimal(rng.gen_range(ranges.weight.0..=ranges.weight.1)),
        height: one_decimal(rng.gen_range(ranges.height.0..=ranges.height.1)),
        activity_level: pick(rng, &ActivityLevel::ALL, ActivityLevel::Sedentary),
        goal: pick(rng, &Goal::ALL, Goal::Maintain),
        restrictions: restrictions.to_string(),
        conditions: conditions.to_string(),
    }
}
