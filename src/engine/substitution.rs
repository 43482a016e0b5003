use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::models::{AppliedSubstitution, DietaryPass, HealthFlags, MenuEntry, SubstitutionConflict};

/// Keyed rewrite: every entry holding `from` becomes `to` with a new base quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rewrite {
    pub from: &'static str,
    pub to: &'static str,
    pub quantity: f64,
}

const fn rewrite(from: &'static str, to: &'static str, quantity: f64) -> Rewrite {
    Rewrite { from, to, quantity }
}

const VEGETARIAN_REWRITES: [Rewrite; 2] = [
    rewrite("Frango Grelhado", "Ovo", 3.0),
    rewrite("Peixe Grelhado", "Ovo", 3.0),
];

const LACTOSE_REWRITES: [Rewrite; 2] = [
    rewrite("Iogurte Natural", "Banana", 1.0),
    rewrite("Queijo Cottage", "Ovo", 1.0),
];

const GLUTEN_REWRITES: [Rewrite; 2] = [
    rewrite("Aveia", "Tapioca", 40.0),
    rewrite("Pão Integral", "Tapioca", 60.0),
];

const DIABETIC_REWRITES: [Rewrite; 3] = [
    rewrite("Arroz Integral", "Batata Doce", 150.0),
    rewrite("Banana", "Maçã", 1.0),
    rewrite("Tapioca", "Aveia", 3.0),
];

/// Rewrite table of one pass.
pub fn rewrites(pass: DietaryPass) -> &'static [Rewrite] {
    match pass {
        DietaryPass::Vegetarian => &VEGETARIAN_REWRITES,
        DietaryPass::Lactose => &LACTOSE_REWRITES,
        DietaryPass::Gluten => &GLUTEN_REWRITES,
        DietaryPass::Diabetic => &DIABETIC_REWRITES,
    }
}

/// Check that a pass order names every pass exactly once.
pub fn validate_order(order: &[DietaryPass]) -> Result<()> {
    let unique: HashSet<DietaryPass> = order.iter().copied().collect();
    if unique.len() != order.len() {
        return Err(PlanError::Configuration(
            "substitution order lists a pass more than once".to_string(),
        ));
    }
    if let Some(missing) = DietaryPass::DEFAULT_ORDER
        .iter()
        .find(|pass| !unique.contains(pass))
    {
        return Err(PlanError::Configuration(format!(
            "substitution order is missing the {:?} pass",
            missing
        )));
    }
    Ok(())
}

/// Menu after all applicable passes, with the audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionOutcome {
    pub entries: Vec<MenuEntry>,
    pub applied: Vec<AppliedSubstitution>,
    pub conflicts: Vec<SubstitutionConflict>,
}

/// Apply the passes the flags call for, in `order`.
///
/// Each pass maps the current list to a new one. When a pass rewrites an
/// entry into a food that an earlier applied pass removes, the earlier pass
/// loses and a [`SubstitutionConflict`] is recorded.
pub fn apply_substitutions(
    template: &[MenuEntry],
    flags: &HealthFlags,
    order: &[DietaryPass],
) -> SubstitutionOutcome {
    let mut current = template.to_vec();
    let mut applied = Vec::new();
    let mut conflicts = Vec::new();
    let mut done: Vec<DietaryPass> = Vec::new();

    for &pass in order.iter().filter(|pass| pass.applies_to(flags)) {
        debug!(?pass, "applying substitution pass");
        current = run_pass(pass, &done, &current, &mut applied, &mut conflicts);
        done.push(pass);
    }

    SubstitutionOutcome {
        entries: current,
        applied,
        conflicts,
    }
}

/// First earlier pass whose rewrite table removes `food`.
fn forbidding_pass(earlier: &[DietaryPass], food: &str) -> Option<DietaryPass> {
    earlier
        .iter()
        .copied()
        .find(|pass| rewrites(*pass).iter().any(|r| r.from == food))
}

fn run_pass(
    pass: DietaryPass,
    earlier: &[DietaryPass],
    entries: &[MenuEntry],
    applied: &mut Vec<AppliedSubstitution>,
    conflicts: &mut Vec<SubstitutionConflict>,
) -> Vec<MenuEntry> {
    let table = rewrites(pass);

    entries
        .iter()
        .map(|entry| {
            let Some(rule) = table.iter().find(|r| r.from == entry.food_key) else {
                return entry.clone();
            };

            let slot = entry.slot;
            applied.push(AppliedSubstitution {
                pass,
                slot,
                from: rule.from.to_string(),
                to: rule.to.to_string(),
                quantity: rule.quantity,
            });

            if let Some(overridden) = forbidding_pass(earlier, rule.to) {
                warn!(
                    ?slot,
                    ?overridden,
                    winner = ?pass,
                    food = rule.to,
                    "substitution reverted by a later pass"
                );
                conflicts.push(SubstitutionConflict {
                    slot,
                    overridden,
                    winner: pass,
                    replaced: rule.from.to_string(),
                    kept: rule.to.to_string(),
                });
            }

            MenuEntry {
                slot,
                food_key: rule.to.to_string(),
                base_quantity: rule.quantity,
            }
        })
        .collect()
}
