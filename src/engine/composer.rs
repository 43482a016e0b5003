use tracing::{debug, warn};

use crate::engine::constants::*;
use crate::error::{PlanError, Result};
use crate::models::{FoodItem, MacroTotals, MenuEntry, PortionedItem, UnitKind};

/// Menu scaled to a calorie target.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedMenu {
    pub items: Vec<PortionedItem>,
    /// Totals recomputed from the rounded quantities.
    pub totals: MacroTotals,
    /// Calories of the unscaled menu.
    pub base_calories: f64,
    pub ratio: f64,
    /// Food keys missing from the table; they contribute nothing.
    pub dropped: Vec<String>,
}

/// Calories of the unscaled menu. Unknown keys contribute zero.
pub fn base_calories(entries: &[MenuEntry], foods: &FoodTable) -> f64 {
    entries
        .iter()
        .filter_map(|e| foods.get(&e.food_key).map(|f| f.calories * e.base_quantity))
        .sum()
}

/// Round a scaled quantity according to the food's unit.
///
/// Grams go to the nearest 10 g (minimum 10 g); every other unit goes to the
/// nearest half (minimum 0.5).
pub fn round_portion(raw: f64, food: &FoodItem) -> f64 {
    match food.unit_kind() {
        UnitKind::Grams => ((raw / GRAM_STEP).round() * GRAM_STEP).max(GRAM_MIN),
        UnitKind::Countable | UnitKind::Measure => {
            ((raw / UNIT_STEP).round() * UNIT_STEP).max(UNIT_MIN)
        }
    }
}

/// Scale every entry to `target_calories` and round the portions.
///
/// Fails with a configuration error when the menu has no calories to scale.
pub fn compose_menu(
    entries: &[MenuEntry],
    target_calories: f64,
    foods: &FoodTable,
) -> Result<ComposedMenu> {
    let base = base_calories(entries, foods);
    if base <= 0.0 || !base.is_finite() {
        return Err(PlanError::Configuration(format!(
            "menu base calories must be positive, got {}",
            base
        )));
    }

    let ratio = target_calories / base;
    debug!(base_calories = base, target_calories, ratio, "scaling menu");

    let mut items = Vec::with_capacity(entries.len());
    let mut dropped = Vec::new();

    for entry in entries {
        let Some(food) = foods.get(&entry.food_key) else {
            warn!(food = %entry.food_key, slot = ?entry.slot, "unknown food key dropped from menu");
            dropped.push(entry.food_key.clone());
            continue;
        };

        let quantity = round_portion(entry.base_quantity * ratio, food);
        items.push(PortionedItem {
            slot: entry.slot,
            food_key: entry.food_key.clone(),
            name: food.name.clone(),
            unit: food.unit.clone(),
            quantity,
            macros: food.macros_for(quantity),
        });
    }

    let totals: MacroTotals = items.iter().map(|i| i.macros).sum();

    Ok(ComposedMenu {
        items,
        totals,
        base_calories: base,
        ratio,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    fn gram_food() -> FoodItem {
        FoodItem::new("Frango", "g", 1.65, 0.31, 0.0, 0.036, 150.0)
    }

    fn unit_food() -> FoodItem {
        FoodItem::new("Ovo", "unid. (50g)", 78.0, 6.3, 0.6, 5.3, 2.0)
    }

    #[test]
    fn test_round_grams() {
        assert_eq!(round_portion(134.0, &gram_food()), 130.0);
        assert_eq!(round_portion(135.0, &gram_food()), 140.0);
        assert_eq!(round_portion(3.0, &gram_food()), 10.0);
    }

    #[test]
    fn test_round_units() {
        assert_eq!(round_portion(1.74, &unit_food()), 1.5);
        assert_eq!(round_portion(1.75, &unit_food()), 2.0);
        assert_eq!(round_portion(0.1, &unit_food()), 0.5);

        let measure = FoodItem::new("Azeite", "fio (5g)", 44.0, 0.0, 0.0, 5.0, 1.0);
        assert_eq!(round_portion(0.2, &measure), 0.5);
        assert_eq!(round_portion(2.3, &measure), 2.5);
    }

    #[test]
    fn test_compose_template_menu() {
        let menu = compose_menu(&TEMPLATE_MENU, 1389.5, &FOOD_TABLE).unwrap();
        assert!((menu.base_calories - 1389.5).abs() < 0.001);
        assert!((menu.ratio - 1.0).abs() < 1e-9);
        assert_eq!(menu.items.len(), TEMPLATE_MENU.len());
        assert!(menu.dropped.is_empty());
        // Unscaled template round-trips to its own base quantities
        for (item, entry) in menu.items.iter().zip(TEMPLATE_MENU.iter()) {
            assert_eq!(item.quantity, entry.base_quantity);
        }
    }

    #[test]
    fn test_totals_use_rounded_quantities() {
        let menu = compose_menu(&TEMPLATE_MENU, 1204.3, &FOOD_TABLE).unwrap();
        let from_items: f64 = menu
            .items
            .iter()
            .map(|i| FOOD_TABLE[&i.food_key].calories * i.quantity)
            .sum();
        assert!((menu.totals.calories - from_items).abs() < 1e-9);
        assert!((menu.totals.calories - 1247.9).abs() < 0.01);
    }

    #[test]
    fn test_unknown_key_is_dropped() {
        let mut entries = TEMPLATE_MENU.clone();
        entries.push(MenuEntry::new(MealSlot::Snack, "Chocolate", 2.0));
        let menu = compose_menu(&entries, 1389.5, &FOOD_TABLE).unwrap();
        assert_eq!(menu.items.len(), TEMPLATE_MENU.len());
        assert_eq!(menu.dropped, vec!["Chocolate".to_string()]);
    }

    #[test]
    fn test_zero_base_calories_is_configuration_error() {
        let entries = vec![MenuEntry::new(MealSlot::Lunch, "Nada", 1.0)];
        let result = compose_menu(&entries, 2000.0, &FOOD_TABLE);
        assert!(matches!(result, Err(PlanError::Configuration(_))));

        let empty: Vec<MenuEntry> = Vec::new();
        assert!(compose_menu(&empty, 2000.0, &FOOD_TABLE).is_err());
    }
}
