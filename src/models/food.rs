use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Per-unit nutritional data for one entry of the food table.
///
/// Gram-based foods carry per-gram values; every other unit carries values
/// for one household measure (slice, spoon, pot...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub default_portion: f64,
}

/// Rounding family of a food unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Plain grams, rounded to 10 g.
    Grams,
    /// Discrete pieces ("unid.", "fatia", "pote"), rounded to halves.
    Countable,
    /// Any other household measure, also rounded to halves.
    Measure,
}

impl FoodItem {
    pub fn new(
        name: &str,
        unit: &str,
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
        default_portion: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            calories,
            protein,
            carbs,
            fats,
            default_portion,
        }
    }

    pub fn unit_kind(&self) -> UnitKind {
        let unit = self.unit.to_lowercase();
        if unit == "g" {
            UnitKind::Grams
        } else if ["unid", "fatia", "pote"]
            .iter()
            .any(|prefix| unit.starts_with(prefix))
        {
            UnitKind::Countable
        } else {
            UnitKind::Measure
        }
    }

    /// Macro contribution of `quantity` units.
    pub fn macros_for(&self, quantity: f64) -> MacroTotals {
        MacroTotals {
            calories: self.calories * quantity,
            protein: self.protein * quantity,
            carbs: self.carbs * quantity,
            fats: self.fats * quantity,
        }
    }
}

/// Calorie and macronutrient sums (kcal and grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    /// Energy implied by the macros at 4/4/9 kcal per gram.
    pub fn energy_from_macros(&self) -> f64 {
        self.protein * 4.0 + self.carbs * 4.0 + self.fats * 9.0
    }

    /// Every field rounded to the nearest whole unit.
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fats: self.fats.round(),
        }
    }

    /// Compact display: `~312 kcal | P:20 C:30 G:10`.
    pub fn summary(&self) -> String {
        format!(
            "~{:.0} kcal | P:{:.0} C:{:.0} G:{:.0}",
            self.calories.round(),
            self.protein.round(),
            self.carbs.round(),
            self.fats.round()
        )
    }
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroTotals::default(), Add::add)
    }
}

/// The four fixed meals of the day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Café da Manhã",
            MealSlot::Lunch => "Almoço",
            MealSlot::Snack => "Lanche",
            MealSlot::Dinner => "Jantar",
        }
    }

    pub fn time_window(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "07:00 - 08:00",
            MealSlot::Lunch => "12:00 - 13:00",
            MealSlot::Snack => "16:00",
            MealSlot::Dinner => "19:30",
        }
    }

    pub fn rationale(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Energia sustentada para o início do dia.",
            MealSlot::Lunch => "Refeição completa com todos os macronutrientes.",
            MealSlot::Snack => "Manutenção da saciedade e glicemia.",
            MealSlot::Dinner => "Leve e nutritivo para recuperação noturna.",
        }
    }
}

/// One line of the menu before scaling: which food, how much, in which meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub slot: MealSlot,
    pub food_key: String,
    pub base_quantity: f64,
}

impl MenuEntry {
    pub fn new(slot: MealSlot, food_key: &str, base_quantity: f64) -> Self {
        Self {
            slot,
            food_key: food_key.to_string(),
            base_quantity,
        }
    }
}

/// A scaled and rounded menu line resolved against the food table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionedItem {
    pub slot: MealSlot,
    pub food_key: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub macros: MacroTotals,
}

impl PortionedItem {
    /// Human-readable portion, e.g. `1.5 unid. (50g) de Ovo Cozido`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} de {}",
            format_quantity(self.quantity),
            self.unit,
            self.name
        )
    }
}

/// Prints whole quantities without a decimal part (`2`, `1.5`, `130`).
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> FoodItem {
        FoodItem::new("Ovo Cozido", "unid. (50g)", 78.0, 6.3, 0.6, 5.3, 2.0)
    }

    #[test]
    fn test_unit_kind() {
        assert_eq!(egg().unit_kind(), UnitKind::Countable);

        let chicken = FoodItem::new("Frango", "g", 1.65, 0.31, 0.0, 0.036, 150.0);
        assert_eq!(chicken.unit_kind(), UnitKind::Grams);

        let oats = FoodItem::new("Aveia", "col. sopa (15g)", 57.0, 2.0, 10.0, 1.0, 3.0);
        assert_eq!(oats.unit_kind(), UnitKind::Measure);

        let yogurt = FoodItem::new("Iogurte", "Pote (170g)", 104.0, 6.0, 8.0, 5.6, 1.0);
        assert_eq!(yogurt.unit_kind(), UnitKind::Countable);
    }

    #[test]
    fn test_macros_for() {
        let totals = egg().macros_for(2.0);
        assert!((totals.calories - 156.0).abs() < 0.001);
        assert!((totals.fats - 10.6).abs() < 0.001);
    }

    #[test]
    fn test_totals_sum_and_summary() {
        let total: MacroTotals = [egg().macros_for(1.0), egg().macros_for(1.0)]
            .into_iter()
            .sum();
        assert!((total.protein - 12.6).abs() < 0.001);
        assert_eq!(total.summary(), "~156 kcal | P:13 C:1 G:11");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(130.0), "130");
    }

    #[test]
    fn test_describe() {
        let item = PortionedItem {
            slot: MealSlot::Breakfast,
            food_key: "Ovo".to_string(),
            name: "Ovo Cozido".to_string(),
            unit: "unid. (50g)".to_string(),
            quantity: 1.5,
            macros: egg().macros_for(1.5),
        };
        assert_eq!(item.describe(), "1.5 unid. (50g) de Ovo Cozido");
    }
}
