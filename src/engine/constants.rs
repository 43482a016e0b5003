use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Exercise, FoodItem, MealSlot, MenuEntry};

/// Food table keyed by food identifier.
pub type FoodTable = HashMap<String, FoodItem>;

// ─────────────────────────────────────────────────────────────────────────────
// Eligibility and risk thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum age for any plan.
pub const ADULT_AGE: u32 = 18;

/// Ages strictly above this trigger the senior protocol.
pub const ELDERLY_AGE: u32 = 70;

/// Below this age (and without hypertension) the program gains burpees.
pub const YOUNG_ADULT_AGE: u32 = 25;

// ─────────────────────────────────────────────────────────────────────────────
// Energy targets
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit for `goal = lose`.
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;

/// Daily surplus for `goal = gain`.
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Lowest prescribed intake while losing weight.
pub const FEMALE_CALORIE_FLOOR: f64 = 1200.0;
pub const MALE_CALORIE_FLOOR: f64 = 1500.0;

/// Litres of water per kg of body weight.
pub const WATER_LITRES_PER_KG: f64 = 0.035;

// ─────────────────────────────────────────────────────────────────────────────
// Portion rounding
// ─────────────────────────────────────────────────────────────────────────────

pub const GRAM_STEP: f64 = 10.0;
pub const GRAM_MIN: f64 = 10.0;
pub const UNIT_STEP: f64 = 0.5;
pub const UNIT_MIN: f64 = 0.5;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::Athlete, 1.9);
    m
});

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS.get(&level).unwrap_or(&1.2)
}

/// Reference food table (USDA-based values).
pub static FOOD_TABLE: LazyLock<FoodTable> = LazyLock::new(|| {
    let foods = [
        // Proteins
        ("Ovo", FoodItem::new("Ovo Cozido", "unid. (50g)", 78.0, 6.3, 0.6, 5.3, 2.0)),
        ("Frango Grelhado", FoodItem::new("Frango Grelhado", "g", 1.65, 0.31, 0.0, 0.036, 150.0)),
        ("Carne Moída Magra", FoodItem::new("Carne Moída Magra (95%)", "g", 1.64, 0.28, 0.0, 0.05, 120.0)),
        ("Peixe Grelhado", FoodItem::new("Peixe Grelhado (Tilápia)", "g", 1.28, 0.26, 0.0, 0.03, 150.0)),
        ("Queijo Cottage", FoodItem::new("Queijo Cottage (1%)", "col. sopa (30g)", 22.0, 3.6, 0.9, 0.3, 2.0)),
        ("Iogurte Natural", FoodItem::new("Iogurte Natural Integral", "pote (170g)", 104.0, 6.0, 8.0, 5.6, 1.0)),
        ("Whey Protein", FoodItem::new("Whey Protein (Padrão)", "dose (30g)", 120.0, 24.0, 3.0, 1.0, 1.0)),
        // Carbs
        ("Aveia", FoodItem::new("Aveia em Flocos", "col. sopa (15g)", 57.0, 2.0, 10.0, 1.0, 3.0)),
        ("Arroz Integral", FoodItem::new("Arroz Integral Cozido", "col. sopa (25g)", 31.0, 0.7, 6.4, 0.25, 4.0)),
        ("Batata Doce", FoodItem::new("Batata Doce Cozida", "g", 0.76, 0.014, 0.177, 0.001, 150.0)),
        ("Pão Integral", FoodItem::new("Pão Integral", "fatia (28g)", 70.0, 3.6, 11.6, 1.0, 2.0)),
        ("Banana", FoodItem::new("Banana Prata", "unid. (100g)", 89.0, 1.1, 23.0, 0.3, 1.0)),
        ("Maçã", FoodItem::new("Maçã", "unid. (150g)", 78.0, 0.4, 21.0, 0.3, 1.0)),
        ("Tapioca", FoodItem::new("Goma de Tapioca", "g", 2.4, 0.0, 0.6, 0.0, 60.0)),
        // Fats, vegetables and others
        ("Azeite de Oliva", FoodItem::new("Azeite de Oliva", "fio (5g)", 44.0, 0.0, 0.0, 5.0, 1.0)),
        ("Castanha do Pará", FoodItem::new("Castanha do Pará", "unid. (5g)", 33.0, 0.7, 0.6, 3.3, 2.0)),
        ("Salada Verde", FoodItem::new("Salada Verde (Variada)", "prato", 20.0, 1.5, 3.0, 0.2, 1.0)),
        ("Legumes Cozidos", FoodItem::new("Mix de Legumes", "pires (100g)", 60.0, 2.5, 10.0, 0.2, 1.0)),
    ];

    foods
        .into_iter()
        .map(|(key, food)| (key.to_string(), food))
        .collect()
});

/// Base menu of roughly 1400 kcal before scaling.
pub static TEMPLATE_MENU: LazyLock<Vec<MenuEntry>> = LazyLock::new(|| {
    vec![
        MenuEntry::new(MealSlot::Breakfast, "Ovo", 2.0),
        MenuEntry::new(MealSlot::Breakfast, "Aveia", 3.0),
        MenuEntry::new(MealSlot::Breakfast, "Banana", 1.0),
        MenuEntry::new(MealSlot::Lunch, "Arroz Integral", 4.0),
        MenuEntry::new(MealSlot::Lunch, "Frango Grelhado", 150.0),
        MenuEntry::new(MealSlot::Lunch, "Salada Verde", 1.0),
        MenuEntry::new(MealSlot::Lunch, "Legumes Cozidos", 1.0),
        MenuEntry::new(MealSlot::Lunch, "Azeite de Oliva", 1.0),
        MenuEntry::new(MealSlot::Snack, "Iogurte Natural", 1.0),
        MenuEntry::new(MealSlot::Snack, "Maçã", 1.0),
        MenuEntry::new(MealSlot::Dinner, "Peixe Grelhado", 150.0),
        MenuEntry::new(MealSlot::Dinner, "Legumes Cozidos", 1.0),
        MenuEntry::new(MealSlot::Dinner, "Azeite de Oliva", 1.0),
    ]
});

// ─────────────────────────────────────────────────────────────────────────────
// Workout program
// ─────────────────────────────────────────────────────────────────────────────

pub const WORKOUT_KIND: &str = "Treino em Casa (Peso do Corpo)";
pub const WORKOUT_FOCUS: &str = "Mobilidade, Resistência e Calistenia Básica";
pub const FREQUENCY_SEDENTARY: &str = "3x semana";
pub const FREQUENCY_ACTIVE: &str = "5x semana";
pub const CARDIO_DEFAULT: &str = "Polichinelos, Marcha estacionária ou Dança";
pub const CARDIO_HYPERTENSIVE: &str = "Caminhada leve no local (sem picos de intensidade).";

pub const PLANK_NAME_FRAGMENT: &str = "Prancha";
pub const BREATHING_CAUTION: &str = "Não prenda a respiração.";
pub const PLANK_CAUTION: &str = "Evite apnéia.";

/// Five-exercise body-weight program every approved profile starts from.
pub static BASE_PROGRAM: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        Exercise::new("Agachamento Livre", "3", "12-15", "Mantenha a postura ereta."),
        Exercise::new("Flexão de Braço (ou Joelhos)", "3", "8-12", "Contraia o abdômen."),
        Exercise::new("Abdominal Supra", "3", "15-20", "Movimento curto e controlado."),
        Exercise::new("Prancha Isométrica", "3", "20-30s", "Corpo alinhado."),
        Exercise::new("Afundo (Passada)", "3", "10 cada", "Cuidado com o equilíbrio."),
    ]
});

/// Extra conditioning exercise for young, normotensive profiles.
pub static YOUNG_ADULT_EXTRA: LazyLock<Exercise> = LazyLock::new(|| {
    Exercise::new("Burpees (Adaptado)", "3", "8-10", "Para condicionamento.")
});

// ─────────────────────────────────────────────────────────────────────────────
// Fixed texts
// ─────────────────────────────────────────────────────────────────────────────

pub const MINOR_JUSTIFICATION: [&str; 2] = [
    "Este aplicativo é exclusivo para maiores de 18 anos.",
    "O desenvolvimento fisiológico nesta fase requer acompanhamento presencial especializado.",
];

pub const CARDIAC_JUSTIFICATION: [&str; 2] = [
    "Condição cardiovascular detectada. Exercícios físicos suspensos.",
    "Necessária liberação médica por cardiologista.",
];

pub const ELDERLY_JUSTIFICATION: [&str; 2] = [
    "Idade acima de 70 anos. Protocolo de segurança ativado.",
    "Exercícios não gerados. Recomendamos avaliação geriátrica.",
];

pub const APPROVED_JUSTIFICATION: &str = "Perfil apto para plano completo.";

pub const CARDIAC_WORKOUT_REASON: &str = "Risco cardíaco. Necessária liberação médica.";
pub const ELDERLY_WORKOUT_REASON: &str = "Protocolo sênior: Avaliação presencial recomendada.";

pub const DIET_DATA_DISCLAIMER: &str = "Os valores nutricionais apresentados são estimativas calculadas com base na base de dados USDA, podendo variar conforme preparo e porção.";
pub const DIET_EDUCATIONAL_DISCLAIMER: &str = "O app tem caráter informativo e educacional.";
pub const DIET_DIABETIC_WARNING: &str = "Atenção rigorosa aos carboidratos.";
pub const DIET_HYPERTENSIVE_WARNING: &str = "Controle severo de sódio.";
pub const DIET_HYDRATION_WARNING: &str = "Hidratação constante.";
pub const DIET_GLUTEN_REVERTED_WARNING: &str = "Substituição sem glúten revertida por controle glicêmico: prefira aveia certificada sem glúten.";

pub const WORKOUT_PROFESSIONAL_WARNING: &str =
    "Consulte um profissional de educação física antes de iniciar.";
pub const WORKOUT_LIMITS_WARNING: &str = "Respeite seus limites e pare se sentir dor.";
pub const WORKOUT_POSTURE_WARNING: &str = "Mantenha a postura correta em todos os exercícios.";
pub const WORKOUT_VALSALVA_WARNING: &str = "Evite prender a respiração (manobra de Valsalva).";
