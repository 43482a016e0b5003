use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::{HealthFlags, Profile};

/// Category a trigger phrase points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Cardiac,
    Diabetes,
    Hypertension,
    Lactose,
    Gluten,
    Vegetarian,
}

/// Questionnaire field a category is scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Conditions,
    Restrictions,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::Cardiac,
        RiskCategory::Diabetes,
        RiskCategory::Hypertension,
        RiskCategory::Lactose,
        RiskCategory::Gluten,
        RiskCategory::Vegetarian,
    ];

    pub fn field(self) -> TextField {
        match self {
            RiskCategory::Cardiac | RiskCategory::Diabetes | RiskCategory::Hypertension => {
                TextField::Conditions
            }
            RiskCategory::Lactose | RiskCategory::Gluten | RiskCategory::Vegetarian => {
                TextField::Restrictions
            }
        }
    }

    fn default_phrases(self) -> &'static [&'static str] {
        match self {
            RiskCategory::Cardiac => &[
                "cardíaca",
                "coração",
                "arritmia",
                "infarto",
                "insuficiência",
                "marca-passo",
                "marcapasso",
                "hipertensão grave",
                "pressão alta descontrolada",
                "cardiopatia",
                "ponte de safena",
                "stent",
            ],
            RiskCategory::Diabetes => &["diabete", "glicose"],
            RiskCategory::Hypertension => &["hipertens", "pressão alta"],
            RiskCategory::Lactose => &["lactose", "leite"],
            RiskCategory::Gluten => &["glúten", "gluten", "trigo"],
            RiskCategory::Vegetarian => &["carne", "vegetariano", "vegano"],
        }
    }
}

type PhraseMap = BTreeMap<RiskCategory, Vec<String>>;

/// Trigger phrases per risk category.
///
/// Matching is a case-insensitive substring test against the category's
/// source field. A loaded table only overrides the categories it names; the
/// rest keep their built-in phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PhraseMap", into = "PhraseMap")]
pub struct KeywordTable {
    phrases: PhraseMap,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let phrases = RiskCategory::ALL
            .into_iter()
            .map(|category| {
                let list = category
                    .default_phrases()
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                (category, list)
            })
            .collect();
        Self { phrases }
    }
}

impl From<PhraseMap> for KeywordTable {
    fn from(overrides: PhraseMap) -> Self {
        let mut table = KeywordTable::default();
        table.phrases.extend(overrides);
        table
    }
}

impl From<KeywordTable> for PhraseMap {
    fn from(table: KeywordTable) -> Self {
        table.phrases
    }
}

impl KeywordTable {
    pub fn phrases(&self, category: RiskCategory) -> &[String] {
        self.phrases
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace the trigger list of one category.
    pub fn set_phrases(&mut self, category: RiskCategory, phrases: Vec<String>) {
        self.phrases.insert(category, phrases);
    }

    /// Blank phrases would match every input; an empty cardiac list would
    /// approve every cardiac profile.
    pub fn validate(&self) -> Result<()> {
        if self.phrases(RiskCategory::Cardiac).is_empty() {
            return Err(PlanError::Configuration(
                "keyword category Cardiac needs at least one trigger phrase".to_string(),
            ));
        }
        for (category, phrases) in &self.phrases {
            if phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(PlanError::Configuration(format!(
                    "blank trigger phrase in keyword category {:?}",
                    category
                )));
            }
        }
        Ok(())
    }

    /// Whether `text` contains any trigger phrase of `category`.
    pub fn matches(&self, category: RiskCategory, text: &str) -> bool {
        let text = text.to_lowercase();
        self.phrases(category)
            .iter()
            .any(|phrase| text.contains(&phrase.to_lowercase()))
    }

    /// Scan the matching questionnaire field of `profile`.
    pub fn detect(&self, category: RiskCategory, profile: &Profile) -> bool {
        let text = match category.field() {
            TextField::Conditions => &profile.conditions,
            TextField::Restrictions => &profile.restrictions,
        };
        self.matches(category, text)
    }
}

/// Derive all risk and restriction flags for a profile.
///
/// `elderly_age` is exclusive: only ages strictly above it are elderly.
pub fn classify(profile: &Profile, keywords: &KeywordTable, elderly_age: u32) -> HealthFlags {
    HealthFlags {
        has_heart_condition: keywords.detect(RiskCategory::Cardiac, profile),
        is_elderly: profile.age > elderly_age,
        is_diabetic: keywords.detect(RiskCategory::Diabetes, profile),
        is_hypertensive: keywords.detect(RiskCategory::Hypertension, profile),
        has_lactose_intolerance: keywords.detect(RiskCategory::Lactose, profile),
        has_gluten_intolerance: keywords.detect(RiskCategory::Gluten, profile),
        is_vegetarian: keywords.detect(RiskCategory::Vegetarian, profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(conditions: &str, restrictions: &str) -> Profile {
        Profile {
            conditions: conditions.to_string(),
            restrictions: restrictions.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_default_table_covers_all_categories() {
        let table = KeywordTable::default();
        for category in RiskCategory::ALL {
            assert!(!table.phrases(category).is_empty());
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = KeywordTable::default();
        assert!(table.matches(RiskCategory::Cardiac, "Tenho ARRITMIA leve"));
        assert!(table.matches(RiskCategory::Hypertension, "HIPERTENSÃO"));
        assert!(!table.matches(RiskCategory::Cardiac, "nenhuma"));
    }

    #[test]
    fn test_fields_are_scanned_separately() {
        let table = KeywordTable::default();
        // "leite" in conditions must not flag lactose intolerance
        let flags = classify(&profile_with("leite", ""), &table, 70);
        assert!(!flags.has_lactose_intolerance);

        let flags = classify(&profile_with("", "leite"), &table, 70);
        assert!(flags.has_lactose_intolerance);
    }

    #[test]
    fn test_flags_combine() {
        let table = KeywordTable::default();
        let profile = profile_with("diabetes e pressão alta", "sem glúten, não como carne");
        let flags = classify(&profile, &table, 70);
        assert!(flags.is_diabetic);
        assert!(flags.is_hypertensive);
        assert!(flags.has_gluten_intolerance);
        assert!(flags.is_vegetarian);
        assert!(!flags.has_heart_condition);
        assert!(!flags.has_lactose_intolerance);
    }

    #[test]
    fn test_severe_hypertension_is_cardiac_and_hypertensive() {
        let table = KeywordTable::default();
        let flags = classify(&profile_with("hipertensão grave", ""), &table, 70);
        assert!(flags.has_heart_condition);
        assert!(flags.is_hypertensive);
    }

    #[test]
    fn test_elderly_threshold_is_exclusive() {
        let table = KeywordTable::default();
        let mut profile = Profile::default();
        profile.age = 70;
        assert!(!classify(&profile, &table, 70).is_elderly);
        profile.age = 71;
        assert!(classify(&profile, &table, 70).is_elderly);
    }

    #[test]
    fn test_custom_table() {
        let mut table = KeywordTable::default();
        table.set_phrases(RiskCategory::Cardiac, vec!["heart".to_string()]);
        assert!(table.matches(RiskCategory::Cardiac, "Heart failure"));
        assert!(!table.matches(RiskCategory::Cardiac, "arritmia"));
    }

    #[test]
    fn test_blank_phrase_rejected() {
        let mut table = KeywordTable::default();
        table.set_phrases(RiskCategory::Gluten, vec!["  ".to_string()]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_empty_cardiac_list_rejected() {
        let mut table = KeywordTable::default();
        table.set_phrases(RiskCategory::Cardiac, Vec::new());
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_json_overrides_only_named_categories() {
        let json = r#"{"diabetes": ["sugar"]}"#;
        let table: KeywordTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.phrases(RiskCategory::Diabetes), ["sugar".to_string()]);
        assert!(table.matches(RiskCategory::Cardiac, "arritmia"));
        assert!(table.matches(RiskCategory::Gluten, "trigo"));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_json_uses_category_names() {
        let table = KeywordTable::default();
        let value = serde_json::to_value(&table).unwrap();
        assert!(value["cardiac"].as_array().unwrap().len() > 1);
        assert_eq!(serde_json::from_value::<KeywordTable>(value).unwrap(), table);
    }
}
