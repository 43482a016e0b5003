mod loader;

use serde::{Deserialize, Serialize};

use crate::engine::classifier::KeywordTable;
use crate::engine::constants::{ADULT_AGE, ELDERLY_AGE};
use crate::engine::substitution::validate_order;
use crate::error::{PlanError, Result};
use crate::models::DietaryPass;

pub use loader::{load_engine_config, load_profile};

/// Tunable inputs of the rule engine.
///
/// Every field falls back to the built-in tables when absent from a loaded
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub keywords: KeywordTable,
    /// Precedence of the substitution passes; later passes win.
    pub substitution_order: Vec<DietaryPass>,
    /// Youngest accepted age.
    pub adult_age: u32,
    /// Ages strictly above this get the senior protocol.
    pub elderly_age: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordTable::default(),
            substitution_order: DietaryPass::DEFAULT_ORDER.to_vec(),
            adult_age: ADULT_AGE,
            elderly_age: ELDERLY_AGE,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.keywords.validate()?;
        validate_order(&self.substitution_order)?;
        if self.elderly_age < self.adult_age {
            return Err(PlanError::Configuration(format!(
                "elderly age {} is below adult age {}",
                self.elderly_age, self.adult_age
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"substitutionOrder": ["vegetarian", "lactose", "diabetic", "gluten"]}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.substitution_order[3], DietaryPass::Gluten);
        assert_eq!(config.keywords, KeywordTable::default());
        assert_eq!(config.elderly_age, ELDERLY_AGE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_ages() {
        let config = EngineConfig {
            adult_age: 30,
            elderly_age: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
