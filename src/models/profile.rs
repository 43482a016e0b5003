use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Biological sex used by the BMR equation and the calorie floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Masculino",
            Gender::Female => "Feminino",
        }
    }

    /// Accepted spellings (English keys and Portuguese labels).
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Gender::Male => &["male", "m", "masculino", "homem"],
            Gender::Female => &["female", "f", "feminino", "mulher"],
        }
    }
}

/// Self-reported physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::Light => "Levemente ativo",
            ActivityLevel::Moderate => "Moderadamente ativo",
            ActivityLevel::Active => "Muito ativo",
            ActivityLevel::Athlete => "Atleta",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ActivityLevel::Sedentary => &["sedentary", "sedentario", "sedentário"],
            ActivityLevel::Light => &["light", "leve", "levemente ativo"],
            ActivityLevel::Moderate => &["moderate", "moderado", "moderadamente ativo"],
            ActivityLevel::Active => &["active", "ativo", "muito ativo"],
            ActivityLevel::Athlete => &["athlete", "atleta"],
        }
    }
}

/// Body-weight goal selected in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::Lose => "Perder peso",
            Goal::Maintain => "Manter peso",
            Goal::Gain => "Ganhar massa",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Goal::Lose => &["lose", "perder", "emagrecer", "perder peso"],
            Goal::Maintain => &["maintain", "manter", "manter peso"],
            Goal::Gain => &["gain", "ganhar", "ganhar massa", "hipertrofia"],
        }
    }
}

/// Completed questionnaire handed to the engine.
///
/// `restrictions` holds allergies and dietary choices; `conditions` holds
/// health conditions. Both are raw free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    /// Body weight in kg.
    pub weight: f64,
    /// Height in cm.
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default)]
    pub conditions: String,
}

impl Profile {
    /// Upstream range check. The engine itself assumes finite, positive
    /// measurements and does not call this.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "weight must be a positive number of kg, got {}",
                self.weight
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "height must be a positive number of cm, got {}",
                self.height
            )));
        }
        if self.age > 130 {
            return Err(PlanError::InvalidInput(format!(
                "age {} is out of range",
                self.age
            )));
        }
        Ok(())
    }
}

impl Default for Profile {
    /// Defaults shown by the questionnaire before the user edits anything.
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::Female,
            weight: 70.0,
            height: 165.0,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Lose,
            restrictions: String::new(),
            conditions: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default() {
        assert!(Profile::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_measurements() {
        let mut profile = Profile::default();
        profile.height = 0.0;
        assert!(profile.validate().is_err());

        let mut profile = Profile::default();
        profile.weight = f64::NAN;
        assert!(profile.validate().is_err());

        let mut profile = Profile::default();
        profile.age = 200;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "age": 40, "gender": "male", "weight": 82.5, "height": 178,
            "activityLevel": "moderate", "goal": "gain"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Gain);
        assert!(profile.restrictions.is_empty());
    }
}
