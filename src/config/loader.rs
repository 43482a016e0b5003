use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::Profile;

/// Load engine configuration from a JSON file.
///
/// The result is validated before it is returned.
pub fn load_engine_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    config.validate()?;

    info!(path = %path.display(), order = ?config.substitution_order, "loaded engine config");
    Ok(config)
}

/// Load a completed questionnaire from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}
