//! AI configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ai::profile::{BehaviorProfile, ClassicProfile};
use crate::errors::domain::{DomainError, ValidationKind};

/// Configuration handed to an AI factory.
///
/// Standard fields are typed; anything else in the JSON is kept in `custom`
/// so individual AIs can read their own knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    /// RNG seed for deterministic behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Named behavior preset ("rival", "cautious", "reckless").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Full behavior profile; takes precedence over `preset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<BehaviorProfile>,

    /// Knobs for the classic opponent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classic: Option<ClassicProfile>,

    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Build from optional JSON. Malformed JSON yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            preset: None,
            profile: None,
            classic: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Resolved behavior profile: explicit profile, else preset, else rival.
    pub fn behavior_profile(&self) -> Result<BehaviorProfile, DomainError> {
        let profile = match (&self.profile, &self.preset) {
            (Some(profile), _) => profile.clone(),
            (None, Some(name)) => BehaviorProfile::preset(name).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidProfile,
                    format!("unknown behavior preset '{name}'"),
                )
            })?,
            (None, None) => BehaviorProfile::rival(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn classic_profile(&self) -> Result<ClassicProfile, DomainError> {
        let profile = self.classic.clone().unwrap_or_default();
        profile.validate()?;
        Ok(profile)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
