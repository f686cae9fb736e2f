//! Sloppiness setting as read from config files and the environment.

use crate::{format_sloppiness, parse_sloppiness, Sloppiness, SloppinessError};
use serde::{Deserialize, Serialize};

/// Environment variable that adds sloppiness on top of the config file.
pub const SLOPPINESS_ENV: &str = "CCACHE_SLOPPINESS";

/// The `sloppiness` key accepts either a name list or an array of names.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SloppinessValue {
    List(String),
    Names(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    sloppiness: Option<SloppinessValue>,
}

#[derive(Debug, Serialize)]
struct RawConfigOut {
    sloppiness: String,
}

/// The sloppiness part of a cache configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SloppinessConfig {
    pub sloppiness: Sloppiness,
}

impl SloppinessConfig {
    /// Read the `sloppiness` key of a TOML document.
    ///
    /// Other keys are ignored. A missing key gives the empty set.
    pub fn from_toml_str(input: &str) -> Result<Self, SloppinessError> {
        let raw: RawConfig = toml::from_str(input)?;
        let sloppiness = match raw.sloppiness {
            None => Sloppiness::default(),
            Some(SloppinessValue::List(text)) => parse_sloppiness(&text),
            Some(SloppinessValue::Names(names)) => parse_sloppiness(&names.join(",")),
        };
        tracing::debug!("Loaded sloppiness from config: {}", sloppiness);
        Ok(Self { sloppiness })
    }

    /// Merge a value of [`SLOPPINESS_ENV`]. Flags are only ever added.
    pub fn apply_env_value(&mut self, value: Option<&str>) {
        if let Some(value) = value {
            let extra = parse_sloppiness(value);
            self.sloppiness.enable(extra.flags());
            tracing::debug!("Applied {}={}", SLOPPINESS_ENV, value);
        }
    }

    /// Merge [`SLOPPINESS_ENV`] from the process environment.
    pub fn apply_env(&mut self) {
        let value = std::env::var(SLOPPINESS_ENV).ok();
        self.apply_env_value(value.as_deref());
    }

    /// Write the setting back as a one-key TOML document.
    pub fn to_toml_string(&self) -> Result<String, SloppinessError> {
        let out = RawConfigOut {
            sloppiness: format_sloppiness(self.sloppiness),
        };
        Ok(toml::to_string(&out)?)
    }
}
