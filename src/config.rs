use serde::{Deserialize, Serialize};

use crate::engine::OverflowPolicy;
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Format template for the display text.
    pub format: String,
    /// Culture name, e.g. `"en-US"` or `"de-DE"`.
    pub locale: String,
    pub overflow: OverflowPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: "{0:C}".to_string(),
            locale: "en-US".to_string(),
            overflow: OverflowPolicy::Reject,
        }
    }
}

impl Settings {
    /// Read settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
