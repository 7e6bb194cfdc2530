//! Editor options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while reading an option bag.
pub enum OptionsError {
    #[error("YAML parse error: {0}")]
    /// The options were not valid YAML or had a wrongly typed field.
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    /// The options were not valid JSON or had a wrongly typed field.
    Json(#[from] serde_json::Error),
}

/// Options for [`create_editor_state`](crate::create_editor_state).
///
/// Missing fields take their defaults and unknown fields are ignored, so any option bag a host
/// already has can be passed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Use the dark One Dark theme.
    pub one_dark: bool,
}

impl EditorOptions {
    /// Set [`EditorOptions::one_dark`].
    pub fn with_one_dark(mut self, one_dark: bool) -> Self {
        self.one_dark = one_dark;
        self
    }

    /// Read options from YAML. Empty input yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, OptionsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}
