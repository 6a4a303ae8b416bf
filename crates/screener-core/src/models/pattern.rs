use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Outcome of one symptom-cluster rule.
///
/// `message`, `urgent` and `dsm_differential` are only populated when the
/// rule fired; a ruled-out entry carries just its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatternResult {
    pub name: String,
    pub detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub urgent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dsm_differential: Option<String>,
}

impl PatternResult {
    pub fn ruled_out(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detected: false,
            message: None,
            urgent: None,
            dsm_differential: None,
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.urgent.unwrap_or(false)
    }
}
