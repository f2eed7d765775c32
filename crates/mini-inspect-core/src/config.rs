#![forbid(unsafe_code)]

//! Inspector options.
//!
//! Defaults reproduce the stock page wiring: a label with id `inspect`, an
//! overlay with id `inspect-overlay`, and the label drawn 10px right and 12px
//! below the pointer. Hosts may pass a partial JSON object to override any
//! field:
//!
//! ```json
//! { "overlay_id": "hl", "on_miss": "hide" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InspectError;

/// Default id of the label node.
pub const DEFAULT_LABEL_ID: &str = "inspect";
/// Default id of the overlay node.
pub const DEFAULT_OVERLAY_ID: &str = "inspect-overlay";

/// What to do when the pointer is over no element at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Leave the overlay and label exactly as the last hit left them.
    #[default]
    Retain,
    /// Hide both nodes until the pointer is over an element again.
    Hide,
}

/// Label placement relative to the pointer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOffset {
    pub x: f64,
    pub y: f64,
}

impl Default for LabelOffset {
    fn default() -> Self {
        Self { x: 10.0, y: 12.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    pub label_id: String,
    pub overlay_id: String,
    pub label_offset: LabelOffset,
    pub on_miss: MissPolicy,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            label_id: DEFAULT_LABEL_ID.to_string(),
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            label_offset: LabelOffset::default(),
            on_miss: MissPolicy::default(),
        }
    }
}

impl InspectorConfig {
    /// Parse a (possibly partial) JSON options object.
    pub fn from_json_str(json: &str) -> Result<Self, InspectError> {
        serde_json::from_str(json).map_err(|err| InspectError::Config(err.to_string()))
    }

    #[must_use]
    pub fn with_on_miss(mut self, policy: MissPolicy) -> Self {
        self.on_miss = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        let cfg = InspectorConfig::from_json_str("{}").expect("parse");
        assert_eq!(cfg, InspectorConfig::default());
        assert_eq!(cfg.label_id, "inspect");
        assert_eq!(cfg.overlay_id, "inspect-overlay");
        assert_eq!(cfg.label_offset, LabelOffset { x: 10.0, y: 12.0 });
        assert_eq!(cfg.on_miss, MissPolicy::Retain);
    }

    #[test]
    fn partial_object_overrides_fields() {
        let cfg = InspectorConfig::from_json_str(
            r#"{"overlay_id":"hl","on_miss":"hide","label_offset":{"y":4}}"#,
        )
        .expect("parse");
        assert_eq!(cfg.overlay_id, "hl");
        assert_eq!(cfg.label_id, "inspect");
        assert_eq!(cfg.on_miss, MissPolicy::Hide);
        assert_eq!(cfg.label_offset, LabelOffset { x: 10.0, y: 4.0 });
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = InspectorConfig::from_json_str(r#"{"colour":"red"}"#).unwrap_err();
        assert!(matches!(err, InspectError::Config(_)));
    }

    #[test]
    fn bad_policy_is_rejected() {
        let err = InspectorConfig::from_json_str(r#"{"on_miss":"explode"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid inspector options"));
    }
}
