//! The root `.hintrc` document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HintrcError;
use crate::result::Result;

/// Base configuration a freshly created document extends.
pub const DEFAULT_EXTENDS: &str = "development";

/// The root `.hintrc` document.
///
/// Only the fields the mutation engine touches are modeled. Every other
/// top-level field round-trips untouched through `rest`, so a
/// read-modify-write cycle always persists the full document even when
/// unrelated fields are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    /// Ordered names of base configurations this document extends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<Vec<String>>,

    /// Mapping from hint name to its configured entry.
    ///
    /// Kept as a raw value: a sequence-shaped `hints` collection must
    /// surface as [`HintrcError::UnsupportedShapeError`], not collapse into
    /// a generic parse failure. Use [`UserConfig::hints_mut`] to get the
    /// shape-checked mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Value>,

    /// Top-level fields the mutation engine does not interpret.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            extends: Some(vec![DEFAULT_EXTENDS.to_owned()]),
            hints: None,
            rest: Map::new(),
        }
    }
}

impl UserConfig {
    /// Check that the `hints` collection, when present, is a mapping.
    ///
    /// Merging into positional list entries is unsupported, so a document
    /// carrying `hints` as an array (or any other non-mapping value) is
    /// rejected before any mutation is attempted.
    pub fn ensure_supported(&self) -> Result<()> {
        match &self.hints {
            None | Some(Value::Object(_)) => Ok(()),
            Some(_) => Err(HintrcError::unsupported_shape(
                "cannot alter a hints collection that is not written as a mapping",
            )),
        }
    }

    /// Immutable view of the hints mapping, if present and well-shaped.
    pub fn hints(&self) -> Option<&Map<String, Value>> {
        self.hints.as_ref().and_then(Value::as_object)
    }

    /// Mutable hints mapping, created empty when absent.
    pub fn hints_mut(&mut self) -> Result<&mut Map<String, Value>> {
        if self.hints.is_none() {
            self.hints = Some(Value::Object(Map::new()));
        }
        match self.hints.as_mut() {
            Some(Value::Object(map)) => Ok(map),
            _ => Err(HintrcError::unsupported_shape(
                "cannot alter a hints collection that is not written as a mapping",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_default_document_serialization() {
        let config = UserConfig::default();
        let serialized = serde_json::to_value(&config).unwrap();
        assert_eq!(serialized, json!({ "extends": ["development"] }));
    }

    #[test]
    fn test_unrelated_fields_round_trip() {
        let raw = json!({
            "extends": ["web-recommended"],
            "connector": { "name": "puppeteer" },
            "browserslist": ["> 0.5%", "last 2 versions"],
            "hints": { "compat-api/html": "error" }
        });

        let config: UserConfig = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(config.rest.len(), 2);
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn test_ensure_supported_accepts_absent_and_mapping() {
        let config: UserConfig = serde_json::from_value(json!({})).unwrap();
        assert!(config.ensure_supported().is_ok());

        let config: UserConfig =
            serde_json::from_value(json!({ "hints": { "a": "off" } })).unwrap();
        assert!(config.ensure_supported().is_ok());
    }

    #[test]
    fn test_ensure_supported_rejects_array_hints() {
        let config: UserConfig =
            serde_json::from_value(json!({ "hints": ["compat-api/css"] })).unwrap();
        let err = config.ensure_supported().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
    }

    #[test]
    fn test_hints_mut_creates_empty_mapping() {
        let mut config: UserConfig = serde_json::from_value(json!({})).unwrap();
        config.hints_mut().unwrap().insert("a".to_owned(), json!("off"));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "hints": { "a": "off" } })
        );
    }

    #[test]
    fn test_hints_mut_rejects_array_hints() {
        let mut config: UserConfig =
            serde_json::from_value(json!({ "hints": [] })).unwrap();
        let err = config.hints_mut().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
    }
}
