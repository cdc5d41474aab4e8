//! Tagged representation of a single hint entry
//!
//! On disk a hint entry is heterogeneous: the `"off"` sentinel, a bare
//! severity string, or a positional array whose index 0 is the severity and
//! whose remaining elements are option blocks. Classification into
//! [`HintEntry`] happens in one place so the rest of the crate never has to
//! sniff raw JSON shapes, and only [`HintEntry::into_value`] knows how to
//! re-flatten an entry into the positional form the linting engine parses.

use serde_json::{Map, Value};

/// Severity sentinel that disables a hint entirely.
pub const OFF: &str = "off";

/// Severity used when building a fresh entry from scratch.
pub const DEFAULT_SEVERITY: &str = "default";

/// Key of the option block carrying suppressed problem identifiers.
pub(crate) const IGNORE_KEY: &str = "ignore";

/// A single hint entry, decoded from its legacy positional form.
#[derive(Debug, Clone, PartialEq)]
pub enum HintEntry {
    /// The literal `"off"` string; the hint is fully disabled.
    Off,
    /// A bare severity string with no extra options, e.g. `"error"`.
    Severity(String),
    /// The positional array form: a severity followed by option blocks.
    WithOptions {
        /// Index 0 of the on-disk array. Usually a severity string, but the
        /// format tolerates nested values here, so it stays raw.
        severity: Value,
        /// The on-disk elements from index 1 on.
        options: Vec<Value>,
    },
}

impl HintEntry {
    /// Classify a raw JSON value into one of the three supported shapes.
    ///
    /// Values outside the model (numbers, booleans, bare objects) return
    /// `None`; the mutation layer treats those like an absent entry.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(severity) if severity == OFF => Some(HintEntry::Off),
            Value::String(severity) => Some(HintEntry::Severity(severity.clone())),
            Value::Array(items) => {
                let severity = items
                    .first()
                    .cloned()
                    .unwrap_or_else(|| Value::String(DEFAULT_SEVERITY.to_owned()));
                Some(HintEntry::WithOptions {
                    severity,
                    options: items.iter().skip(1).cloned().collect(),
                })
            }
            _ => None,
        }
    }

    /// Flatten back into the positional form understood by the linting
    /// engine's own config loader.
    pub fn into_value(self) -> Value {
        match self {
            HintEntry::Off => Value::String(OFF.to_owned()),
            HintEntry::Severity(severity) => Value::String(severity),
            HintEntry::WithOptions { severity, options } => {
                let mut items = vec![severity];
                items.extend(options);
                Value::Array(items)
            }
        }
    }

    /// Fresh `["default", {"ignore": [problem_id]}]` entry.
    pub fn default_ignoring(problem_id: &str) -> Self {
        HintEntry::WithOptions {
            severity: Value::String(DEFAULT_SEVERITY.to_owned()),
            options: vec![ignore_block(vec![Value::String(problem_id.to_owned())])],
        }
    }
}

/// Build an `{"ignore": [...]}` option block.
pub(crate) fn ignore_block(problems: Vec<Value>) -> Value {
    let mut block = Map::new();
    block.insert(IGNORE_KEY.to_owned(), Value::Array(problems));
    Value::Object(block)
}
