//! Mutation operations over a `.hintrc` document
//!
//! The merge logic is pure: [`apply`] edits an in-memory [`UserConfig`] and
//! can be exercised without a filesystem. The async entry points wrap it in
//! a whole-document load/modify/save cycle through [`ConfigStore`]. Within
//! one operation, load completes before the mutation and the mutation before
//! the save; across operations there is no ordering guarantee (last save
//! wins).

use std::path::Path;

use serde_json::Value;

use crate::entry::{HintEntry, IGNORE_KEY, OFF, ignore_block};
use crate::result::Result;
use crate::store::{ConfigStore, hintrc_path};
use crate::user_config::UserConfig;

/// One in-memory edit of a [`UserConfig`] document.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRequest {
    /// Disable a hint entirely, overwriting any prior entry.
    TurnHintOff { hint_name: String },
    /// Append a problem identifier to a hint's ignore list.
    IgnoreProblem {
        hint_name: String,
        problem_id: String,
    },
}

/// Apply `request` to an in-memory document.
///
/// The only possible failure is an unsupported `hints` shape. An empty hint
/// name on the turn-off path is a silent no-op; the ignore path assumes
/// valid non-empty identifiers.
pub fn apply(config: &mut UserConfig, request: &MutationRequest) -> Result<()> {
    match request {
        MutationRequest::TurnHintOff { hint_name } => {
            if hint_name.is_empty() {
                return Ok(());
            }
            let hints = config.hints_mut()?;
            hints.insert(hint_name.clone(), Value::String(OFF.to_owned()));
        }
        MutationRequest::IgnoreProblem {
            hint_name,
            problem_id,
        } => {
            let hints = config.hints_mut()?;
            let existing = hints.get(hint_name).and_then(HintEntry::from_value);
            let next = next_entry_for_ignore(existing, problem_id);
            hints.insert(hint_name.clone(), next.into_value());
        }
    }

    Ok(())
}

/// Compute the replacement entry for a hint once `problem_id` must be
/// ignored.
///
/// Total over the three entry shapes plus the absent case. Callers cannot
/// distinguish a merged result from a rebuilt one: when an existing entry
/// carries no ignore block, the whole entry is replaced by a fresh default
/// pair and its other option blocks are dropped.
fn next_entry_for_ignore(existing: Option<HintEntry>, problem_id: &str) -> HintEntry {
    match existing {
        Some(HintEntry::WithOptions { severity, options }) => {
            // Index 0 of the on-disk array is always the severity, so only
            // the blocks after it are candidates. First match wins.
            for i in 0..options.len() {
                let Some(ignored) = ignore_list(&options[i]) else {
                    continue;
                };
                let mut ignored = ignored.clone();
                ignored.push(Value::String(problem_id.to_owned()));
                // The element immediately preceding the matched block is
                // kept as the severity: configs may carry several option
                // blocks, each associated with the value before it.
                let severity = if i == 0 {
                    severity
                } else {
                    options[i - 1].clone()
                };
                return HintEntry::WithOptions {
                    severity,
                    options: vec![ignore_block(ignored)],
                };
            }
            HintEntry::default_ignoring(problem_id)
        }
        Some(HintEntry::Severity(severity)) => HintEntry::WithOptions {
            severity: Value::String(severity),
            options: vec![ignore_block(vec![Value::String(problem_id.to_owned())])],
        },
        // "off" carries no severity worth keeping; re-enable at default.
        Some(HintEntry::Off) | None => HintEntry::default_ignoring(problem_id),
    }
}

/// First `ignore` sequence inside an option block, if any.
fn ignore_list(option: &Value) -> Option<&Vec<Value>> {
    match option.get(IGNORE_KEY) {
        Some(Value::Array(list)) => Some(list),
        _ => None,
    }
}

/// Disable `hint_name` in the configuration at `config_path`.
///
/// An empty hint name skips the operation entirely, including the creation
/// of a default config file for a path that has none yet.
pub async fn turn_hint_off(hint_name: &str, config_path: &Path) -> Result<()> {
    if hint_name.is_empty() {
        tracing::debug!("no hint name given, skipping turn-off");
        return Ok(());
    }

    let mut config = ConfigStore::load(config_path).await?;
    apply(
        &mut config,
        &MutationRequest::TurnHintOff {
            hint_name: hint_name.to_owned(),
        },
    )?;
    ConfigStore::save(config_path, &config).await
}

/// Append `problem_id` to the ignore list of `hint_name` in the
/// configuration at `config_path`, creating the entry when absent.
pub async fn ignore_problem(hint_name: &str, problem_id: &str, config_path: &Path) -> Result<()> {
    let mut config = ConfigStore::load(config_path).await?;
    apply(
        &mut config,
        &MutationRequest::IgnoreProblem {
            hint_name: hint_name.to_owned(),
            problem_id: problem_id.to_owned(),
        },
    )?;
    ConfigStore::save(config_path, &config).await
}

/// Variant of [`turn_hint_off`] addressed by directory (project root or
/// global storage) rather than by config file path.
pub async fn turn_hint_off_in_dir(hint_name: &str, directory: &Path) -> Result<()> {
    turn_hint_off(hint_name, &hintrc_path(directory)).await
}

/// Variant of [`ignore_problem`] addressed by directory rather than by
/// config file path.
pub async fn ignore_problem_in_dir(
    hint_name: &str,
    problem_id: &str,
    directory: &Path,
) -> Result<()> {
    ignore_problem(hint_name, problem_id, &hintrc_path(directory)).await
}
