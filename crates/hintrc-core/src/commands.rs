//! Command identifiers surfaced to the editor layer
//!
//! Boundary constants only: the editor integration registers these with its
//! protocol server and dispatches back into the operations in
//! [`crate::mutate`]. The `-project` variants target the `.hintrc` in the
//! workspace root, the `-global` variants the one in the editor's global
//! storage directory.

/// Disable a hint in the project configuration.
pub const IGNORE_HINT_PROJECT: &str = "ignore-hint-project";

/// Disable a hint in the global configuration.
pub const IGNORE_HINT_GLOBAL: &str = "ignore-hint-global";

/// Suppress a single problem in the project configuration.
pub const IGNORE_PROBLEM_PROJECT: &str = "ignore-problem-project";

/// Suppress a single problem in the global configuration.
pub const IGNORE_PROBLEM_GLOBAL: &str = "ignore-problem-global";

/// Open the project configuration in the editor.
pub const EDIT_CONFIG_PROJECT: &str = "edit-config-project";

/// Open the global configuration in the editor.
pub const EDIT_CONFIG_GLOBAL: &str = "edit-config-global";

/// Every command the editor layer should register, in registration order.
pub const ALL: [&str; 6] = [
    IGNORE_HINT_PROJECT,
    IGNORE_HINT_GLOBAL,
    IGNORE_PROBLEM_PROJECT,
    IGNORE_PROBLEM_GLOBAL,
    EDIT_CONFIG_PROJECT,
    EDIT_CONFIG_GLOBAL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_list_is_complete_and_unique() {
        assert_eq!(ALL.len(), 6);
        for (i, command) in ALL.iter().enumerate() {
            assert!(!ALL[i + 1..].contains(command));
        }
    }
}
