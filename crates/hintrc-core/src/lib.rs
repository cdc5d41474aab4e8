//! hintrc core
//!
//! Mutation engine for `.hintrc` linter configuration files.
//!
//! The linting engine is configured through a JSON document conventionally
//! named `.hintrc`, kept either in a project root or in an editor's global
//! storage directory. Editor integrations let a user suppress findings
//! straight from a code action; this crate performs the configuration
//! rewrite on their behalf:
//!
//! - [`turn_hint_off`] disables a hint entirely
//! - [`ignore_problem`] appends a problem identifier to a hint's ignore list
//!
//! ## Configuration shape
//!
//! ```jsonc
//! {
//!   "extends": ["development"],
//!   "hints": {
//!     // fully disabled
//!     "no-inline-styles": "off",
//!     // bare severity
//!     "compat-api/html": "error",
//!     // severity plus option blocks; the "ignore" block lists suppressed
//!     // problem identifiers
//!     "compat-api/css": ["default", { "ignore": ["color-adjust"] }]
//!   }
//! }
//! ```
//!
//! A hint entry is one of three shapes: the `"off"` sentinel, a bare
//! severity string, or a positional array carrying a severity at index 0
//! followed by option blocks. [`HintEntry`] models the three shapes as an
//! explicit variant so the merge logic never sniffs raw JSON; only its
//! conversion boundary knows the positional on-disk form.
//!
//! ## Operation model
//!
//! Every operation is a whole-document read-modify-write: load the file
//! (creating a default one when absent), mutate the document in memory, and
//! rewrite the file. The store holds no cross-call state and takes no lock;
//! concurrent operations on the same path each work from their own snapshot
//! and the last save wins.

pub mod commands;
pub mod entry;
pub mod error;
pub mod mutate;
pub mod result;
pub mod store;
pub mod user_config;

pub use entry::HintEntry;
pub use error::{ErrorKind, HintrcError};
pub use mutate::{
    MutationRequest, apply, ignore_problem, ignore_problem_in_dir, turn_hint_off,
    turn_hint_off_in_dir,
};
pub use result::Result;
pub use store::{ConfigStore, HINTRC_FILENAME, hintrc_path};
pub use user_config::{DEFAULT_EXTENDS, UserConfig};
