//! Result type alias for configuration mutation operations

use crate::error::HintrcError;

/// Standard Result type for `.hintrc` mutation operations
pub type Result<T> = std::result::Result<T, HintrcError>;
