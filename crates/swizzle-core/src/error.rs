//! Swizzle error types.

use thiserror::Error;

/// Errors produced when building or checking a swizzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwizzleError {
    /// The selector names more components than a vector has.
    #[error("swizzle `{selector}` has {len} components, at most 4 are allowed")]
    TooLong { selector: String, len: usize },
    /// A selector character is not one of `x`, `y`, `z`, `w`.
    #[error("invalid component `{found}` at position {position} in swizzle `{selector}`")]
    InvalidComponent {
        selector: String,
        found: char,
        position: usize,
    },
    /// The swizzle reads a component the source vector does not have.
    #[error("swizzle `{swizzle}` needs a vector of at least {required} components, source has {available}")]
    SourceTooSmall {
        swizzle: String,
        required: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, SwizzleError>;
