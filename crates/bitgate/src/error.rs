// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types shared across the crate.

use thiserror::Error;

/// Errors arising from sequence construction and positional access.
///
/// All variants are deterministic validation failures raised before any
/// state is written; nothing is retried or swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitGateError {
    /// The validation payload is not a text pattern, an integer, or a list
    /// of text/integer patterns.
    #[error("invalid validation payload: {type_name}")]
    InvalidValidation { type_name: String },

    /// More initial values were supplied than the configured size allows.
    #[error("too many initial values for size {size}: got {got}")]
    TooManyValues { size: usize, got: usize },

    /// A positional read or write landed outside `[0, size)`.
    #[error("illegal position {pos} for sequence of size {size}")]
    IllegalPosition { pos: usize, size: usize },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, BitGateError>;
