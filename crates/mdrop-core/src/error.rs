//! # Error Types — Shared Foundational Errors
//!
//! Defines the errors produced by the foundational types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Domain-specific errors (Merkle construction, claim settlement) live in
//! their own crates; this enum covers only the primitives defined here.

use thiserror::Error;

/// Errors from the foundational types in `mdrop-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An account address failed to parse or validate.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A timestamp failed to parse or fell outside the representable range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Division by zero in value arithmetic.
    #[error("division by zero in {op}")]
    DivisionByZero {
        /// The operation that attempted the division.
        op: &'static str,
    },

    /// A 256-bit arithmetic result did not fit its target width.
    #[error("arithmetic overflow in {op}")]
    Overflow {
        /// The operation that overflowed.
        op: &'static str,
    },
}
