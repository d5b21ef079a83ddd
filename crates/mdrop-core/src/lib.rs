//! # mdrop-core — Foundational Types for the mdrop Stack
//!
//! This crate is the bedrock of the mdrop distribution stack. It defines the
//! type-system primitives shared by the Merkle commitment engine and the
//! distributor state machine. Every other crate in the workspace depends on
//! `mdrop-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address` and `Timestamp`
//!    are newtypes with validated constructors. No bare byte arrays or raw
//!    integers for identifiers and instants.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. Distribution windows are wall-clock intervals;
//!    sub-second drift and timezone offsets have no business meaning here
//!    and are truncated or rejected at construction.
//!
//! 3. **Integer-exact arithmetic.** All value math is `U256` with explicit
//!    overflow handling. `mul_div()` widens through `U512` so that
//!    `a * b / d` never overflows the intermediate product. No floats.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mdrop-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod amount;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use amount::mul_div;
pub use error::CoreError;
pub use identity::Address;
pub use primitive_types::U256;
pub use temporal::Timestamp;
