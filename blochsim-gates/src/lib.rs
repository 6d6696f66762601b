//! Single-qubit gate catalog and application for the blochsim engine
//!
//! This crate holds the operator side of the engine:
//! - [`matrices`]: constant 2×2 unitaries and rotation generators
//! - [`FixedGate`] / [`RotationGate`]: the enumerated catalog with names,
//!   display labels and matrix lookup
//! - [`apply`]: application of a 2×2 unitary to a [`QubitState`] with
//!   defensive renormalization
//!
//! # Example
//! ```
//! use blochsim_core::QubitState;
//! use blochsim_gates::{apply, FixedGate};
//!
//! // H|0⟩ = |+⟩
//! let plus = apply(&FixedGate::H.matrix(), QubitState::ground());
//! let (p0, p1) = plus.probabilities();
//! assert!((p0 - 0.5).abs() < 1e-12);
//! assert!((p1 - 0.5).abs() < 1e-12);
//! ```

pub mod apply;
pub mod catalog;
pub mod matrices;

// Re-exports for convenience
pub use apply::apply;
pub use catalog::{FixedGate, RotationGate, UnknownGateError};
pub use matrices::Matrix2;

pub use blochsim_core::QubitState;
