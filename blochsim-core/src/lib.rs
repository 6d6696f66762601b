//! Core types for the blochsim single-qubit engine
//!
//! This crate provides the state model shared by the rest of the workspace:
//! - [`BlochAngles`]: spherical coordinates (θ, φ) on the Bloch sphere
//! - [`BlochVector`]: the same point in Cartesian coordinates
//! - [`QubitState`]: the pair of complex amplitudes (α, β) and the codec
//!   between amplitudes and angles
//! - [`display`]: human-readable formatting of amplitudes and states
//!
//! # Example
//! ```
//! use blochsim_core::{BlochAngles, QubitState};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // The |+⟩ state sits on the equator at φ = 0
//! let state = QubitState::from_angles(BlochAngles::new(FRAC_PI_2, 0.0));
//! assert!((state.alpha.re - state.beta.re).abs() < 1e-12);
//! ```

pub mod angles;
pub mod display;
pub mod state;

// Re-exports for convenience
pub use angles::{BlochAngles, BlochVector};
pub use num_complex::Complex64;
pub use state::QubitState;
