//! Qubit state amplitudes and the angle ↔ amplitude codec
//!
//! A state is the pair (α, β) in |ψ⟩ = α|0⟩ + β|1⟩ with the unit-norm
//! invariant |α|² + |β|² = 1. Every state-producing operation routes through
//! [`QubitState::normalized`], the single enforcement point for that
//! invariant: it renormalizes drifted amplitudes and snaps a degenerate
//! zero-norm pair back to the ground state instead of dividing by zero.

use crate::angles::BlochAngles;
use num_complex::Complex64;
use std::f64::consts::TAU;
use std::fmt;

/// A pure single-qubit state |ψ⟩ = α|0⟩ + β|1⟩
///
/// # Example
/// ```
/// use blochsim_core::{BlochAngles, QubitState};
/// use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
///
/// let state = QubitState::from_angles(BlochAngles::new(FRAC_PI_2, 0.0));
/// assert!((state.alpha.re - FRAC_1_SQRT_2).abs() < 1e-12);
/// assert!((state.beta.re - FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QubitState {
    /// Amplitude of the |0⟩ basis state
    pub alpha: Complex64,
    /// Amplitude of the |1⟩ basis state
    pub beta: Complex64,
}

impl QubitState {
    /// Create a state from raw amplitudes (not renormalized)
    #[inline]
    pub const fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// The canonical ground state |0⟩
    #[inline]
    pub const fn ground() -> Self {
        Self {
            alpha: Complex64::new(1.0, 0.0),
            beta: Complex64::new(0.0, 0.0),
        }
    }

    /// Decode Bloch angles into amplitudes
    ///
    /// Uses the convention |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩, so α is
    /// always real and the relative phase lives entirely on β.
    pub fn from_angles(angles: BlochAngles) -> Self {
        let half = angles.theta / 2.0;
        Self {
            alpha: Complex64::new(half.cos(), 0.0),
            beta: Complex64::from_polar(half.sin(), angles.phi),
        }
        .normalized()
    }

    /// Encode amplitudes back into Bloch angles
    ///
    /// The input is normalized first. θ = 2·acos(|α|) with |α| clamped into
    /// acos's domain to absorb floating-point overshoot; φ is the relative
    /// phase arg(β) − arg(α), wrapped into [0, 2π).
    ///
    /// At the poles (θ near 0 or π) φ is physically unobservable; the value
    /// returned there is whatever the formula yields, deterministically, and
    /// callers must not rely on it being stable across round-trips at
    /// machine precision.
    pub fn to_angles(&self) -> BlochAngles {
        let n = self.normalized();
        let theta = 2.0 * n.alpha.norm().clamp(-1.0, 1.0).acos();
        let phi = (n.beta.arg() - n.alpha.arg()).rem_euclid(TAU);
        BlochAngles::new(theta, phi)
    }

    /// Euclidean norm of the amplitude pair, 1.0 for valid states
    #[inline]
    pub fn norm(&self) -> f64 {
        self.alpha.norm().hypot(self.beta.norm())
    }

    /// Rescale onto the unit sphere
    ///
    /// A pair with exactly zero norm has no direction to rescale; it is
    /// replaced by the ground state rather than letting NaN propagate.
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return Self::ground();
        }
        Self {
            alpha: self.alpha / norm,
            beta: self.beta / norm,
        }
    }

    /// Measurement probabilities (|α|², |β|²) for the |0⟩ and |1⟩ outcomes
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::ground()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::display::format_state(self))
    }
}
