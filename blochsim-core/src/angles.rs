//! Bloch-sphere coordinates for a single-qubit state
//!
//! Any pure single-qubit state can be written as
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere.
//! This module holds the spherical form ([`BlochAngles`]) and the Cartesian
//! form ([`BlochVector`]) used by presentation layers to place the state
//! arrow on a rendered sphere.

use crate::state::QubitState;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;

/// Bloch sphere angles (spherical coordinates)
///
/// # Example
/// ```
/// use blochsim_core::BlochAngles;
/// use std::f64::consts::PI;
///
/// // Wrapping: a negative azimuth lands back in [0, 2π)
/// let a = BlochAngles::new(PI / 2.0, -PI / 2.0).normalized();
/// assert!((a.phi - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π], measured from the |0⟩ pole
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochAngles {
    /// Create angles from raw values (no range adjustment)
    #[inline]
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// The canonical ground state |0⟩ at the north pole
    #[inline]
    pub const fn ground() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
        }
    }

    /// Bring the angles into canonical range
    ///
    /// θ is clamped into [0, π]; φ is wrapped with a Euclidean remainder so
    /// the result is always in [0, 2π) regardless of sign.
    pub fn normalized(self) -> Self {
        Self {
            theta: self.theta.clamp(0.0, PI),
            phi: self.phi.rem_euclid(TAU),
        }
    }

    /// Convert to Cartesian coordinates on the unit sphere
    pub fn to_vector(self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }
}

impl fmt::Display for BlochAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ={:.4}, φ={:.4}", self.theta, self.phi)
    }
}

/// A point on (or inside) the Bloch sphere in Cartesian coordinates
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert a single-qubit state to a Bloch vector
    ///
    /// Uses the Pauli expectation values:
    /// x = ⟨σ_x⟩ = 2Re(ᾱβ), y = ⟨σ_y⟩ = 2Im(ᾱβ), z = ⟨σ_z⟩ = |α|² − |β|²
    ///
    /// # Example
    /// ```
    /// use blochsim_core::{BlochVector, QubitState};
    ///
    /// // |0⟩ points to the north pole
    /// let v = BlochVector::from_state(&QubitState::ground());
    /// assert!((v.z - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_state(state: &QubitState) -> Self {
        let cross = state.alpha.conj() * state.beta;
        Self {
            x: 2.0 * cross.re,
            y: 2.0 * cross.im,
            z: state.alpha.norm_sqr() - state.beta.norm_sqr(),
        }
    }

    /// Length of the vector; 1.0 for pure states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalized_wraps_phi() {
        let a = BlochAngles::new(1.0, TAU + 0.25).normalized();
        assert_abs_diff_eq!(a.phi, 0.25, epsilon = 1e-12);

        let b = BlochAngles::new(1.0, -FRAC_PI_2).normalized();
        assert_abs_diff_eq!(b.phi, 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_clamps_theta() {
        let a = BlochAngles::new(4.0, 0.0).normalized();
        assert_abs_diff_eq!(a.theta, PI, epsilon = 1e-12);

        let b = BlochAngles::new(-1.0, 0.0).normalized();
        assert_abs_diff_eq!(b.theta, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ground_points_north() {
        let v = BlochAngles::ground().to_vector();
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_points_along_x() {
        let v = BlochAngles::new(FRAC_PI_2, 0.0).to_vector();
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_from_state_matches_angles() {
        let angles = BlochAngles::new(1.1, 2.3);
        let from_angles = angles.to_vector();
        let from_state = BlochVector::from_state(&QubitState::from_angles(angles));

        assert_abs_diff_eq!(from_angles.x, from_state.x, epsilon = 1e-10);
        assert_abs_diff_eq!(from_angles.y, from_state.y, epsilon = 1e-10);
        assert_abs_diff_eq!(from_angles.z, from_state.z, epsilon = 1e-10);
        assert_abs_diff_eq!(from_state.magnitude(), 1.0, epsilon = 1e-10);
    }
}
