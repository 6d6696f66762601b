//! Application of a 2×2 unitary to a qubit state

use crate::matrices::Matrix2;
use blochsim_core::QubitState;

/// Apply a unitary to a state: |ψ'⟩ = U|ψ⟩
///
/// Two complex dot products, then renormalization through the codec's
/// single enforcement point. Without the renormalization the norm drifts
/// beyond tolerance over long gate sequences.
///
/// # Example
/// ```
/// use blochsim_core::QubitState;
/// use blochsim_gates::{apply, matrices};
///
/// // X|0⟩ = |1⟩
/// let flipped = apply(&matrices::PAULI_X, QubitState::ground());
/// assert!((flipped.beta.re - 1.0).abs() < 1e-12);
/// ```
pub fn apply(matrix: &Matrix2, state: QubitState) -> QubitState {
    QubitState::new(
        matrix[0][0] * state.alpha + matrix[0][1] * state.beta,
        matrix[1][0] * state.alpha + matrix[1][1] * state.beta,
    )
    .normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices;
    use approx::assert_abs_diff_eq;
    use blochsim_core::{BlochAngles, Complex64};
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    #[test]
    fn test_hadamard_from_ground() {
        let state = apply(&matrices::HADAMARD, QubitState::ground());
        assert_abs_diff_eq!(state.alpha.re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(state.beta.re, FRAC_1_SQRT_2, epsilon = 1e-12);

        let angles = state.to_angles();
        assert_abs_diff_eq!(angles.theta, FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.phi, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_apply_renormalizes_drifted_input() {
        let drifted = QubitState::new(Complex64::new(1.0001, 0.0), Complex64::new(0.0, 0.0));
        let state = apply(&matrices::IDENTITY, drifted);
        assert_abs_diff_eq!(state.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pauli_y_from_ground() {
        // Y|0⟩ = i|1⟩
        let state = apply(&matrices::PAULI_Y, QubitState::ground());
        assert_abs_diff_eq!(state.alpha.norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.beta.im, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_z_only_moves_phase() {
        let start = QubitState::from_angles(BlochAngles::new(FRAC_PI_2, 0.3));
        let rotated = apply(&matrices::rotation_z(1.0), start);
        let angles = rotated.to_angles();
        assert_abs_diff_eq!(angles.theta, FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.phi, 1.3, epsilon = 1e-6);
    }
}
