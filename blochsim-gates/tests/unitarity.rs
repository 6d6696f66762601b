//! Catalog-wide properties: norm preservation, involutions, identities

use approx::assert_abs_diff_eq;
use blochsim_core::{BlochAngles, QubitState};
use blochsim_gates::{apply, FixedGate, RotationGate};
use std::f64::consts::{PI, TAU};

const NORM_TOLERANCE: f64 = 1e-9;

fn sample_states() -> Vec<QubitState> {
    let mut states = Vec::new();
    for i in 0..8 {
        for j in 0..8 {
            let theta = PI * (i as f64) / 7.0;
            let phi = TAU * (j as f64) / 8.0;
            states.push(QubitState::from_angles(BlochAngles::new(theta, phi)));
        }
    }
    states
}

fn assert_states_close(a: &QubitState, b: &QubitState, epsilon: f64) {
    // Compare up to global phase via the fidelity |⟨a|b⟩|
    let overlap = (a.alpha.conj() * b.alpha + a.beta.conj() * b.beta).norm();
    assert_abs_diff_eq!(overlap, 1.0, epsilon = epsilon);
}

#[test]
fn test_every_gate_preserves_norm() {
    for state in sample_states() {
        for gate in FixedGate::ALL {
            let next = apply(&gate.matrix(), state);
            assert_abs_diff_eq!(next.norm(), 1.0, epsilon = NORM_TOLERANCE);
        }
        for gate in RotationGate::ALL {
            for angle in [0.0, 0.7, PI / 2.0, PI, 5.0] {
                let next = apply(&gate.matrix(angle), state);
                assert_abs_diff_eq!(next.norm(), 1.0, epsilon = NORM_TOLERANCE);
            }
        }
    }
}

#[test]
fn test_fixed_gates_are_involutions() {
    // X, Y, Z and H each square to the identity
    for state in sample_states() {
        for gate in FixedGate::ALL {
            let twice = apply(&gate.matrix(), apply(&gate.matrix(), state));
            assert_states_close(&twice, &state, 1e-9);
        }
    }
}

#[test]
fn test_zero_angle_rotations_leave_state_unchanged() {
    for state in sample_states() {
        for gate in RotationGate::ALL {
            let rotated = apply(&gate.matrix(0.0), state);
            assert_states_close(&rotated, &state, 1e-12);
        }
    }
}

#[test]
fn test_full_turn_returns_to_start() {
    // Rotations by 2π flip the global phase only
    for gate in RotationGate::ALL {
        let start = QubitState::from_angles(BlochAngles::new(1.0, 2.0));
        let turned = apply(&gate.matrix(TAU), start);
        assert_states_close(&turned, &start, 1e-9);
    }
}

#[test]
fn test_long_sequence_keeps_norm() {
    // Drift over many applications must be absorbed by renormalization
    let mut state = QubitState::ground();
    for i in 0..200 {
        let gate = FixedGate::ALL[i % FixedGate::ALL.len()];
        state = apply(&gate.matrix(), state);
        state = apply(&RotationGate::Rz.matrix(0.1), state);
    }
    assert_abs_diff_eq!(state.norm(), 1.0, epsilon = NORM_TOLERANCE);
}
