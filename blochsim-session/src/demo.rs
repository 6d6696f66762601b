//! The scripted demo sequence
//!
//! A fixed tour across the sphere: H onto the equator, a quarter turn of
//! phase, a bit flip, a half rotation about Y, and a final phase flip. The
//! session applies these with the same mechanics as interactive commands but
//! never logs them into the history.

use blochsim_gates::{FixedGate, RotationGate};
use std::f64::consts::{FRAC_PI_2, PI};

/// One step of the demo sequence
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DemoStep {
    /// Apply a fixed gate
    Gate(FixedGate),
    /// Apply a rotation by the given angle in radians
    Rotation(RotationGate, f64),
}

/// The demo script, executed in order
pub const DEMO_SEQUENCE: [DemoStep; 5] = [
    DemoStep::Gate(FixedGate::H),
    DemoStep::Rotation(RotationGate::Rz, FRAC_PI_2),
    DemoStep::Gate(FixedGate::X),
    DemoStep::Rotation(RotationGate::Ry, PI),
    DemoStep::Gate(FixedGate::Z),
];
