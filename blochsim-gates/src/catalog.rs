//! The enumerated gate catalog
//!
//! Gates come in two flavors: fixed gates with a constant matrix
//! ([`FixedGate`]) and rotation generators that produce a matrix from an
//! angle in radians ([`RotationGate`]). Dispatch is a single exhaustive
//! match per catalog rather than a table of boxed functions, so adding a
//! gate is a compile-time event.
//!
//! Lookup by name comes in two strengths: [`FixedGate::from_name`] returns
//! `Option` for the command layer (which treats unknown names as no-ops),
//! and `FromStr` returns a proper error for callers that want to validate
//! names up front.

use crate::matrices::{self, Matrix2};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A gate name that matches neither catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gate name '{0}'")]
pub struct UnknownGateError(pub String);

/// Fixed single-qubit gates with constant matrices
///
/// # Example
/// ```
/// use blochsim_gates::FixedGate;
///
/// assert_eq!(FixedGate::from_name("H"), Some(FixedGate::H));
/// assert_eq!(FixedGate::H.display_name(), "Hadamard");
/// assert_eq!(FixedGate::from_name("CNOT"), None);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FixedGate {
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
}

impl FixedGate {
    /// Every fixed gate, in catalog order
    pub const ALL: [FixedGate; 4] = [FixedGate::X, FixedGate::Y, FixedGate::Z, FixedGate::H];

    /// Short catalog name, as used in commands and history entries
    pub const fn name(self) -> &'static str {
        match self {
            FixedGate::X => "X",
            FixedGate::Y => "Y",
            FixedGate::Z => "Z",
            FixedGate::H => "H",
        }
    }

    /// Friendly label for presentation
    pub const fn display_name(self) -> &'static str {
        match self {
            FixedGate::X => "Pauli-X",
            FixedGate::Y => "Pauli-Y",
            FixedGate::Z => "Pauli-Z",
            FixedGate::H => "Hadamard",
        }
    }

    /// Look up a gate by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gate| gate.name() == name)
    }

    /// The gate's unitary matrix
    pub const fn matrix(self) -> Matrix2 {
        match self {
            FixedGate::X => matrices::PAULI_X,
            FixedGate::Y => matrices::PAULI_Y,
            FixedGate::Z => matrices::PAULI_Z,
            FixedGate::H => matrices::HADAMARD,
        }
    }
}

impl fmt::Display for FixedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FixedGate {
    type Err = UnknownGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownGateError(s.to_string()))
    }
}

/// Rotation generators: pure functions from an angle to a matrix
///
/// # Example
/// ```
/// use blochsim_gates::RotationGate;
///
/// let matrix = RotationGate::Ry.matrix(std::f64::consts::PI);
/// assert!(matrix[0][0].re.abs() < 1e-12); // cos(π/2) = 0
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RotationGate {
    /// Rotation about the X axis
    Rx,
    /// Rotation about the Y axis
    Ry,
    /// Rotation about the Z axis
    Rz,
}

impl RotationGate {
    /// Every rotation generator, in catalog order
    pub const ALL: [RotationGate; 3] = [RotationGate::Rx, RotationGate::Ry, RotationGate::Rz];

    /// Short catalog name, as used in commands and history entries
    pub const fn name(self) -> &'static str {
        match self {
            RotationGate::Rx => "Rx",
            RotationGate::Ry => "Ry",
            RotationGate::Rz => "Rz",
        }
    }

    /// Friendly label for presentation
    pub const fn display_name(self) -> &'static str {
        match self {
            RotationGate::Rx => "Rotation X",
            RotationGate::Ry => "Rotation Y",
            RotationGate::Rz => "Rotation Z",
        }
    }

    /// Look up a generator by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gate| gate.name() == name)
    }

    /// Build the rotation matrix for `angle` radians
    pub fn matrix(self, angle: f64) -> Matrix2 {
        match self {
            RotationGate::Rx => matrices::rotation_x(angle),
            RotationGate::Ry => matrices::rotation_y(angle),
            RotationGate::Rz => matrices::rotation_z(angle),
        }
    }
}

impl fmt::Display for RotationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotationGate {
    type Err = UnknownGateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownGateError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_gate_name_roundtrip() {
        for gate in FixedGate::ALL {
            assert_eq!(FixedGate::from_name(gate.name()), Some(gate));
        }
    }

    #[test]
    fn test_rotation_gate_name_roundtrip() {
        for gate in RotationGate::ALL {
            assert_eq!(RotationGate::from_name(gate.name()), Some(gate));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(FixedGate::from_name("Q"), None);
        assert_eq!(RotationGate::from_name("Rw"), None);
        // Lookups are case-sensitive
        assert_eq!(FixedGate::from_name("h"), None);
    }

    #[test]
    fn test_strict_parse_error() {
        let err = "SWAP".parse::<FixedGate>().unwrap_err();
        assert_eq!(err, UnknownGateError("SWAP".to_string()));
        assert!(format!("{}", err).contains("SWAP"));

        assert!("Rz".parse::<RotationGate>().is_ok());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FixedGate::X.display_name(), "Pauli-X");
        assert_eq!(FixedGate::Y.display_name(), "Pauli-Y");
        assert_eq!(FixedGate::Z.display_name(), "Pauli-Z");
        assert_eq!(FixedGate::H.display_name(), "Hadamard");
        assert_eq!(RotationGate::Rx.display_name(), "Rotation X");
        assert_eq!(RotationGate::Ry.display_name(), "Rotation Y");
        assert_eq!(RotationGate::Rz.display_name(), "Rotation Z");
    }
}
