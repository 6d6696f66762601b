//! Constant gate matrices and rotation generators
//!
//! All matrices are 2×2, row-major, and unitary by construction. The
//! catalog is trusted internally; unitarity is not re-verified at runtime
//! (gate application still renormalizes the state it produces).

use num_complex::Complex64;

/// A 2×2 complex matrix in row-major order
pub type Matrix2 = [[Complex64; 2]; 2];

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Identity gate matrix
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Rotation about the X axis by `angle` radians
/// Rx(a) = [[cos(a/2), -i·sin(a/2)],
///          [-i·sin(a/2), cos(a/2)]]
pub fn rotation_x(angle: f64) -> Matrix2 {
    let half = angle / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(0.0, -sin)],
        [Complex64::new(0.0, -sin), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Y axis by `angle` radians
/// Ry(a) = [[cos(a/2), -sin(a/2)],
///          [sin(a/2),  cos(a/2)]]
pub fn rotation_y(angle: f64) -> Matrix2 {
    let half = angle / 2.0;
    let (sin, cos) = half.sin_cos();
    [
        [Complex64::new(cos, 0.0), Complex64::new(-sin, 0.0)],
        [Complex64::new(sin, 0.0), Complex64::new(cos, 0.0)],
    ]
}

/// Rotation about the Z axis by `angle` radians
/// Rz(a) = [[e^(-ia/2), 0],
///          [0, e^(ia/2)]]
pub fn rotation_z(angle: f64) -> Matrix2 {
    let half = angle / 2.0;
    [
        [Complex64::from_polar(1.0, -half), ZERO],
        [ZERO, Complex64::from_polar(1.0, half)],
    ]
}
