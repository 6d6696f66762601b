//! Human-readable formatting for amplitudes and states
//!
//! Interactive displays want "√2/2" rather than "0.70710678…". These
//! helpers snap an amplitude to the handful of friendly constants that
//! actually occur when driving a qubit with the standard gate set, and fall
//! back to a three-decimal rendering otherwise.

use crate::state::QubitState;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Tolerance used when snapping display values to friendly constants
///
/// This is a display concern only; the math elsewhere uses much tighter
/// tolerances.
pub const DISPLAY_EPSILON: f64 = 0.001;

/// Friendly rendering of a non-negative magnitude
fn magnitude_label(abs: f64) -> String {
    let sqrt3_half = 3.0_f64.sqrt() / 2.0;

    if abs < DISPLAY_EPSILON {
        "0".to_string()
    } else if (abs - 1.0).abs() < DISPLAY_EPSILON {
        "1".to_string()
    } else if (abs - 0.5).abs() < DISPLAY_EPSILON {
        "1/2".to_string()
    } else if (abs - FRAC_1_SQRT_2).abs() < DISPLAY_EPSILON {
        "√2/2".to_string()
    } else if (abs - sqrt3_half).abs() < DISPLAY_EPSILON {
        "√3/2".to_string()
    } else {
        format!("{:.3}", abs)
    }
}

/// Format a complex amplitude for display
///
/// Pure real and pure imaginary values use the friendly constants; mixed
/// values fall back to a parenthesized `a+bi` form.
///
/// # Example
/// ```
/// use blochsim_core::display::format_amplitude;
/// use num_complex::Complex64;
///
/// assert_eq!(format_amplitude(Complex64::new(0.7071, 0.0)), "√2/2");
/// assert_eq!(format_amplitude(Complex64::new(0.0, -1.0)), "-i");
/// ```
pub fn format_amplitude(z: Complex64) -> String {
    let re_zero = z.re.abs() < DISPLAY_EPSILON;
    let im_zero = z.im.abs() < DISPLAY_EPSILON;

    match (re_zero, im_zero) {
        (true, true) => "0".to_string(),
        (false, true) => {
            let sign = if z.re < 0.0 { "-" } else { "" };
            format!("{}{}", sign, magnitude_label(z.re.abs()))
        }
        (true, false) => {
            let sign = if z.im < 0.0 { "-" } else { "" };
            let label = magnitude_label(z.im.abs());
            if label == "1" {
                format!("{}i", sign)
            } else {
                format!("{}{}i", sign, label)
            }
        }
        (false, false) => {
            let op = if z.im < 0.0 { "-" } else { "+" };
            format!("({:.3}{}{:.3}i)", z.re, op, z.im.abs())
        }
    }
}

/// Format a full state in Dirac notation, e.g. `√2/2|0⟩ + √2/2|1⟩`
pub fn format_state(state: &QubitState) -> String {
    format!(
        "{}|0⟩ + {}|1⟩",
        format_amplitude(state.alpha),
        format_amplitude(state.beta)
    )
}
