//! The session state machine
//!
//! A [`Session`] is the single writer of the engine's state. It is an
//! explicitly constructed value — no process-wide singleton — and a
//! presentation layer drives it through the command methods, reading angles,
//! amplitudes and history back after each command returns.
//!
//! Two states exist: idle (commands accepted) and demo-running (busy). While
//! busy every interactive command is rejected at entry, before any mutation;
//! the busy flag is the engine's only concurrency-control mechanism and is
//! surfaced so UIs can disable their affordances. A running demo cannot be
//! cancelled; it runs to completion.

use crate::config::SessionConfig;
use crate::demo::{DemoStep, DEMO_SEQUENCE};
use crate::history::{EntryId, HistoryEntry};
use blochsim_core::{BlochAngles, BlochVector, QubitState};
use blochsim_gates::{apply, FixedGate, Matrix2, RotationGate};
use log::{debug, trace};
use std::time::Duration;

/// Fallback when a rotation command carries unparseable degree text
const DEFAULT_ROTATION_DEGREES: f64 = 90.0;

/// An interactive single-qubit session
///
/// Owns the current Bloch angles, the gate history and the busy flag. The
/// current state exists only here: each gate application computes fresh
/// angles and discards the previous ones, and amplitudes are decoded on
/// demand rather than stored.
#[derive(Debug)]
pub struct Session {
    angles: BlochAngles,
    history: Vec<HistoryEntry>,
    next_id: u64,
    busy: bool,
    demo_cursor: usize,
    config: SessionConfig,
}

impl Session {
    /// Create an idle session at the ground state with default configuration
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with explicit configuration
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            angles: BlochAngles::ground(),
            history: Vec::new(),
            next_id: 0,
            busy: false,
            demo_cursor: 0,
            config,
        }
    }

    /// Current Bloch angles
    #[inline]
    pub fn angles(&self) -> BlochAngles {
        self.angles
    }

    /// Current amplitudes, decoded on demand from the angles
    pub fn state(&self) -> QubitState {
        QubitState::from_angles(self.angles)
    }

    /// Current position on the rendered sphere
    pub fn bloch_vector(&self) -> BlochVector {
        self.angles.to_vector()
    }

    /// The ordered history of interactively applied gates
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether a demo run is in progress
    ///
    /// While true, every interactive command is a silent no-op.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Apply a fixed gate by catalog name
    ///
    /// Unknown names are silent no-ops; the calling boundary is expected to
    /// only pass catalog keys, and strict callers can pre-check with
    /// [`FixedGate::from_name`].
    pub fn apply_named_gate(&mut self, name: &str) {
        if self.busy {
            return;
        }
        let Some(gate) = FixedGate::from_name(name) else {
            return;
        };
        debug!("applying gate {}", gate);
        self.transform(&gate.matrix());
        self.record(gate.name().to_string());
    }

    /// Apply a rotation by catalog name and degree text
    ///
    /// The degree text comes straight from an input widget. Text that fails
    /// to parse, or parses to a non-finite value, falls back to 90°; the
    /// history label is built from the value actually used, so it never
    /// reads "Rx NaN°".
    pub fn apply_rotation(&mut self, name: &str, degrees_text: &str) {
        if self.busy {
            return;
        }
        let Some(gate) = RotationGate::from_name(name) else {
            return;
        };
        let degrees = parse_degrees(degrees_text);
        debug!("applying rotation {} by {}°", gate, degrees);
        self.transform(&gate.matrix(degrees.to_radians()));
        self.record(format!("{} {}°", gate.name(), degrees));
    }

    /// Override the angles directly (slider edit)
    ///
    /// Clears the history: the trail of applied gates no longer explains the
    /// current state once the angles are edited by hand.
    pub fn set_angles(&mut self, theta: f64, phi: f64) {
        if self.busy {
            return;
        }
        self.angles = BlochAngles::new(theta, phi).normalized();
        self.history.clear();
    }

    /// Return to the ground state and clear the history
    pub fn reset(&mut self) {
        if self.busy {
            return;
        }
        debug!("session reset");
        self.angles = BlochAngles::ground();
        self.history.clear();
    }

    /// Enter demo mode
    ///
    /// Returns false (and changes nothing) if a demo is already running.
    /// After a successful start the caller drives the script with
    /// [`advance_demo`](Self::advance_demo), or hands the whole run to
    /// [`run_demo`](Self::run_demo).
    pub fn start_demo(&mut self) -> bool {
        if self.busy {
            return false;
        }
        debug!("demo started");
        self.busy = true;
        self.demo_cursor = 0;
        true
    }

    /// Apply the next demo step
    ///
    /// Returns the pause the caller should wait before stepping again, or
    /// `None` once the script is exhausted, at which point the session is
    /// idle again. Demo steps use the same mechanics as interactive commands
    /// but are never written into the history. Calling this while idle does
    /// nothing.
    pub fn advance_demo(&mut self) -> Option<Duration> {
        if !self.busy {
            return None;
        }
        match DEMO_SEQUENCE.get(self.demo_cursor) {
            Some(step) => {
                trace!("demo step {}: {:?}", self.demo_cursor, step);
                match *step {
                    DemoStep::Gate(gate) => self.transform(&gate.matrix()),
                    DemoStep::Rotation(gate, angle) => self.transform(&gate.matrix(angle)),
                }
                self.demo_cursor += 1;
                Some(self.config.step_delay)
            }
            None => {
                debug!("demo finished");
                self.busy = false;
                None
            }
        }
    }

    /// Run the whole demo script, sleeping the configured pause between steps
    ///
    /// The sleeps are the suspension points that let a presentation layer
    /// observe and animate each intermediate state. Starting while a demo is
    /// already running is an idempotent no-op.
    pub async fn run_demo(&mut self) {
        if !self.start_demo() {
            return;
        }
        while let Some(pause) = self.advance_demo() {
            tokio::time::sleep(pause).await;
        }
    }

    /// Decode, apply, re-encode, store
    fn transform(&mut self, matrix: &Matrix2) {
        let next = apply(matrix, self.state());
        self.angles = next.to_angles();
    }

    fn record(&mut self, name: String) {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.history.push(HistoryEntry { id, name });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse degree text, falling back to the 90° default
fn parse_degrees(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|deg| deg.is_finite())
        .unwrap_or(DEFAULT_ROTATION_DEGREES)
}
