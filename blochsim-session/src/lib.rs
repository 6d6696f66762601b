//! Interactive session state machine for the blochsim engine
//!
//! A [`Session`] owns the current Bloch angles, the append-only history of
//! applied gates, and the busy flag that makes demo playback and interactive
//! commands mutually exclusive. The presentation layer issues commands and
//! reads the resulting angles, amplitudes and history back; it never holds
//! state of its own.
//!
//! # Example
//! ```
//! use blochsim_session::Session;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut session = Session::new();
//! session.apply_named_gate("H");
//! assert!((session.angles().theta - FRAC_PI_2).abs() < 1e-6);
//! assert_eq!(session.history().len(), 1);
//!
//! session.reset();
//! assert!(session.history().is_empty());
//! ```

pub mod config;
pub mod demo;
pub mod history;
pub mod session;

// Re-exports for convenience
pub use config::SessionConfig;
pub use demo::{DemoStep, DEMO_SEQUENCE};
pub use history::{EntryId, HistoryEntry};
pub use session::Session;
