//! Session configuration

use std::time::Duration;

/// Configuration for a [`Session`](crate::Session)
///
/// The engine itself has no tunable math; the only knob is the pause the
/// demo driver reports between steps so a presentation layer can animate
/// each transition. The command layer never picks this value — the session's
/// constructor does, which makes the caller the sole owner of the pacing.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Pause between demo steps
    ///
    /// Default: 600 ms
    pub step_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(600),
        }
    }
}
