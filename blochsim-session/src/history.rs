//! The append-only gate history
//!
//! Each interactively applied gate leaves one entry behind. The history is a
//! provenance trail for the current state: it is cleared wholesale on reset
//! and on any direct angle edit (which invalidates the trail), and demo
//! playback never writes to it.

use blochsim_gates::{FixedGate, RotationGate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a history entry
///
/// Monotonically increasing within a session; presentation layers use it as
/// a list-rendering key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    /// Create an entry identifier
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying counter value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One applied-gate record
///
/// `name` is the raw command label ("H", "Rz 90°"); the friendly form is
/// derived on demand by [`HistoryEntry::display_label`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable list-rendering key
    pub id: EntryId,
    /// Raw label of the applied operation
    pub name: String,
}

impl HistoryEntry {
    /// Friendly label for presentation
    ///
    /// Bare catalog names map to their long form (X → "Pauli-X",
    /// Rx → "Rotation X"); anything else — including rotation entries like
    /// "Rz 90°" — is shown verbatim.
    ///
    /// # Example
    /// ```
    /// use blochsim_session::{EntryId, HistoryEntry};
    ///
    /// let entry = HistoryEntry { id: EntryId::new(0), name: "H".to_string() };
    /// assert_eq!(entry.display_label(), "Hadamard");
    ///
    /// let entry = HistoryEntry { id: EntryId::new(1), name: "Rz 90°".to_string() };
    /// assert_eq!(entry.display_label(), "Rz 90°");
    /// ```
    pub fn display_label(&self) -> &str {
        if let Some(gate) = FixedGate::from_name(&self.name) {
            return gate.display_name();
        }
        if let Some(gate) = RotationGate::from_name(&self.name) {
            return gate.display_name();
        }
        &self.name
    }
}
