// Memento and Restorable trait definitions

use crate::narrator::NarratorError;
use chrono::{DateTime, Local};

/// Result type for snapshot operations
pub type MementoResult<T> = Result<T, MementoError>;

/// Errors that can occur while saving or restoring state
#[derive(Debug, thiserror::Error)]
pub enum MementoError {
    /// The originator refused or could not apply a snapshot
    #[error("Restore failed: {0}")]
    RestoreFailed(String),

    /// Narration could not be written
    #[error("Narration failed: {0}")]
    Narration(#[from] NarratorError),
}

/// Presentation side of a snapshot
///
/// This is all a `Caretaker` gets to see: it can list and label snapshots
/// but has no way to read or alter the state they capture.
pub trait Memento: Send {
    /// Label shown in history listings, e.g. `"<date> / (Super-dup...)"`
    fn name(&self) -> String;

    /// Creation time in `ctime` layout
    fn date(&self) -> String;

    /// Creation time
    fn created_at(&self) -> DateTime<Local>;
}

/// Something whose state can be captured into and restored from snapshots
///
/// `Originator` is the implementation the demo uses; the trait exists so
/// the `Caretaker` undo contract can be driven by other originators too.
pub trait Restorable {
    /// Snapshot type produced by `save`
    type Snapshot: Memento;

    /// Capture the current state. Always succeeds and does not change `self`.
    fn save(&self) -> Self::Snapshot;

    /// Overwrite the current state with the one captured in `memento`
    fn restore(&mut self, memento: &Self::Snapshot) -> MementoResult<()>;
}
