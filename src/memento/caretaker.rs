// Caretaker - keeps the snapshot history and drives undo

use crate::memento::trait_def::{Memento, MementoResult, Restorable};
use crate::narrator::Narrator;

/// Keeps a stack of snapshots for one originator
///
/// The Caretaker owns the snapshots but never the originator: it is passed
/// in on every call, so the Caretaker cannot keep it alive. Use one
/// Caretaker per originator.
///
/// History follows strict stack discipline:
/// - `backup` pushes the newest snapshot
/// - `undo` pops from the newest end only
///
/// The Caretaker only sees the `Memento` side of a snapshot (name and date),
/// never the captured state.
pub struct Caretaker<O: Restorable> {
    /// Snapshots, oldest first
    mementos: Vec<O::Snapshot>,

    narrator: Narrator,
}

impl<O: Restorable> Caretaker<O> {
    pub fn new(narrator: Narrator) -> Self {
        Self {
            mementos: Vec::new(),
            narrator,
        }
    }

    /// Capture the originator's current state and push it onto the history
    pub fn backup(&mut self, originator: &O) -> MementoResult<()> {
        self.narrator.blank()?;
        self.narrator.say("Caretaker: Saving Originator's state...")?;

        let memento = originator.save();
        log::debug!("Backed up snapshot {}", memento.name());
        self.mementos.push(memento);

        Ok(())
    }

    /// Restore the originator to the most recent snapshot
    ///
    /// The snapshot is removed from the history whether or not the restore
    /// works. A failed restore is not reported: that snapshot is discarded
    /// and the next older one is tried, until one restores or the history
    /// runs out.
    ///
    /// Returns the name of the snapshot that was restored, or `None` when
    /// the history was empty or every remaining snapshot failed.
    ///
    /// # Errors
    /// Only narration errors from the Caretaker itself are returned.
    pub fn undo(&mut self, originator: &mut O) -> MementoResult<Option<String>> {
        while let Some(name) = self.undo_description() {
            self.narrator
                .say(format!("Caretaker: Restoring state to: {}", name))?;

            let Some(memento) = self.mementos.pop() else {
                break;
            };

            match originator.restore(&memento) {
                Ok(()) => {
                    log::debug!("Restored snapshot {}", name);
                    return Ok(Some(name));
                }
                Err(e) => {
                    log::warn!("Discarding snapshot {} after failed restore: {}", name, e);
                }
            }
        }

        Ok(None)
    }

    /// Print every retained snapshot's name, oldest first
    pub fn show_history(&self) -> MementoResult<()> {
        self.narrator.say("Caretaker: Here's the list of mementos:")?;
        for memento in &self.mementos {
            self.narrator.say(memento.name())?;
        }
        Ok(())
    }

    /// Names of all retained snapshots, oldest first
    pub fn history(&self) -> Vec<String> {
        self.mementos.iter().map(|m| m.name()).collect()
    }

    /// Check if there is a snapshot to undo to
    pub fn can_undo(&self) -> bool {
        !self.mementos.is_empty()
    }

    /// Name of the snapshot the next undo would try first
    pub fn undo_description(&self) -> Option<String> {
        self.mementos.last().map(|m| m.name())
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}
