// ConcreteMemento - immutable snapshot of an Originator's state

use crate::memento::trait_def::Memento;
use chrono::{DateTime, Local};
use std::fmt;

/// Layout of C `ctime()` without the trailing newline
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Snapshot of an `Originator` taken at one point in time
///
/// Only the originator can create one or read the state back out. Fields
/// are private and there are no setters, so a snapshot never changes after
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ConcreteMemento {
    state: String,
    created_at: DateTime<Local>,
    preview_len: usize,
}

impl ConcreteMemento {
    pub(crate) fn new(state: String, preview_len: usize) -> Self {
        Self::with_timestamp(state, Local::now(), preview_len)
    }

    pub(crate) fn with_timestamp(
        state: String,
        created_at: DateTime<Local>,
        preview_len: usize,
    ) -> Self {
        Self {
            state,
            created_at,
            preview_len,
        }
    }

    /// Captured state, used by the originator when restoring
    pub(crate) fn state(&self) -> &str {
        &self.state
    }
}

// State stays out of debug output
impl fmt::Debug for ConcreteMemento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteMemento")
            .field("created_at", &self.created_at)
            .field("preview_len", &self.preview_len)
            .finish_non_exhaustive()
    }
}

impl Memento for ConcreteMemento {
    fn name(&self) -> String {
        let preview: String = self.state.chars().take(self.preview_len).collect();
        format!("{} / ({}...)", self.date(), preview)
    }

    fn date(&self) -> String {
        self.created_at.format(CTIME_FORMAT).to_string()
    }

    fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 2).unwrap()
    }

    #[test]
    fn test_date_uses_ctime_layout() {
        let memento = ConcreteMemento::with_timestamp("abc".into(), fixed_time(), 9);
        assert_eq!(memento.date(), "Tue Mar  5 09:07:02 2024");
    }

    #[test]
    fn test_name_truncates_state() {
        let memento = ConcreteMemento::with_timestamp(
            "Super-duper-super-puper-super.".into(),
            fixed_time(),
            9,
        );
        assert_eq!(memento.name(), "Tue Mar  5 09:07:02 2024 / (Super-dup...)");
    }

    #[test]
    fn test_name_with_short_state() {
        let memento = ConcreteMemento::with_timestamp("A".into(), fixed_time(), 9);
        assert_eq!(memento.name(), "Tue Mar  5 09:07:02 2024 / (A...)");
    }

    #[test]
    fn test_name_counts_chars_not_bytes() {
        let memento = ConcreteMemento::with_timestamp("żółw".into(), fixed_time(), 2);
        assert!(memento.name().ends_with("(żó...)"));
    }

    #[test]
    fn test_debug_does_not_reveal_state() {
        let memento =
            ConcreteMemento::with_timestamp("secret-state-xyz".into(), fixed_time(), 9);
        let debug = format!("{:?}", memento);

        assert!(debug.starts_with("ConcreteMemento"));
        assert!(debug.contains("preview_len: 9"));
        assert!(!debug.contains("secret-state-xyz"));
    }

    #[test]
    fn test_state_is_kept_verbatim() {
        let memento = ConcreteMemento::new("state".into(), 9);
        assert_eq!(memento.state(), "state");
        assert!(memento.created_at() <= Local::now());
    }
}
