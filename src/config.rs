// Demo configuration
//
// Both binaries run with no arguments. Any flag they accept only overrides
// one of the defaults below.

use crate::locale::Locale;

/// Default length of generated originator states
pub const DEFAULT_STATE_LENGTH: usize = 30;

/// Number of state characters shown in a memento name
pub const DEFAULT_NAME_PREVIEW_LEN: usize = 9;

/// Number of backup/mutate rounds the memento demo performs
pub const DEFAULT_BACKUPS: usize = 3;

/// Initial originator state used by the memento demo
pub const DEFAULT_INITIAL_STATE: &str = "Super-duper-super-puper-super.";

/// Settings shared by the demo binaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Language of the command demo narration
    pub locale: Locale,
    /// Length of states produced by `Originator::do_something`
    pub state_length: usize,
    /// Characters of state shown in memento names
    pub name_preview_len: usize,
    /// Fixed seed for the state generator (None = seeded from entropy)
    pub seed: Option<u64>,
    /// Backup/mutate rounds in the memento demo
    pub backups: usize,
    /// Initial originator state
    pub initial_state: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            state_length: DEFAULT_STATE_LENGTH,
            name_preview_len: DEFAULT_NAME_PREVIEW_LEN,
            seed: None,
            backups: DEFAULT_BACKUPS,
            initial_state: DEFAULT_INITIAL_STATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.state_length, 30);
        assert_eq!(config.name_preview_len, 9);
        assert_eq!(config.backups, 3);
        assert!(config.seed.is_none());
        assert_eq!(config.initial_state, "Super-duper-super-puper-super.");
    }
}
