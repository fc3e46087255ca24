// Originator - owner of the state that gets snapshotted and restored

use crate::config::{DEFAULT_NAME_PREVIEW_LEN, DEFAULT_STATE_LENGTH, DemoConfig};
use crate::memento::generator::{RandomStateGenerator, StateGenerator};
use crate::memento::snapshot::ConcreteMemento;
use crate::memento::trait_def::{MementoResult, Restorable};
use crate::narrator::Narrator;

/// Holds a single string state that changes over time
///
/// New states come from an injected `StateGenerator`, random alphanumeric
/// by default, so tests can script them.
pub struct Originator {
    state: String,
    generator: Box<dyn StateGenerator>,
    state_length: usize,
    name_preview_len: usize,
    narrator: Narrator,
}

impl Originator {
    /// Create an originator with a random state generator
    pub fn new(state: impl Into<String>, narrator: Narrator) -> MementoResult<Self> {
        Self::with_generator(state, Box::new(RandomStateGenerator::from_entropy()), narrator)
    }

    /// Create an originator drawing new states from `generator`
    pub fn with_generator(
        state: impl Into<String>,
        generator: Box<dyn StateGenerator>,
        narrator: Narrator,
    ) -> MementoResult<Self> {
        let originator = Self {
            state: state.into(),
            generator,
            state_length: DEFAULT_STATE_LENGTH,
            name_preview_len: DEFAULT_NAME_PREVIEW_LEN,
            narrator,
        };

        originator
            .narrator
            .say(format!("Originator: My initial state is: {}", originator.state))?;

        Ok(originator)
    }

    /// Create an originator from demo settings
    ///
    /// Uses a seeded generator when `config.seed` is set.
    pub fn from_config(config: &DemoConfig, narrator: Narrator) -> MementoResult<Self> {
        let generator = match config.seed {
            Some(seed) => RandomStateGenerator::seeded(seed),
            None => RandomStateGenerator::from_entropy(),
        };

        Ok(
            Self::with_generator(config.initial_state.clone(), Box::new(generator), narrator)?
                .with_state_length(config.state_length)
                .with_name_preview_len(config.name_preview_len),
        )
    }

    /// Length of states produced by `do_something`
    pub fn with_state_length(mut self, state_length: usize) -> Self {
        self.state_length = state_length;
        self
    }

    /// Number of state characters shown in snapshot names
    pub fn with_name_preview_len(mut self, name_preview_len: usize) -> Self {
        self.name_preview_len = name_preview_len;
        self
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Replace the state with a freshly generated one
    pub fn do_something(&mut self) -> MementoResult<()> {
        self.narrator.say("Originator: I'm doing something important.")?;

        self.state = self.generator.generate(self.state_length);
        log::debug!("Originator state replaced ({} chars)", self.state.chars().count());

        self.narrator
            .say(format!("Originator: and my state has changed to: {}", self.state))?;
        Ok(())
    }
}

impl Restorable for Originator {
    type Snapshot = ConcreteMemento;

    fn save(&self) -> ConcreteMemento {
        ConcreteMemento::new(self.state.clone(), self.name_preview_len)
    }

    fn restore(&mut self, memento: &ConcreteMemento) -> MementoResult<()> {
        self.state = memento.state().to_string();
        self.narrator
            .say(format!("Originator: My state has changed to: {}", self.state))?;
        Ok(())
    }
}
