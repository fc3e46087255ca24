// Invoker - runs optional commands around its own important work

use crate::command::trait_def::{Command, CommandResult};
use crate::narrator::Narrator;

/// Holds up to two commands and triggers them at fixed extension points
///
/// The Invoker has two slots:
/// - on_start: executed before the important work
/// - on_finish: executed after it
///
/// Setting a slot moves the command into the Invoker. Setting it again
/// replaces the previous command, which is handed back to the caller.
/// Unset slots are skipped.
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
    narrator: Narrator,
}

impl Invoker {
    pub fn new(narrator: Narrator) -> Self {
        Self {
            on_start: None,
            on_finish: None,
            narrator,
        }
    }

    /// Set the command executed before the important work
    ///
    /// Returns the command previously in the slot, if any.
    pub fn set_on_start(&mut self, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        log::debug!("on_start set to: {}", command.description());
        self.on_start.replace(command)
    }

    /// Set the command executed after the important work
    ///
    /// Returns the command previously in the slot, if any.
    pub fn set_on_finish(&mut self, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        log::debug!("on_finish set to: {}", command.description());
        self.on_finish.replace(command)
    }

    /// Empty the on_start slot
    pub fn clear_on_start(&mut self) -> Option<Box<dyn Command>> {
        self.on_start.take()
    }

    /// Empty the on_finish slot
    pub fn clear_on_finish(&mut self) -> Option<Box<dyn Command>> {
        self.on_finish.take()
    }

    pub fn has_on_start(&self) -> bool {
        self.on_start.is_some()
    }

    pub fn has_on_finish(&self) -> bool {
        self.on_finish.is_some()
    }

    /// Run on_start, do the important work, run on_finish
    ///
    /// # Errors
    /// Returns the first error raised by a command or by narration.
    /// A failing on_start stops the sequence.
    pub fn do_something_important(&self) -> CommandResult<()> {
        let locale = self.narrator.locale();

        self.narrator.say(locale.invoker_before())?;
        if let Some(command) = &self.on_start {
            log::debug!("Executing on_start: {}", command.description());
            command.execute()?;
        }

        self.narrator.say(locale.invoker_working())?;

        self.narrator.say(locale.invoker_after())?;
        if let Some(command) = &self.on_finish {
            log::debug!("Executing on_finish: {}", command.description());
            command.execute()?;
        }

        Ok(())
    }
}
