// Command trait definition

use crate::narrator::NarratorError;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Command execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Narration could not be written
    #[error("Narration failed: {0}")]
    Narration(#[from] NarratorError),
}

/// An encapsulated action the Invoker can trigger
///
/// Commands are owned by whoever holds them (usually an `Invoker` slot) and
/// executed through a shared reference, so one command can run many times.
///
/// # Example
/// ```
/// use command_memento::command::trait_def::{Command, CommandResult};
/// use command_memento::narrator::Narrator;
///
/// struct Beep {
///     narrator: Narrator,
/// }
///
/// impl Command for Beep {
///     fn execute(&self) -> CommandResult<()> {
///         self.narrator.say("beep")?;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Beep".to_string()
///     }
/// }
///
/// let narrator = Narrator::buffered();
/// Beep { narrator: narrator.clone() }.execute().unwrap();
/// assert_eq!(narrator.lines(), vec!["beep"]);
/// ```
pub trait Command: Send {
    /// Run the command
    fn execute(&self) -> CommandResult<()>;

    /// Human-readable description, used in log output
    fn description(&self) -> String;
}
