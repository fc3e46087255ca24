// Concrete command implementations

use crate::command::receiver::Receiver;
use crate::command::trait_def::{Command, CommandResult};
use crate::narrator::Narrator;
use std::sync::Arc;

/// Command that does its (simple) work on its own
///
/// It only carries a payload and prints it when executed.
pub struct SimpleCommand {
    payload: String,
    narrator: Narrator,
}

impl SimpleCommand {
    /// Create a new SimpleCommand
    ///
    /// # Arguments
    /// * `payload` - Text printed on execution
    /// * `narrator` - Where the output goes
    pub fn new(payload: impl Into<String>, narrator: Narrator) -> Self {
        Self {
            payload: payload.into(),
            narrator,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> CommandResult<()> {
        let line = self.narrator.locale().simple_command(&self.payload);
        self.narrator.say(line)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Print {:?}", self.payload)
    }
}

/// Command that delegates its work to a `Receiver`
///
/// The receiver is shared, not owned: several commands may point at the same
/// receiver and it outlives all of them.
pub struct ComplexCommand {
    receiver: Arc<Receiver>,
    a: String,
    b: String,
    narrator: Narrator,
}

impl ComplexCommand {
    /// Create a new ComplexCommand
    ///
    /// # Arguments
    /// * `receiver` - Receiver performing the work
    /// * `a` - Argument for `Receiver::do_something`
    /// * `b` - Argument for `Receiver::do_something_else`
    /// * `narrator` - Where the command's own output goes
    pub fn new(
        receiver: Arc<Receiver>,
        a: impl Into<String>,
        b: impl Into<String>,
        narrator: Narrator,
    ) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
            narrator,
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> CommandResult<()> {
        self.narrator.say(self.narrator.locale().complex_command())?;

        // Fixed order: do_something always runs before do_something_else
        self.receiver.do_something(&self.a)?;
        self.receiver.do_something_else(&self.b)?;

        Ok(())
    }

    fn description(&self) -> String {
        format!("Delegate {:?} and {:?} to receiver", self.a, self.b)
    }
}
