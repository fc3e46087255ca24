// Receiver - owner of the business operations complex commands delegate to

use crate::command::trait_def::CommandResult;
use crate::narrator::Narrator;

/// Performs the actual work behind a `ComplexCommand`
#[derive(Debug, Clone)]
pub struct Receiver {
    narrator: Narrator,
}

impl Receiver {
    pub fn new(narrator: Narrator) -> Self {
        Self { narrator }
    }

    pub fn do_something(&self, a: &str) -> CommandResult<()> {
        log::debug!("Receiver handling primary task {:?}", a);
        let line = self.narrator.locale().receiver_working_on(a);
        self.narrator.say(line)?;
        Ok(())
    }

    pub fn do_something_else(&self, b: &str) -> CommandResult<()> {
        log::debug!("Receiver handling secondary task {:?}", b);
        let line = self.narrator.locale().receiver_also_working_on(b);
        self.narrator.say(line)?;
        Ok(())
    }
}
