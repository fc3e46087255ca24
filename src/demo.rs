// Client code shared by the demo binaries and the integration tests

use crate::command::{CommandResult, ComplexCommand, Invoker, Receiver, SimpleCommand};
use crate::config::DemoConfig;
use crate::memento::{Caretaker, MementoResult, Originator};
use crate::narrator::Narrator;
use std::sync::Arc;

/// Invoker with a simple on_start and a receiver-backed on_finish
pub fn run_command_demo(narrator: &Narrator) -> CommandResult<()> {
    let (greeting, first_task, second_task) = narrator.locale().demo_payloads();

    let mut invoker = Invoker::new(narrator.clone());
    invoker.set_on_start(Box::new(SimpleCommand::new(greeting, narrator.clone())));

    let receiver = Arc::new(Receiver::new(narrator.clone()));
    invoker.set_on_finish(Box::new(ComplexCommand::new(
        receiver,
        first_task,
        second_task,
        narrator.clone(),
    )));

    invoker.do_something_important()
}

/// Back up and mutate `config.backups` times, list the history, undo twice
pub fn run_memento_demo(config: &DemoConfig, narrator: &Narrator) -> MementoResult<()> {
    let originator = Originator::from_config(config, narrator.clone())?;
    run_memento_demo_with(originator, config.backups, narrator)
}

/// Same as `run_memento_demo` with a caller-built originator
pub fn run_memento_demo_with(
    mut originator: Originator,
    backups: usize,
    narrator: &Narrator,
) -> MementoResult<()> {
    let mut caretaker = Caretaker::new(narrator.clone());

    for _ in 0..backups {
        caretaker.backup(&originator)?;
        originator.do_something()?;
    }

    narrator.blank()?;
    caretaker.show_history()?;

    narrator.blank()?;
    narrator.say("Client: Now, let's rollback!")?;
    narrator.blank()?;
    caretaker.undo(&mut originator)?;

    narrator.blank()?;
    narrator.say("Client: Once more!")?;
    narrator.blank()?;
    caretaker.undo(&mut originator)?;

    Ok(())
}
