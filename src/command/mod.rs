// Command Pattern
//
// Requests are wrapped in objects so they can be stored and triggered later
// by someone who knows nothing about what they do.
//
// Architecture:
// - Command trait: execute() plus a description for logging
// - SimpleCommand: does its own work from a payload
// - ComplexCommand: forwards to a Receiver (do_something, then do_something_else)
// - Invoker: owns optional on_start / on_finish commands and runs them around
//   its own work

pub mod commands;
pub mod invoker;
pub mod receiver;
pub mod trait_def;

pub use commands::{ComplexCommand, SimpleCommand};
pub use invoker::Invoker;
pub use receiver::Receiver;
pub use trait_def::{Command, CommandError, CommandResult};
