// Command & Memento - Library exports for the demos, tests and benchmarks

pub mod command;
pub mod config;
pub mod demo;
pub mod locale;
pub mod logging;
pub mod memento;
pub mod narrator;

// Re-export commonly used types for convenience
pub use command::{Command, ComplexCommand, Invoker, Receiver, SimpleCommand};
pub use config::DemoConfig;
pub use locale::Locale;
pub use memento::{Caretaker, ConcreteMemento, Memento, Originator, Restorable};
pub use narrator::Narrator;
