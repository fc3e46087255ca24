// Memento Pattern for snapshot/undo
//
// Architecture:
// - Restorable trait: save() a snapshot, restore() from one
// - Memento trait: the name/date view of a snapshot, all a Caretaker sees
// - Originator: string state, replaced by StateGenerator output in do_something()
// - ConcreteMemento: immutable state + timestamp, readable only by the Originator
// - Caretaker: stack of snapshots with backup / undo / show_history

pub mod caretaker;
pub mod generator;
pub mod originator;
pub mod snapshot;
pub mod trait_def;

pub use caretaker::Caretaker;
pub use generator::{RandomStateGenerator, SequenceGenerator, StateGenerator};
pub use originator::Originator;
pub use snapshot::ConcreteMemento;
pub use trait_def::{Memento, MementoError, MementoResult, Restorable};
