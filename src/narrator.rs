// Narrator - shared output handle for demo narration
//
// Every component (commands, invoker, originator, caretaker) prints its
// narration through a Narrator. The handle is cheap to clone: all clones
// share one sink, so the order of lines is the order of calls.
//
// Two sinks exist:
// - Stdout: what the demo binaries use
// - Buffered: collects lines in memory so tests can assert on them

use crate::locale::Locale;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Errors that can occur while narrating
#[derive(Debug, thiserror::Error)]
pub enum NarratorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Narrator sink lock poisoned")]
    Poisoned,
}

/// Result type for narration
pub type NarratorResult<T> = Result<T, NarratorError>;

/// Where narration lines end up
#[derive(Debug)]
enum Sink {
    Stdout,
    Buffered(Vec<String>),
}

/// Cloneable handle to a shared line sink
#[derive(Debug, Clone)]
pub struct Narrator {
    sink: Arc<Mutex<Sink>>,
    locale: Locale,
}

impl Narrator {
    /// Narrator printing to standard output
    pub fn stdout() -> Self {
        Self::with_sink(Sink::Stdout)
    }

    /// Narrator collecting lines in memory
    pub fn buffered() -> Self {
        Self::with_sink(Sink::Buffered(Vec::new()))
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            locale: Locale::default(),
        }
    }

    /// Same sink, different message language
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Emit one line of narration
    pub fn say(&self, line: impl AsRef<str>) -> NarratorResult<()> {
        let mut sink = self.sink.lock().map_err(|_| NarratorError::Poisoned)?;

        match &mut *sink {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{}", line.as_ref())?;
            }
            Sink::Buffered(lines) => lines.push(line.as_ref().to_string()),
        }

        Ok(())
    }

    /// Emit an empty line
    pub fn blank(&self) -> NarratorResult<()> {
        self.say("")
    }

    /// Lines collected so far (always empty for stdout)
    ///
    /// Reads through a poisoned lock: lines pushed before the poisoning
    /// are still returned.
    pub fn lines(&self) -> Vec<String> {
        match &*self.inspect_sink() {
            Sink::Buffered(lines) => lines.clone(),
            Sink::Stdout => Vec::new(),
        }
    }

    /// Drop all collected lines
    pub fn clear(&self) {
        if let Sink::Buffered(lines) = &mut *self.inspect_sink() {
            lines.clear();
        }
    }

    fn inspect_sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
