// State generators - where Originator::do_something gets its new state

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Characters random states are drawn from
pub const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Source of new originator states
pub trait StateGenerator: Send {
    /// Produce a new state of (at most) `length` characters
    fn generate(&mut self, length: usize) -> String;
}

/// Uniform random alphanumeric strings
pub struct RandomStateGenerator<R: Rng = StdRng> {
    rng: R,
}

impl RandomStateGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStateGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> StateGenerator for RandomStateGenerator<R> {
    fn generate(&mut self, length: usize) -> String {
        let state: String = (0..length)
            .map(|_| ALPHANUMERIC[self.rng.gen_range(0..ALPHANUMERIC.len())] as char)
            .collect();
        log::trace!("Generated state {}", state);
        state
    }
}

/// Replays a fixed list of states in order, wrapping around at the end
///
/// States longer than the requested length are cut to that many
/// characters. Meant for tests and scripted demos.
#[derive(Debug, Clone, Default)]
pub struct SequenceGenerator {
    states: Vec<String>,
    next: usize,
}

impl SequenceGenerator {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl StateGenerator for SequenceGenerator {
    fn generate(&mut self, length: usize) -> String {
        if self.states.is_empty() {
            return String::new();
        }
        let state: String = self.states[self.next % self.states.len()]
            .chars()
            .take(length)
            .collect();
        self.next += 1;
        state
    }
}
