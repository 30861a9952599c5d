//! Match identity generation.
//!
//! The generator draws ids from an [`IdGenerator`] so callers choose the
//! strategy: [`RandomIds`] for production, [`SequentialIds`] when tests or
//! exports need reproducible ids.

use std::collections::HashSet;
use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_ID_LEN: usize = 9;

/// Source of unique identifiers.
///
/// Implementations must never hand out the same id twice.
pub trait IdGenerator: Debug {
    /// Returns a fresh identifier.
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// `prefix-1`, `prefix-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Starts a sequence at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("match")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random 9-character base-36 ids.
///
/// Remembers what it issued and redraws on collision, so ids are unique
/// for the lifetime of the generator.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
    issued: HashSet<String>,
}

impl RandomIds {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    fn draw(&mut self) -> String {
        (0..RANDOM_ID_LEN)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        loop {
            let id = self.draw();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}
