//! Random short identifier generation.
//!
//! Generators only produce candidates. They make no attempt to avoid repeats;
//! collisions are detected by the record store and handled by the allocator.

use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// URL-safe alphabet of 64 characters used when none is configured.
pub const URL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 5;

/// Produces candidate short identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a new candidate identifier. Never fails.
    fn generate(&self) -> String;
}

/// Rejected generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGeneratorConfig {
    #[error("identifier alphabet must not be empty")]
    EmptyAlphabet,
    #[error("identifier alphabet contains duplicate character '{0}'")]
    DuplicateCharacter(char),
    #[error("identifier length must be greater than 0")]
    ZeroLength,
}

/// Draws each character uniformly at random from a fixed alphabet.
#[derive(Debug, Clone)]
pub struct AlphabetIdGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl AlphabetIdGenerator {
    /// Creates a generator for `length` characters drawn from `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeneratorConfig`] if the alphabet is empty or repeats a
    /// character (a repeated character would be drawn more often than the
    /// others), or if `length` is zero.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, InvalidGeneratorConfig> {
        if alphabet.is_empty() {
            return Err(InvalidGeneratorConfig::EmptyAlphabet);
        }

        if length == 0 {
            return Err(InvalidGeneratorConfig::ZeroLength);
        }

        let mut seen = HashSet::new();
        for c in alphabet.chars() {
            if !seen.insert(c) {
                return Err(InvalidGeneratorConfig::DuplicateCharacter(c));
            }
        }

        Ok(Self {
            alphabet: alphabet.chars().collect(),
            length,
        })
    }

    /// Generator over [`URL_ALPHABET`] with the given length.
    pub fn url_safe(length: usize) -> Result<Self, InvalidGeneratorConfig> {
        Self::new(URL_ALPHABET, length)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl IdGenerator for AlphabetIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}
