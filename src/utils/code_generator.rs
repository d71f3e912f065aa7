//! Short code generation over a fixed 62-symbol alphabet.
//!
//! Two modes: purely random codes, and hash-derived codes seeded with the
//! original URL. Randomness is an injected capability so tests can substitute
//! a deterministic source.

use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Fixed alphabet for short codes: digits plus mixed-case ASCII letters.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of random bytes for code generation.
///
/// A failing source is a fatal configuration error, not something callers
/// recover from, so the contract is infallible.
pub trait RandomSource: Send + Sync {
    /// Fills `buf` with random bytes.
    ///
    /// # Panics
    ///
    /// Panics if the underlying entropy source fails.
    fn fill(&self, buf: &mut [u8]);
}

/// Operating-system CSPRNG, the production source.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) {
        getrandom::fill(buf).expect("Failed to generate random bytes");
    }
}

/// Generates short codes of a fixed length.
#[derive(Clone)]
pub struct CodeGenerator {
    random: Arc<dyn RandomSource>,
    length: usize,
}

impl CodeGenerator {
    pub fn new(random: Arc<dyn RandomSource>, length: usize) -> Self {
        Self { random, length }
    }

    /// Generates a code, hash-derived when a seed is supplied.
    ///
    /// Without a seed, draws `length` bytes from the random source. With a
    /// seed (typically the normalized URL), hashes the seed together with a
    /// high-resolution timestamp so repeated calls with the same seed still
    /// produce fresh codes on collision retry.
    ///
    /// Each byte is mapped onto the alphabet by modulo. 62 is not a power of
    /// two, so the low end of the alphabet is very slightly favored; the bias
    /// is accepted as negligible for this code space.
    pub fn generate(&self, seed: Option<&str>) -> String {
        match seed {
            Some(seed) => self.from_seed(seed),
            None => self.from_random(),
        }
    }

    fn from_random(&self) -> String {
        let mut buffer = vec![0u8; self.length];
        self.random.fill(&mut buffer);
        map_to_alphabet(&buffer)
    }

    fn from_seed(&self, seed: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        hasher.update(chrono::Utc::now().timestamp_micros().to_be_bytes());
        let digest = hasher.finalize();

        map_to_alphabet(&digest[..self.length.min(digest.len())])
    }
}

fn map_to_alphabet(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| ALPHABET[b as usize % ALPHABET.len()] as char)
        .collect()
}
