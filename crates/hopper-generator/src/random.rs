use crate::CodeGenerator;
use hopper_core::shortcode::{ALPHABET, CODE_LENGTH};
use hopper_core::ShortCode;
use rand::Rng;

/// Draws codes uniformly at random from the 62-symbol alphabet.
///
/// The keyspace holds 62^6 (about 5.68e10) codes. The generator keeps no
/// state, so two draws may collide; the shortener retries on conflict.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomGenerator {
    fn next_candidate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        ShortCode::new_unchecked(code)
    }
}
