use crate::CodeGenerator;
use hopper_core::shortcode::{ALPHABET, CODE_LENGTH};
use hopper_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of distinct codes: 62^6.
pub const KEYSPACE: u64 = 62_u64.pow(CODE_LENGTH as u32);

/// A short code generator backed by a sequential counter.
///
/// The counter is encoded as a fixed-width base62 number, so the codes run
/// `AAAAAA`, `AAAAAB`, ... and wrap around after [`KEYSPACE`] draws.
/// Codes never repeat within one instance until the wrap.
///
/// For distributed deployments, each node should start from its own
/// offset (e.g. node 1 at 0, node 2 at 1_000_000_000).
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator starting at zero (`AAAAAA`).
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for SeqGenerator {
    fn next_candidate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new_unchecked(encode_base62(count % KEYSPACE))
    }
}

/// Encodes `value` as exactly [`CODE_LENGTH`] base62 digits, most significant first.
///
/// `value` must be below [`KEYSPACE`].
fn encode_base62(mut value: u64) -> String {
    let mut digits = [ALPHABET[0]; CODE_LENGTH];
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(value % 62) as usize];
        value /= 62;
    }
    digits.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_generator_produces_sequential_codes() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.next_candidate().as_str(), "AAAAAA");
        assert_eq!(generator.next_candidate().as_str(), "AAAAAB");
        assert_eq!(generator.next_candidate().as_str(), "AAAAAC");
    }

    #[test]
    fn seq_generator_with_offset() {
        let generator = SeqGenerator::with_offset(61);

        assert_eq!(generator.next_candidate().as_str(), "AAAAA9");
        assert_eq!(generator.next_candidate().as_str(), "AAAABA");
    }

    #[test]
    fn seq_generator_wraps_at_keyspace() {
        let generator = SeqGenerator::with_offset(KEYSPACE - 1);

        assert_eq!(generator.next_candidate().as_str(), "999999");
        assert_eq!(generator.next_candidate().as_str(), "AAAAAA");
    }

    #[test]
    fn encoded_codes_are_valid() {
        for value in [0, 1, 62, 3_843, 916_132_831, KEYSPACE - 1] {
            let encoded = encode_base62(value);
            assert!(ShortCode::new(encoded.as_str()).is_ok(), "{encoded}");
        }
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::new();
        generator.next_candidate();
        generator.next_candidate();

        let cloned = generator.clone();

        assert_eq!(generator.next_candidate().as_str(), "AAAAAC");
        assert_eq!(cloned.next_candidate().as_str(), "AAAAAC");
    }
}
