//! Short code generators.
//!
//! Generators only propose candidates. Uniqueness is enforced by the
//! link store's conditional insert, so a generator is free to repeat itself.

pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use hopper_core::ShortCode;
use std::sync::Arc;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Draws the next candidate code.
    fn next_candidate(&self) -> ShortCode;
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for Arc<G> {
    fn next_candidate(&self) -> ShortCode {
        (**self).next_candidate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_generator_keeps_its_state() {
        let shared: Arc<dyn CodeGenerator> = Arc::new(SeqGenerator::new());
        let other = Arc::clone(&shared);

        assert_eq!(shared.next_candidate().as_str(), "AAAAAA");
        assert_eq!(other.next_candidate().as_str(), "AAAAAB");
    }
}
