//! Randomness abstraction.

/// Trait for abstracting the source of randomized values.
///
/// Game simulations draw obstacle placement and serve direction from an
/// injected implementor instead of a global generator, so simulations stay
/// deterministic under test. Any quality of generator will do; nothing here
/// is security sensitive.
pub trait EntropySource {
    /// Returns a uniformly distributed integer in `min..=max`.
    ///
    /// Both bounds are inclusive. Callers guarantee `min <= max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}
