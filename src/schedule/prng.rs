//! Seeded pseudo-random generator and shuffle
//!
//! The word order must be identical for every player on every platform, so the
//! generator is Mulberry32 with exact 32-bit wrapping arithmetic, and the shuffle
//! is a plain descending Fisher-Yates.

/// Mulberry32 generator
///
/// Produces the same sequence as the reference bit-mixing implementation for a
/// given 32-bit seed.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;
    const SCALE: f64 = 4_294_967_296.0; // 2^32

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(1 | t);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::SCALE
    }

    /// Uniform index in `[0, bound)`, computed as `floor(next_f64() * bound)`
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

/// Return a copy of `items` permuted by a seeded Fisher-Yates shuffle
///
/// Iterates `i` from the last index down to 1 and swaps with `j = below(i + 1)`.
///
/// # Examples
/// ```
/// use daily_wordle::schedule::seeded_shuffle;
///
/// let a = seeded_shuffle(&[1, 2, 3, 4, 5], 7);
/// let b = seeded_shuffle(&[1, 2, 3, 4, 5], 7);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = Mulberry32::new(seed);
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.below(i + 1);
        shuffled.swap(i, j);
    }

    shuffled
}
