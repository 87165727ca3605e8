//! The roulette wheel.
//!
//! A single-zero wheel with 37 pockets in the standard European layout. The
//! layout order matters only to clients rendering the wheel; the draw itself
//! is uniform over the pocket set.

use rand::Rng;

/// Fixed ordered set of pockets. Every draw selects uniformly from this set.
pub struct Wheel;

impl Wheel {
    /// Pocket numbers in physical wheel order, starting at the zero.
    pub const ORDER: [u8; 37] = [
        0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1,
        20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
    ];

    /// Draws one pocket uniformly at random.
    pub fn draw(rng: &mut impl Rng) -> u8 {
        Self::ORDER[rng.gen_range(0..Self::ORDER.len())]
    }

    /// Whether `pocket` exists on the wheel.
    pub fn contains(pocket: u8) -> bool {
        Self::ORDER.contains(&pocket)
    }
}
