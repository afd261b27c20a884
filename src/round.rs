//! Game constants and random rounds

use std::fmt;
use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

pub const BIG_NUMBERS: [u32; 4] = [25, 50, 75, 100];
/// Legal small numbers
pub const SMALL_NUMBERS: RangeInclusive<u32> = 0..=10;
/// Small numbers as they come out of the deck
pub const DRAWN_SMALL_NUMBERS: RangeInclusive<u32> = 1..=10;
pub const NUMBER_COUNT: usize = 6;
pub const TARGETS: RangeInclusive<u32> = 100..=999;

/// One numbers round: six source numbers and a three-digit target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub numbers: Vec<u32>,
    pub target: u32,
}

impl Round {
    pub fn new(numbers: Vec<u32>, target: u32) -> Self {
        Self { numbers, target }
    }

    /// Draw a random round with `big` big numbers (1 to 4 at random when `None`).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, big: Option<usize>) -> Self {
        let big = match big {
            Some(count) => count.min(BIG_NUMBERS.len()),
            None => rng.gen_range(1..=BIG_NUMBERS.len()),
        };

        let mut numbers: Vec<u32> = BIG_NUMBERS.choose_multiple(rng, big).copied().collect();
        for _ in big..NUMBER_COUNT {
            numbers.push(rng.gen_range(DRAWN_SMALL_NUMBERS));
        }
        let target = rng.gen_range(TARGETS);

        debug!("Drew round {:?} -> {}", numbers, target);
        Self { numbers, target }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let numbers: Vec<String> = self.numbers.iter().map(u32::to_string).collect();
        write!(f, "Target: {}  Numbers: {}", self.target, numbers.join(" "))
    }
}
