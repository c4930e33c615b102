//! Fortune messages and the random source that picks them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shared opening of every fortune message ("today's fortune is").
pub const FORTUNE_PREFIX: &str = "今日の運勢は";

/// The fixed set of fortunes the fortune key draws from.
pub const FORTUNES: [&str; 12] = [
    "今日の運勢は…大吉！最高の一日になりそう！✨",
    "今日の運勢は…中吉。まあまあラッキーな日！",
    "今日の運勢は…小吉。小さな幸せを見逃さないで。",
    "今日の運勢は…吉。落ち着いた運気です。",
    "今日の運勢は…末吉。ちょっとした変化が鍵かも。",
    "今日の運勢は…凶。慎重に行動すると吉。",
    "今日の運勢は…大凶！？でも気をつければ大丈夫！",
    "今日の運勢は…超大吉！！神がかってる一日！🌟",
    "今日の運勢は…平。穏やかに過ごせる日です。",
    "今日の運勢は…波乱！ハプニングが起こるかも！？",
    "今日の運勢は…冴えてる！自分の直感を信じて。",
    "今日の運勢は…転機！何かが変わる予感…！",
];

/// Source of the index used to pick a fortune.
pub trait FortuneSource {
    /// Returns an index in `0..count`. `count` is never zero.
    fn pick(
        &mut self,
        count: usize,
    ) -> usize;
}

/// Uniform picks from a [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededFortune {
    rng: StdRng,
}

impl SeededFortune {
    /// Deterministic source; the same seed yields the same fortunes.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl FortuneSource for SeededFortune {
    fn pick(
        &mut self,
        count: usize,
    ) -> usize {
        self.rng.random_range(0..count)
    }
}

/// Draws one message from [`FORTUNES`].
///
/// Out-of-range indices from a misbehaving source wrap around.
pub fn draw(source: &mut impl FortuneSource) -> &'static str {
    let index = source.pick(FORTUNES.len());
    FORTUNES[index % FORTUNES.len()]
}
