//! Pair-matching card game rules.

use std::time::Duration;

/// Card faces; each appears twice in a deal.
pub const MEMORY_SYMBOLS: [&str; 8] = [
    "\u{1F680}", "\u{1F4BB}", "\u{26A1}", "\u{1F3AF}", "\u{1F525}", "\u{1F4A1}", "\u{1F3A8}",
    "\u{2B50}",
];

/// How long a mismatched pair stays face up.
pub const FLIP_BACK_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCard {
    pub symbol: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

impl MemoryCard {
    pub fn face_up(self) -> bool {
        self.flipped || self.matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    FirstFlipped,
    Matched,
    /// Call [`MemoryGame::flip_back`] after [`FLIP_BACK_DELAY`].
    Mismatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryGame {
    cards: Vec<MemoryCard>,
    face_up: Vec<usize>,
    moves: u32,
}

impl MemoryGame {
    /// Deals both copies of every symbol in a random order.
    pub fn shuffled(random: &mut dyn FnMut() -> f64) -> Self {
        let mut symbols: Vec<&'static str> = MEMORY_SYMBOLS
            .iter()
            .chain(MEMORY_SYMBOLS.iter())
            .copied()
            .collect();
        shuffle(&mut symbols, random);
        Self::with_symbols(symbols)
    }

    fn with_symbols(symbols: Vec<&'static str>) -> Self {
        Self {
            cards: symbols
                .into_iter()
                .map(|symbol| MemoryCard {
                    symbol,
                    flipped: false,
                    matched: false,
                })
                .collect(),
            face_up: Vec::with_capacity(2),
            moves: 0,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_won(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|card| card.matched)
    }

    /// Turns one card over. Ignored while a pair is showing, or when the card is already face
    /// up or matched.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.face_up.len() == 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if card.flipped || card.matched {
            return FlipOutcome::Ignored;
        }
        card.flipped = true;
        self.face_up.push(index);

        let [first, second] = self.face_up[..] else {
            return FlipOutcome::FirstFlipped;
        };
        self.moves += 1;
        if self.cards[first].symbol == self.cards[second].symbol {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.face_up.clear();
            FlipOutcome::Matched
        } else {
            FlipOutcome::Mismatched
        }
    }

    /// Hides a mismatched pair.
    pub fn flip_back(&mut self) {
        if self.face_up.len() < 2 {
            return;
        }
        for index in self.face_up.drain(..) {
            self.cards[index].flipped = false;
        }
    }

    pub fn reset(&mut self, random: &mut dyn FnMut() -> f64) {
        *self = Self::shuffled(random);
    }
}

/// Fisher-Yates over an injected `[0, 1)` source.
fn shuffle<T>(items: &mut [T], random: &mut dyn FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        let j = ((random().clamp(0.0, 1.0) * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Unshuffled deal: symbol `k` sits at `k` and `k + 8`.
    fn ordered() -> MemoryGame {
        MemoryGame::with_symbols(
            MEMORY_SYMBOLS
                .iter()
                .chain(MEMORY_SYMBOLS.iter())
                .copied()
                .collect(),
        )
    }

    #[test]
    fn deal_contains_every_symbol_twice() {
        let mut seed = 0.37_f64;
        let mut random = move || {
            seed = (seed * 9301.0 + 0.49297) % 1.0;
            seed
        };
        let game = MemoryGame::shuffled(&mut random);
        assert_eq!(game.cards().len(), 16);
        for symbol in MEMORY_SYMBOLS {
            let count = game.cards().iter().filter(|card| card.symbol == symbol).count();
            assert_eq!(count, 2, "{symbol}");
        }
        assert_eq!(game.moves(), 0);
        assert!(!game.is_won());
    }

    #[test]
    fn matching_pair_stays_face_up() {
        let mut game = ordered();
        assert_eq!(game.flip(0), FlipOutcome::FirstFlipped);
        assert_eq!(game.flip(8), FlipOutcome::Matched);
        assert_eq!(game.moves(), 1);
        assert!(game.cards()[0].matched && game.cards()[8].matched);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn mismatch_blocks_flips_until_flipped_back() {
        let mut game = ordered();
        game.flip(0);
        assert_eq!(game.flip(1), FlipOutcome::Mismatched);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.flip(2), FlipOutcome::Ignored);

        game.flip_back();
        assert!(!game.cards()[0].face_up());
        assert!(!game.cards()[1].face_up());
        assert_eq!(game.flip(2), FlipOutcome::FirstFlipped);
    }

    #[test]
    fn flipping_the_same_card_twice_is_ignored() {
        let mut game = ordered();
        game.flip(3);
        assert_eq!(game.flip(3), FlipOutcome::Ignored);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.flip(99), FlipOutcome::Ignored);
    }

    #[test]
    fn clearing_every_pair_wins() {
        let mut game = ordered();
        for k in 0..8 {
            game.flip(k);
            game.flip(k + 8);
        }
        assert!(game.is_won());
        assert_eq!(game.moves(), 8);

        game.reset(&mut || 0.0);
        assert!(!game.is_won());
        assert_eq!(game.moves(), 0);
    }
}
