//! Shuffled-cycle quote source
//!
//! Every quote is shown once per cycle; each cycle uses a fresh random order.

use rand::Rng;

/// In-place Fisher–Yates shuffle: for i from last down to 1, swap with j in [0, i]
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[derive(Debug, Clone)]
pub struct QuoteDeck {
    quotes: Vec<String>,
    /// Current cycle as indices into `quotes`
    order: Vec<usize>,
    /// Next position in `order`; always <= order.len()
    cursor: usize,
}

impl QuoteDeck {
    /// New deck with a shuffled first cycle
    pub fn new<R: Rng + ?Sized>(quotes: Vec<String>, rng: &mut R) -> Self {
        let mut deck = Self {
            order: (0..quotes.len()).collect(),
            quotes,
            cursor: 0,
        };
        shuffle(&mut deck.order, rng);
        deck
    }

    /// Deck whose current cycle is the given order. Returns `None` unless
    /// `order` is a permutation of `0..quotes.len()`.
    pub fn with_order(quotes: Vec<String>, order: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; quotes.len()];
        if order.len() != quotes.len() {
            return None;
        }
        for &i in &order {
            if i >= seen.len() || seen[i] {
                return None;
            }
            seen[i] = true;
        }
        Some(Self {
            quotes,
            order,
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes left before the next reshuffle
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// Next quote, starting a new shuffled cycle when the current one is spent.
    /// `None` only for an empty deck.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }
        if self.cursor >= self.order.len() {
            self.order = (0..self.quotes.len()).collect();
            shuffle(&mut self.order, rng);
            self.cursor = 0;
            log::debug!("Quote deck reshuffled ({} quotes)", self.quotes.len());
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        Some(&self.quotes[index])
    }
}
