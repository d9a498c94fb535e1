use super::Card;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;

/// The session's pool of undrawn cards.
///
/// Shuffled once, then consumed front to back through a cursor. Anything
/// behind the cursor has left the game for good: kept by a player, waiting
/// in a pending choice, or discarded from a reveal. Nothing is ever put back.
///
/// `revealed` holds the most recent reveal for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
    cursor: usize,
    revealed: Vec<Card>,
}

impl Pile {
    pub fn shuffled<R>(mut cards: Vec<Card>, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        cards.shuffle(rng);
        Self::from(cards)
    }
    /// Take up to `n` cards off the top, in pile order.
    /// A short pile yields a short (possibly empty) reveal.
    pub fn reveal(&mut self, n: usize) -> Vec<Card> {
        let head = self.cursor.min(self.cards.len());
        let tail = (head + n).min(self.cards.len());
        self.cursor = tail;
        self.cards[head..tail].to_vec()
    }
    /// Remember what was last shown to the table.
    pub fn record(&mut self, cards: &[Card]) {
        self.revealed = cards.to_vec();
    }
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
    /// Cards still waiting to be drawn, top first.
    pub fn upcoming(&self) -> &[Card] {
        &self.cards[self.cursor.min(self.cards.len())..]
    }
    /// Cards that have left the pile, in draw order.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.cursor.min(self.cards.len())]
    }
    /// Total cards the session started with.
    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

/// top of the pile is the front of the vector
impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            cursor: 0,
            revealed: Vec::new(),
        }
    }
}

impl Iterator for Pile {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.reveal(1).pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unique;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pile(n: usize) -> Pile {
        Pile::from(
            (0..n)
                .map(|i| Card::from(format!("Card {}", i).as_str()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn reveals_in_pile_order() {
        let mut pile = pile(5);
        let top = pile.upcoming()[..3].to_vec();
        assert_eq!(pile.reveal(3), top);
        assert_eq!(pile.remaining(), 2);
        assert_eq!(pile.drawn(), top.as_slice());
    }

    #[test]
    fn short_pile_reveals_what_is_left() {
        let mut pile = pile(2);
        assert_eq!(pile.reveal(3).len(), 2);
        assert!(pile.is_empty());
        assert!(pile.reveal(3).is_empty());
        assert_eq!(pile.remaining(), 0);
    }

    #[test]
    fn revealed_cards_never_return() {
        let mut pile = pile(9);
        let first = pile.reveal(3);
        let rest = pile.by_ref().collect::<Vec<_>>();
        assert_eq!(rest.len(), 6);
        assert!(first.iter().all(|c| rest.iter().all(|r| r.id() != c.id())));
    }

    #[test]
    fn record_does_not_touch_pool() {
        let mut pile = pile(4);
        let shown = pile.reveal(1);
        pile.record(&shown);
        assert_eq!(pile.revealed(), shown.as_slice());
        assert_eq!(pile.remaining(), 3);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let cards = pile(20).upcoming().to_vec();
        let a = Pile::shuffled(cards.clone(), &mut SmallRng::seed_from_u64(7));
        let b = Pile::shuffled(cards.clone(), &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.size(), cards.len());
    }
}
