use crate::cards::Card;

/// Everything needed to open a new session.
#[derive(Debug, Clone, Default)]
pub struct Setup {
    /// Seat names in turn order. Empty means two default seats.
    pub names: Vec<String>,
    /// Cards for the pile, shuffled when the session is dealt.
    pub cards: Vec<Card>,
    /// Fixes the shuffle and the dice.
    pub seed: Option<u64>,
    /// Advance the turn as soon as a dig completes.
    pub auto_pass: bool,
}
