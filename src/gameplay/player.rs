use crate::BASE_COST;
use crate::Cost;
use crate::ID;
use crate::Unique;
use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// Per-player ledger: what they kept and what they paid for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: ID<Player>,
    name: String,
    gains: Vec<Card>,
    digs_this_game: u32,
    dug_this_turn: bool,
    #[serde(default)]
    spent: Cost,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            id: ID::default(),
            name: name.trim().to_string(),
            gains: Vec::new(),
            digs_this_game: 0,
            dug_this_turn: false,
            spent: 0,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn gains(&self) -> &[Card] {
        &self.gains
    }
    pub fn digs_this_game(&self) -> u32 {
        self.digs_this_game
    }
    pub fn dug_this_turn(&self) -> bool {
        self.dug_this_turn
    }
    /// Total paid across every dig this game.
    pub fn spent(&self) -> Cost {
        self.spent
    }
    /// What the next dig will cost: one more than the last.
    pub fn price(&self) -> Cost {
        BASE_COST + self.digs_this_game
    }
}

/// Ledger mutations, driven by the session.
impl Player {
    pub(crate) fn charge(&mut self) -> Cost {
        let cost = self.price();
        self.digs_this_game += 1;
        self.spent += cost;
        cost
    }
    pub(crate) fn gain(&mut self, card: Card) {
        self.gains.push(card);
    }
    pub(crate) fn finish(&mut self) {
        self.dug_this_turn = true;
    }
    pub(crate) fn refresh(&mut self) {
        self.dug_this_turn = false;
    }
}

impl Unique for Player {
    fn id(&self) -> ID<Player> {
        self.id
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
