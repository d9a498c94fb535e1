use super::Player;
use crate::Cost;
use crate::Face;
use crate::ID;
use crate::Millis;
use crate::Position;
use crate::Unique;
use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// What kind of action produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Paid dig that granted (or tried to grant) the top card.
    Dig,
    /// Paid dig that rolled a six and opened a choice.
    Strike,
    /// Resolution of an open choice.
    Choose,
    Pass,
    End,
}

/// One immutable record in a session's audit trail.
///
/// Built by the session as an action is applied; `seq`, `at` and the
/// resulting turn pointer are stamped when it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    seq: usize,
    at: Millis,
    kind: Kind,
    player: Option<ID<Player>>,
    name: Option<String>,
    cost: Option<Cost>,
    face: Option<Face>,
    cards: Vec<Card>,
    turn_idx: Position,
    turn_num: u32,
    text: String,
}

impl Entry {
    pub fn new(kind: Kind, text: String) -> Self {
        Self {
            seq: 0,
            at: 0,
            kind,
            player: None,
            name: None,
            cost: None,
            face: None,
            cards: Vec::new(),
            turn_idx: 0,
            turn_num: 0,
            text,
        }
    }
    pub fn by(mut self, player: &Player) -> Self {
        self.player = Some(player.id());
        self.name = Some(player.name().to_string());
        self
    }
    pub fn paid(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }
    pub fn rolled(mut self, face: Face) -> Self {
        self.face = Some(face);
        self
    }
    pub fn with(mut self, cards: &[Card]) -> Self {
        self.cards = cards.to_vec();
        self
    }
    pub(crate) fn stamp(mut self, seq: usize, at: Millis, turn: (Position, u32)) -> Self {
        self.seq = seq;
        self.at = at;
        self.turn_idx = turn.0;
        self.turn_num = turn.1;
        self
    }
}

/// Accessors.
impl Entry {
    pub fn seq(&self) -> usize {
        self.seq
    }
    pub fn at(&self) -> Millis {
        self.at
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn player(&self) -> Option<ID<Player>> {
        self.player
    }
    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }
    pub fn face(&self) -> Option<Face> {
        self.face
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn turn(&self) -> (Position, u32) {
        (self.turn_idx, self.turn_num)
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:<4} {}", self.seq, self.text)
    }
}
