use super::Player;
use crate::Cost;
use crate::Face;
use crate::ID;
use crate::Millis;
use crate::Position;
use crate::cards::Card;

/// What an accepted action did, beyond the new session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Automatic grant. `received` is empty only when the pile ran dry.
    Dig {
        player: ID<Player>,
        cost: Cost,
        face: Face,
        received: Option<Card>,
    },
    /// A six: the session now waits on a choice among `choices`.
    Strike {
        player: ID<Player>,
        cost: Cost,
        face: Face,
        choices: Vec<Card>,
    },
    /// A choice was resolved. `discarded` are gone for good.
    Chose {
        player: ID<Player>,
        received: Card,
        discarded: Vec<Card>,
    },
    Passed {
        player: ID<Player>,
        turn_idx: Position,
        turn_num: u32,
    },
    /// Session closed. `abandoned` holds any choice left unresolved.
    Ended {
        closed_at: Millis,
        abandoned: Vec<Card>,
    },
}

impl Outcome {
    /// Card handed to a player by this action, if any.
    pub fn received(&self) -> Option<&Card> {
        match self {
            Self::Dig { received, .. } => received.as_ref(),
            Self::Chose { received, .. } => Some(received),
            _ => None,
        }
    }
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Dig { cost, .. } | Self::Strike { cost, .. } => Some(*cost),
            _ => None,
        }
    }
}
