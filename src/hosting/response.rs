use crate::ID;
use crate::Millis;
use crate::Position;
use crate::Unique;
use crate::cards::Card;
use crate::gameplay::*;
use serde::Serialize;

/// What clients see of a session. The order of undrawn cards stays hidden.
#[derive(Debug, Serialize)]
pub struct View<'a> {
    pub id: ID<Session>,
    pub players: &'a [Player],
    pub turn_idx: Position,
    pub turn_num: u32,
    pub phase: Phase,
    pub pending_choices: &'a [Card],
    pub pending_player_id: Option<ID<Player>>,
    pub pile: PileView<'a>,
    pub log: &'a [Entry],
    pub created_at: Millis,
    pub closed_at: Option<Millis>,
    pub auto_pass: bool,
}

#[derive(Debug, Serialize)]
pub struct PileView<'a> {
    pub remaining: usize,
    pub revealed: &'a [Card],
}

impl<'a> From<&'a Session> for View<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            id: session.id(),
            players: session.players(),
            turn_idx: session.turn_idx(),
            turn_num: session.turn_num(),
            phase: session.phase(),
            pending_choices: session.pending_choices(),
            pending_player_id: session.pending_player_id(),
            pile: PileView {
                remaining: session.pile().remaining(),
                revealed: session.pile().revealed(),
            },
            log: session.log(),
            created_at: session.created_at(),
            closed_at: session.closed_at(),
            auto_pass: session.auto_pass(),
        }
    }
}

/// Body for a successful roll.
#[derive(Debug, Serialize)]
pub struct Rolled<'a> {
    pub ok: bool,
    pub state: View<'a>,
    /// `auto` for an outright grant, `choose` when a choice is pending.
    pub mode: &'static str,
    pub cost: crate::Cost,
    pub face: crate::Face,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<&'a Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed: Option<&'a [Card]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'a [Card]>,
}

impl<'a> Rolled<'a> {
    /// `None` unless the outcome came from a roll.
    pub fn new(session: &'a Session, outcome: &'a Outcome) -> Option<Self> {
        let state = View::from(session);
        match outcome {
            Outcome::Dig {
                cost,
                face,
                received,
                ..
            } => Some(Self {
                ok: true,
                state,
                mode: "auto",
                cost: *cost,
                face: *face,
                received: received.as_ref(),
                revealed: Some(received.as_slice()),
                choices: None,
            }),
            Outcome::Strike {
                cost,
                face,
                choices,
                ..
            } => Some(Self {
                ok: true,
                state,
                mode: "choose",
                cost: *cost,
                face: *face,
                received: None,
                revealed: None,
                choices: Some(choices.as_slice()),
            }),
            _ => None,
        }
    }
}

/// Body for a resolved choice. `revealed` lists the discarded cards.
#[derive(Debug, Serialize)]
pub struct Chosen<'a> {
    pub ok: bool,
    pub state: View<'a>,
    pub received: &'a Card,
    pub revealed: &'a [Card],
}

impl<'a> Chosen<'a> {
    pub fn new(session: &'a Session, outcome: &'a Outcome) -> Option<Self> {
        match outcome {
            Outcome::Chose {
                received,
                discarded,
                ..
            } => Some(Self {
                ok: true,
                state: View::from(session),
                received,
                revealed: discarded,
            }),
            _ => None,
        }
    }
}

/// Body for create, state, pass, and end.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<ID<Session>>,
    pub state: View<'a>,
}

impl<'a> From<&'a Session> for Snapshot<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            ok: true,
            session_id: None,
            state: View::from(session),
        }
    }
}

impl<'a> Snapshot<'a> {
    /// Include the id at the top level, as returned on create.
    pub fn created(session: &'a Session) -> Self {
        Self {
            session_id: Some(session.id()),
            ..Self::from(session)
        }
    }
}
