use super::*;
use crate::CHOICE_SIZE;
use crate::DEFAULT_PLAYERS;
use crate::ID;
use crate::Millis;
use crate::Position;
use crate::Unique;
use crate::cards::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// One shared treasure-dig game.
///
/// `Session` is the state machine every client of a room drives through
/// [`apply`](Self::apply). It owns the pile, the seating order, the turn
/// pointer, any outstanding choice, and the append-only log.
///
/// # Phases
///
/// The phase is a function of the data:
///
/// - `closed_at` set → [`Phase::Closed`]
/// - `pending_choices` non-empty → [`Phase::AwaitingChoice`]
/// - otherwise → [`Phase::AwaitingAction`]
///
/// # Validation
///
/// Each action checks every precondition before mutating anything, so an
/// [`Illegal`] result means nothing changed. Mutating actions append exactly
/// one [`Entry`] to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: ID<Session>,
    created_at: Millis,
    players: Vec<Player>,
    #[serde(flatten)]
    rotation: Rotation,
    pile: Pile,
    pending_choices: Vec<Card>,
    pending_player_id: Option<ID<Player>>,
    log: Vec<Entry>,
    closed_at: Option<Millis>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    auto_pass: bool,
}

/// Construction.
impl Session {
    /// Seat the players and shuffle the pile.
    pub fn deal(setup: Setup) -> Self {
        let Setup {
            names,
            cards,
            seed,
            auto_pass,
        } = setup;
        let names = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();
        let players = if names.is_empty() {
            DEFAULT_PLAYERS.iter().map(|name| Player::new(name)).collect()
        } else {
            names.iter().map(|name| Player::new(name)).collect()
        };
        let pile = match seed {
            Some(seed) => Pile::shuffled(cards, &mut SmallRng::seed_from_u64(seed)),
            None => Pile::shuffled(cards, &mut rand::rng()),
        };
        Self {
            id: ID::default(),
            created_at: crate::now(),
            players,
            rotation: Rotation::default(),
            pile,
            pending_choices: Vec::new(),
            pending_player_id: None,
            log: Vec::new(),
            closed_at: None,
            seed,
            auto_pass,
        }
    }
}

/// Public state accessors.
impl Session {
    pub fn created_at(&self) -> Millis {
        self.created_at
    }
    /// Seating order, which is also turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: ID<Player>) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }
    /// The player holding the turn.
    pub fn active(&self) -> &Player {
        &self.players[self.turn_idx()]
    }
    pub fn turn_idx(&self) -> Position {
        self.rotation.turn_idx()
    }
    pub fn turn_num(&self) -> u32 {
        self.rotation.turn_num()
    }
    pub fn pile(&self) -> &Pile {
        &self.pile
    }
    pub fn pending_choices(&self) -> &[Card] {
        &self.pending_choices
    }
    pub fn pending_player_id(&self) -> Option<ID<Player>> {
        self.pending_player_id
    }
    pub fn log(&self) -> &[Entry] {
        &self.log
    }
    pub fn closed_at(&self) -> Option<Millis> {
        self.closed_at
    }
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn auto_pass(&self) -> bool {
        self.auto_pass
    }
    pub fn phase(&self) -> Phase {
        if self.is_closed() {
            Phase::Closed
        } else if !self.pending_choices.is_empty() {
            Phase::AwaitingChoice
        } else {
            Phase::AwaitingAction
        }
    }
}

/// Action dispatch.
impl Session {
    /// Validate and apply one action. On error the session is untouched.
    pub fn apply(&mut self, action: Action, die: &mut dyn Die) -> Result<Outcome, Illegal> {
        match action {
            Action::Roll { player } => self.roll(player, die),
            Action::Choose { player, card } => self.choose(player, card),
            Action::Pass { player } => self.pass(player),
            Action::End => self.end(),
        }
        .inspect(|_| log::debug!("[session {}] {} -> {}", self.id, action, self.phase()))
        .inspect_err(|e| log::debug!("[session {}] {} rejected: {}", self.id, action, e))
    }

    /// Hand the turn to the next seat, whether or not the active player dug.
    pub fn pass(&mut self, who: Option<ID<Player>>) -> Result<Outcome, Illegal> {
        self.ensure_open()?;
        self.ensure_settled()?;
        let pos = self.actor(who)?;
        let player = self.players[pos].id();
        let text = if self.players[pos].dug_this_turn() {
            format!("{} passes the turn.", self.players[pos])
        } else {
            format!("{} passes without digging.", self.players[pos])
        };
        let entry = Entry::new(Kind::Pass, text).by(&self.players[pos]);
        self.advance();
        self.append(entry);
        Ok(Outcome::Passed {
            player,
            turn_idx: self.turn_idx(),
            turn_num: self.turn_num(),
        })
    }

    /// Close the session for good. Any open choice is abandoned, and what
    /// was paid for it stays paid.
    pub fn end(&mut self) -> Result<Outcome, Illegal> {
        self.ensure_open()?;
        let closed_at = crate::now();
        let abandoned = std::mem::take(&mut self.pending_choices);
        self.pending_player_id = None;
        self.closed_at = Some(closed_at);
        self.append(Entry::new(Kind::End, "Game ended.".to_string()).with(&abandoned));
        Ok(Outcome::Ended {
            closed_at,
            abandoned,
        })
    }
}

/// Precondition checks. None of these mutate.
impl Session {
    pub(crate) fn ensure_open(&self) -> Result<(), Illegal> {
        match self.is_closed() {
            true => Err(Illegal::SessionClosed),
            false => Ok(()),
        }
    }
    pub(crate) fn ensure_settled(&self) -> Result<(), Illegal> {
        match self.pending_choices.is_empty() {
            true => Ok(()),
            false => Err(Illegal::ChoicePending),
        }
    }
    /// Resolve who is acting; absent means the active player.
    pub(crate) fn actor(&self, who: Option<ID<Player>>) -> Result<Position, Illegal> {
        match who {
            None => Ok(self.turn_idx()),
            Some(id) => self
                .players
                .iter()
                .position(|p| p.id() == id)
                .ok_or(Illegal::UnknownPlayer)
                .and_then(|pos| match pos == self.turn_idx() {
                    true => Ok(pos),
                    false => Err(Illegal::InvalidTurn),
                }),
        }
    }
}

/// State transitions shared by the resolvers.
impl Session {
    pub(crate) fn advance(&mut self) {
        self.rotation.advance(self.players.len());
        let next = self.turn_idx();
        self.players[next].refresh();
    }
    /// Finish the acting player's dig, then move on if configured to.
    pub(crate) fn settle(&mut self, pos: Position) {
        self.players[pos].finish();
        if self.auto_pass {
            self.advance();
        }
    }
    pub(crate) fn append(&mut self, entry: Entry) {
        let seq = self.log.len();
        let turn = (self.turn_idx(), self.turn_num());
        self.log.push(entry.stamp(seq, crate::now(), turn));
    }
    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub(crate) fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }
    pub(crate) fn open_choice(&mut self, player: ID<Player>, choices: Vec<Card>) {
        self.pending_player_id = Some(player);
        self.pending_choices = choices;
    }
    pub(crate) fn close_choice(&mut self) -> Vec<Card> {
        self.pending_player_id = None;
        std::mem::take(&mut self.pending_choices)
    }
}

/// Invariant checks.
impl Session {
    /// Verify the structural invariants that every accepted action must
    /// preserve. A failure here is a defect, not a user error.
    pub fn audit(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.players.is_empty(), "session has no players");
        anyhow::ensure!(
            self.rotation.is_valid(self.players.len()),
            "turn pointer {} outside {} seats",
            self.rotation,
            self.players.len()
        );
        anyhow::ensure!(
            self.pending_choices.is_empty() == self.pending_player_id.is_none(),
            "pending choices and pending player disagree"
        );
        anyhow::ensure!(
            self.pending_choices.len() <= CHOICE_SIZE,
            "{} pending choices",
            self.pending_choices.len()
        );
        anyhow::ensure!(
            !(self.is_closed() && !self.pending_choices.is_empty()),
            "closed session still holds a pending choice"
        );
        anyhow::ensure!(
            self.pending_player_id
                .map_or(true, |id| id == self.active().id()),
            "pending choice belongs to an inactive player"
        );
        anyhow::ensure!(
            self.log.iter().enumerate().all(|(i, e)| e.seq() == i),
            "log sequence out of order"
        );
        let drawn = self
            .pile
            .drawn()
            .iter()
            .map(|c| c.id())
            .collect::<HashSet<_>>();
        let mut held = HashSet::new();
        for card in self
            .pending_choices
            .iter()
            .chain(self.players.iter().flat_map(|p| p.gains()))
        {
            anyhow::ensure!(drawn.contains(&card.id()), "{} was never drawn", card);
            anyhow::ensure!(held.insert(card.id()), "{} is held twice", card);
        }
        Ok(())
    }
}

impl Unique for Session {
    fn id(&self) -> ID<Session> {
        self.id
    }
}
