use super::*;
use crate::CHOICE_SIZE;
use crate::Cost;
use crate::DIG_SIZE;
use crate::Face;
use crate::ID;
use crate::Position;
use crate::STRIKE_FACE;
use crate::Unique;
use crate::cards::Card;

/// Paid digs and choice resolution.
impl Session {
    /// Charge the active player, roll, and reveal.
    ///
    /// Checks, in order: closed, choice pending, unknown player, wrong turn,
    /// already dug. The cost is `1 + digs_this_game` and is paid whatever
    /// the die shows. On a six the top three cards become a pending choice
    /// and the player's turn is not yet complete; on anything else the top
    /// card is granted outright. The turn never advances here unless the
    /// session was created with `auto_pass`.
    pub fn roll(&mut self, who: Option<ID<Player>>, die: &mut dyn Die) -> Result<Outcome, Illegal> {
        self.ensure_open()?;
        self.ensure_settled()?;
        let pos = self.actor(who)?;
        if self.players()[pos].dug_this_turn() {
            return Err(Illegal::AlreadyActed);
        }
        let cost = self.players_mut()[pos].charge();
        let face = die.roll();
        match face {
            STRIKE_FACE => {
                let choices = self.pile_mut().reveal(CHOICE_SIZE);
                self.pile_mut().record(&choices);
                match choices.is_empty() {
                    true => Ok(self.grant(pos, cost, face, None)),
                    false => Ok(self.offer(pos, cost, face, choices)),
                }
            }
            _ => {
                let shown = self.pile_mut().reveal(DIG_SIZE);
                self.pile_mut().record(&shown);
                Ok(self.grant(pos, cost, face, shown.into_iter().next()))
            }
        }
    }

    /// Keep one card from the pending choice; the rest are discarded.
    ///
    /// Checks, in order: closed, nothing pending, unknown player, wrong
    /// turn, card not among the choices.
    pub fn choose(&mut self, who: Option<ID<Player>>, card: ID<Card>) -> Result<Outcome, Illegal> {
        self.ensure_open()?;
        if self.pending_choices().is_empty() {
            return Err(Illegal::NoPendingChoice);
        }
        let pos = self.actor(who)?;
        if self
            .pending_player_id()
            .is_some_and(|owner| owner != self.players()[pos].id())
        {
            return Err(Illegal::InvalidTurn);
        }
        let index = self
            .pending_choices()
            .iter()
            .position(|c| c.id() == card)
            .ok_or(Illegal::UnknownCard)?;
        let mut discarded = self.close_choice();
        let received = discarded.remove(index);
        let player = self.players()[pos].id();
        self.players_mut()[pos].gain(received.clone());
        let entry = Entry::new(
            Kind::Choose,
            format!("{} chooses **{}**.", self.players()[pos], received),
        )
        .by(&self.players()[pos])
        .with(std::slice::from_ref(&received));
        self.settle(pos);
        self.append(entry);
        Ok(Outcome::Chose {
            player,
            received,
            discarded,
        })
    }
}

impl Session {
    fn grant(&mut self, pos: Position, cost: Cost, face: Face, received: Option<Card>) -> Outcome {
        let player = self.players()[pos].id();
        let text = match received {
            Some(ref card) => format!("{} dug {} and found **{}**.", self.players()[pos], face, card),
            None => format!("{} dug {} but found nothing.", self.players()[pos], face),
        };
        let entry = Entry::new(Kind::Dig, text)
            .by(&self.players()[pos])
            .paid(cost)
            .rolled(face)
            .with(received.as_slice());
        if let Some(ref card) = received {
            self.players_mut()[pos].gain(card.clone());
        }
        self.settle(pos);
        self.append(entry);
        Outcome::Dig {
            player,
            cost,
            face,
            received,
        }
    }

    fn offer(&mut self, pos: Position, cost: Cost, face: Face, choices: Vec<Card>) -> Outcome {
        let player = self.players()[pos].id();
        let entry = Entry::new(
            Kind::Strike,
            format!(
                "{} rolled {}: choose one of the top {}.",
                self.players()[pos],
                face,
                choices.len()
            ),
        )
        .by(&self.players()[pos])
        .paid(cost)
        .rolled(face)
        .with(&choices);
        self.open_choice(player, choices.clone());
        self.append(entry);
        Outcome::Strike {
            player,
            cost,
            face,
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn session(seats: usize, cards: usize, auto_pass: bool) -> Session {
        Session::deal(Setup {
            names: (0..seats).map(|i| format!("P{}", i)).collect(),
            cards: (0..cards)
                .map(|i| Card::from(format!("Card {}", i).as_str()))
                .collect(),
            seed: Some(5),
            auto_pass,
        })
    }

    #[test]
    fn nth_dig_costs_n() {
        let mut session = session(2, 40, false);
        let ref mut die = Loaded::from(vec![2, 4, 1]);
        let mut costs = Vec::new();
        for _ in 0..4 {
            costs.push(session.roll(None, die).unwrap().cost());
            session.pass(None).unwrap();
            session.roll(None, die).unwrap();
            session.pass(None).unwrap();
        }
        assert_eq!(costs, [Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(session.players()[0].spent(), 10);
        assert_eq!(session.players()[1].spent(), 10);
    }

    #[test]
    fn costs_are_per_player() {
        let mut session = session(2, 40, false);
        let ref mut die = Loaded::from(1);
        session.roll(None, die).unwrap();
        session.pass(None).unwrap();
        session.pass(None).unwrap();
        session.roll(None, die).unwrap();
        session.pass(None).unwrap();
        assert_eq!(session.roll(None, die).unwrap().cost(), Some(1));
    }

    #[test]
    fn auto_dig_grants_top_card() {
        let mut session = session(2, 10, false);
        let top = session.pile().upcoming()[0].clone();
        let outcome = session.roll(None, &mut Loaded::from(5)).unwrap();
        assert_eq!(outcome.received(), Some(&top));
        assert_eq!(session.players()[0].gains(), &[top.clone()]);
        assert_eq!(session.pile().revealed(), &[top]);
        assert_eq!(session.pile().remaining(), 9);
        assert!(session.players()[0].dug_this_turn());
        assert_eq!(session.turn_idx(), 0);
    }

    #[test]
    fn second_roll_in_turn_is_rejected() {
        let mut session = session(2, 10, false);
        let ref mut die = Loaded::from(2);
        session.roll(None, die).unwrap();
        let before = session.clone();
        assert_eq!(session.roll(None, die), Err(Illegal::AlreadyActed));
        assert_eq!(session.roll(None, die), Err(Illegal::AlreadyActed));
        assert_eq!(session, before);
    }

    #[test]
    fn roll_out_of_turn_is_rejected() {
        let mut session = session(2, 10, false);
        let other = Some(session.players()[1].id());
        assert_eq!(session.roll(other, &mut Loaded::from(2)), Err(Illegal::InvalidTurn));
        assert_eq!(session.roll(Some(ID::default()), &mut Loaded::from(2)), Err(Illegal::UnknownPlayer));
        assert_eq!(session.players()[1].digs_this_game(), 0);
        assert!(session.log().is_empty());
    }

    #[test]
    fn choice_errors() {
        let mut session = session(2, 10, false);
        let stray = ID::<Card>::default();
        assert_eq!(session.choose(None, stray), Err(Illegal::NoPendingChoice));
        session.roll(None, &mut Loaded::from(6)).unwrap();
        let other = Some(session.players()[1].id());
        let card = session.pending_choices()[0].id();
        assert_eq!(session.choose(None, stray), Err(Illegal::UnknownCard));
        assert_eq!(session.choose(other, card), Err(Illegal::InvalidTurn));
        assert_eq!(session.choose(Some(ID::default()), card), Err(Illegal::UnknownPlayer));
        assert!(session.choose(None, card).is_ok());
        assert_eq!(session.choose(None, card), Err(Illegal::NoPendingChoice));
    }

    #[test]
    fn roll_after_choice_is_rejected() {
        let mut session = session(2, 10, false);
        let ref mut die = Loaded::from(6);
        session.roll(None, die).unwrap();
        let card = session.pending_choices()[1].id();
        session.choose(None, card).unwrap();
        assert_eq!(session.roll(None, die), Err(Illegal::AlreadyActed));
    }

    #[test]
    fn discarded_choices_never_return() {
        let mut session = session(2, 30, false);
        let ref mut die = Loaded::from(6);
        session.roll(None, die).unwrap();
        let offered = session.pending_choices().to_vec();
        session.choose(None, offered[0].id()).unwrap();
        let discarded = offered[1..].iter().map(|c| c.id()).collect::<HashSet<_>>();
        let mut seen = Vec::new();
        while !session.pile().is_empty() {
            session.pass(None).unwrap();
            if let Outcome::Strike { choices, .. } = session.roll(None, die).unwrap() {
                seen.extend(choices.iter().map(|c| c.id()));
                session.choose(None, choices[0].id()).unwrap();
            }
        }
        assert!(seen.iter().all(|id| !discarded.contains(id)));
        assert!(session.players().iter().flat_map(|p| p.gains()).all(|c| !discarded.contains(&c.id())));
        assert!(session.audit().is_ok());
    }

    #[test]
    fn short_pile_offers_what_is_left() {
        let mut session = session(1, 2, false);
        let outcome = session.roll(None, &mut Loaded::from(6)).unwrap();
        assert!(matches!(outcome, Outcome::Strike { ref choices, .. } if choices.len() == 2));
        assert_eq!(session.phase(), Phase::AwaitingChoice);
    }

    #[test]
    fn empty_pile_grants_nothing() {
        let mut session = session(1, 0, false);
        let outcome = session.roll(None, &mut Loaded::from(6)).unwrap();
        assert!(matches!(outcome, Outcome::Dig { received: None, cost: 1, .. }));
        assert_eq!(session.phase(), Phase::AwaitingAction);
        assert!(session.players()[0].dug_this_turn());
        session.pass(None).unwrap();
        let outcome = session.roll(None, &mut Loaded::from(2)).unwrap();
        assert!(matches!(outcome, Outcome::Dig { received: None, cost: 2, .. }));
        assert!(session.log()[2].text().contains("found nothing"));
    }

    #[test]
    fn auto_pass_advances_after_dig() {
        let mut session = session(2, 10, true);
        session.roll(None, &mut Loaded::from(3)).unwrap();
        assert_eq!(session.turn_idx(), 1);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log()[0].turn(), (1, 1));
        session.roll(None, &mut Loaded::from(6)).unwrap();
        assert_eq!(session.turn_idx(), 1);
        let card = session.pending_choices()[0].id();
        session.choose(None, card).unwrap();
        assert_eq!((session.turn_idx(), session.turn_num()), (0, 2));
        assert!(!session.active().dug_this_turn());
    }

    #[test]
    fn pending_iff_awaiting_choice() {
        let mut session = session(3, 60, false);
        let ref mut die = Loaded::from(vec![6, 1, 6, 6, 4, 2, 6]);
        for i in 0..40 {
            let _ = session.roll(None, die);
            assert_eq!(
                session.pending_choices().is_empty(),
                session.phase() != Phase::AwaitingChoice
            );
            let pending = session.pending_choices();
            if let Some(card) = pending.get(i % 3).or(pending.last()).map(|c| c.id()) {
                assert_eq!(session.pass(None), Err(Illegal::ChoicePending));
                session.choose(None, card).unwrap();
            }
            session.pass(None).unwrap();
            assert!(session.turn_idx() < session.players().len());
        }
        assert!(session.audit().is_ok());
    }
}
