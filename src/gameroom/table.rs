use crate::gameplay::*;

/// A live session paired with the die that resolves its digs.
///
/// The die is runtime state. A seeded session that is reloaded from storage
/// gets a die reseeded from its seed and log length, so replays stay
/// deterministic without persisting generator internals.
pub struct Table {
    session: Session,
    die: Box<dyn Die>,
}

impl Table {
    pub fn new(session: Session, die: Box<dyn Die>) -> Self {
        Self { session, die }
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn die(&mut self) -> &mut dyn Die {
        self.die.as_mut()
    }
    /// Replace the session with a validated successor.
    pub fn commit(&mut self, session: Session) {
        self.session = session;
    }
}

impl From<Session> for Table {
    fn from(session: Session) -> Self {
        let die = dice(&session);
        Self::new(session, die)
    }
}

/// Fair die for a session, reseeded from its seed and log length.
/// Offset from the shuffle seed so rolls never replay the shuffle stream.
pub fn dice(session: &Session) -> Box<dyn Die> {
    Box::new(Dice::from(
        session
            .seed()
            .map(|seed| seed.wrapping_add(1) ^ session.log().len() as u64),
    ))
}
