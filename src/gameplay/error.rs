/// Reasons the engine refuses an action.
///
/// Every check runs before any state is touched, so a rejected action
/// leaves the session exactly as it was. Repeating a rejected action against
/// the same state yields the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Illegal {
    #[error("it is not this player's turn")]
    InvalidTurn,
    #[error("already dug this turn")]
    AlreadyActed,
    #[error("awaiting choice from previous roll")]
    ChoicePending,
    #[error("no pending choices")]
    NoPendingChoice,
    #[error("card not in pending choices")]
    UnknownCard,
    #[error("player not found")]
    UnknownPlayer,
    #[error("session closed")]
    SessionClosed,
}

impl Illegal {
    /// Stable machine-readable name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTurn => "invalid_turn",
            Self::AlreadyActed => "already_acted",
            Self::ChoicePending => "choice_pending",
            Self::NoPendingChoice => "no_pending_choice",
            Self::UnknownCard => "unknown_card",
            Self::UnknownPlayer => "unknown_player",
            Self::SessionClosed => "session_closed",
        }
    }
}
