use serde::Deserialize;
use serde::Serialize;

/// Where a session stands. Derived from session fields, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Active player may roll (unless already dug) or pass.
    AwaitingAction,
    /// A six was rolled; the digger must keep one of the revealed cards.
    AwaitingChoice,
    /// Terminal. Read-only forever.
    Closed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::AwaitingAction => write!(f, "awaiting action"),
            Self::AwaitingChoice => write!(f, "awaiting choice"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
