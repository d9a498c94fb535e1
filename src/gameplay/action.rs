use super::Player;
use crate::ID;
use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of requests a client may make against a session.
///
/// Player references are optional: absent means whoever holds the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Roll {
        #[serde(default)]
        player: Option<ID<Player>>,
    },
    Choose {
        #[serde(default)]
        player: Option<ID<Player>>,
        card: ID<Card>,
    },
    Pass {
        #[serde(default)]
        player: Option<ID<Player>>,
    },
    End,
}

impl Action {
    pub fn player(&self) -> Option<ID<Player>> {
        match self {
            Self::Roll { player } | Self::Choose { player, .. } | Self::Pass { player } => *player,
            Self::End => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let who = self
            .player()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "active".to_string());
        match self {
            Self::Roll { .. } => write!(f, "ROLL   {}", who),
            Self::Choose { card, .. } => write!(f, "CHOOSE {} {}", who, card),
            Self::Pass { .. } => write!(f, "PASS   {}", who),
            Self::End => write!(f, "END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_json() {
        let card = ID::<Card>::default();
        let json = format!(r#"{{"action":"choose","card":"{}"}}"#, card);
        let action = serde_json::from_str::<Action>(&json).unwrap();
        assert_eq!(action, Action::Choose { player: None, card });
        assert_eq!(
            serde_json::from_str::<Action>(r#"{"action":"end"}"#).unwrap(),
            Action::End
        );
    }

    #[test]
    fn unknown_actions_are_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"action":"steal"}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"action":"choose"}"#).is_err());
    }
}
