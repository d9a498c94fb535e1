use serde::Deserialize;
use serde::Serialize;

/// Coarse category of a card, guessed from its name.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Curse,
    Rock,
    #[default]
    Utility,
}

impl Tag {
    /// Name fragments that mark a mana rock.
    const ROCKS: [&'static str; 6] = [
        "signet",
        "talisman",
        "sol ring",
        "mind stone",
        "arcane signet",
        "fellwar stone",
    ];
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        let ref name = name.to_lowercase();
        if name.contains("curse") {
            Self::Curse
        } else if Self::ROCKS.iter().any(|rock| name.contains(rock)) {
            Self::Rock
        } else {
            Self::Utility
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tag::Curse => "curse",
                Tag::Rock => "rock",
                Tag::Utility => "utility",
            }
        )
    }
}
