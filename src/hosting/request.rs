use crate::ID;
use crate::cards::Card;
use crate::cards::Decklist;
use crate::gameplay::*;
use crate::gameroom::Failure;
use serde::Deserialize;

/// Form body for `POST /treasure/create`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateForm {
    /// Comma-separated seat names.
    pub players: Option<String>,
    /// Decklist text, one `N Name` per line.
    pub raw_list: Option<String>,
    pub seed: Option<String>,
    pub auto_pass: Option<String>,
}

/// Identifies the acting player. Absent means whoever holds the turn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorForm {
    pub player_id: Option<String>,
}

/// Form body for `POST /treasure/{sid}/choose`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChooseForm {
    pub player_id: Option<String>,
    pub card_id: Option<String>,
}

impl TryFrom<CreateForm> for Setup {
    type Error = Failure;
    fn try_from(form: CreateForm) -> Result<Self, Self::Error> {
        let names = form
            .players
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        let cards = Decklist::parse(form.raw_list.as_deref().unwrap_or_default()).cards();
        if cards.is_empty() {
            return Err(Failure::Invalid("decklist is empty".to_string()));
        }
        let seed = match filled(form.seed.as_deref()) {
            None => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| Failure::Invalid(format!("seed must be an unsigned integer: {}", raw)))?,
            ),
        };
        let auto_pass = filled(form.auto_pass.as_deref())
            .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            names,
            cards,
            seed,
            auto_pass,
        })
    }
}

impl ActorForm {
    pub fn player(&self) -> Result<Option<ID<Player>>, Failure> {
        parse(self.player_id.as_deref(), "player_id")
    }
}

impl ChooseForm {
    pub fn player(&self) -> Result<Option<ID<Player>>, Failure> {
        parse(self.player_id.as_deref(), "player_id")
    }
    pub fn card(&self) -> Result<ID<Card>, Failure> {
        parse(self.card_id.as_deref(), "card_id")?
            .ok_or_else(|| Failure::Invalid("card_id is required".to_string()))
    }
}

/// Session id from a path segment, which may be a pasted share link.
pub fn session_id(raw: &str) -> Result<ID<Session>, Failure> {
    ID::find(raw).ok_or_else(|| Failure::Invalid(format!("not a session code: {}", raw)))
}

fn filled(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse<T>(raw: Option<&str>, field: &str) -> Result<Option<ID<T>>, Failure> {
    filled(raw)
        .map(|s| ID::try_from(s).map_err(|_| Failure::Invalid(format!("{} is not an id: {}", field, s))))
        .transpose()
}
