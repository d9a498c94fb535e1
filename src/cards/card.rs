use super::Tag;
use crate::ID;
use crate::Unique;
use serde::Deserialize;
use serde::Serialize;

/// One physical copy of a card in a session's pile.
///
/// Two copies of the same name are distinct cards with distinct ids,
/// so a choice can always be resolved unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: ID<Card>,
    name: String,
    #[serde(default)]
    tag: Tag,
    #[serde(default)]
    img: Option<String>,
    #[serde(default)]
    scry: Option<String>,
}

impl Card {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn tag(&self) -> Tag {
        self.tag
    }
    /// Image reference shown by clients.
    pub fn img(&self) -> Option<&str> {
        self.img.as_deref()
    }
    /// External page describing the card.
    pub fn scry(&self) -> Option<&str> {
        self.scry.as_deref()
    }
}

impl Unique for Card {
    fn id(&self) -> ID<Card> {
        self.id
    }
}

/// fresh copy with references derived from the name
impl From<&str> for Card {
    fn from(name: &str) -> Self {
        let name = name.trim();
        let ref query = encode(name);
        Self {
            id: ID::default(),
            name: name.to_string(),
            tag: Tag::from(name),
            img: Some(format!(
                "https://api.scryfall.com/cards/named?exact={}&format=image&version=small",
                query
            )),
            scry: Some(format!("https://scryfall.com/search?q=%21%22{}%22", query)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// percent-encode everything outside the unreserved URL set
fn encode(text: &str) -> String {
    text.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_are_distinct() {
        let a = Card::from("Sol Ring");
        let b = Card::from("Sol Ring");
        assert!(a.id() != b.id());
        assert!(a.name() == b.name());
        assert!(a.tag() == Tag::Rock);
    }

    #[test]
    fn references_are_encoded() {
        let card = Card::from("  Jace's Archivist ");
        assert_eq!(card.name(), "Jace's Archivist");
        assert_eq!(
            card.scry(),
            Some("https://scryfall.com/search?q=%21%22Jace%27s%20Archivist%22")
        );
        assert!(card.img().unwrap().contains("exact=Jace%27s%20Archivist&"));
    }

    #[test]
    fn deserializes_without_references() {
        let id = ID::<Card>::default();
        let json = format!(r#"{{"id":"{}","name":"Ponder"}}"#, id);
        let card = serde_json::from_str::<Card>(&json).unwrap();
        assert!(card.id() == id);
        assert!(card.tag() == Tag::Utility);
        assert!(card.img().is_none());
    }
}
