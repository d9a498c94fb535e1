//! Shared multiplayer treasure-dig drafting sessions.
//!
//! Players take turns paying an escalating cost to dig into a shuffled pile
//! of cards. Most digs grant the top card outright; a six on the die reveals
//! three cards and suspends the session until the digger keeps one of them.
//!
//! ## Modules
//!
//! - [`cards`]: Card values, decklist parsing, and the consuming pile
//! - [`gameplay`]: The session state machine, dice, and the action log
//! - [`gameroom`]: Per-session serialized registry and persistence
//! - [`hosting`]: HTTP surface for browsers sharing a session

pub mod cards;
pub mod gameplay;

#[cfg(feature = "server")]
pub mod gameroom;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Price paid for a single dig.
pub type Cost = u32;
/// Face value shown by the die.
pub type Face = u8;
/// Seat index in turn order.
pub type Position = usize;
/// Unix-epoch milliseconds.
pub type Millis = u64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of faces on the dig die.
pub const DIE_FACES: Face = 6;
/// Face that reveals a choice instead of an automatic grant.
pub const STRIKE_FACE: Face = 6;
/// Cards revealed by an ordinary dig.
pub const DIG_SIZE: usize = 1;
/// Cards revealed when the die strikes.
pub const CHOICE_SIZE: usize = 3;
/// Base price of a dig before escalation.
pub const BASE_COST: Cost = 1;
/// Seat names used when a session is created without any.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Player 1", "Player 2"];

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
/// Renders as 32 lowercase hex characters.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Pull the first identifier out of free-form text, such as a pasted
    /// share link. Accepts simple or hyphenated forms in any case.
    pub fn find(raw: &str) -> Option<Self> {
        raw.split(|c: char| !(c.is_ascii_hexdigit() || c == '-'))
            .filter(|token| token.len() >= 32)
            .find_map(Self::scan)
            .map(Self::from)
    }
    /// leftmost hyphenated or simple uuid inside a hex-and-hyphen token
    fn scan(token: &str) -> Option<uuid::Uuid> {
        (0..token.len())
            .flat_map(|i| [36, 32].map(|n| token.get(i..i + n)))
            .flatten()
            .find_map(|window| uuid::Uuid::try_parse(window).ok())
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::try_parse(s.trim()).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner.simple(), f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Wall clock in unix-epoch milliseconds.
pub fn now() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or_default()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `<dir>/<secs>.log` and `level` to the terminal.
#[cfg(feature = "server")]
pub fn log(dir: &str, level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", dir, now() / 1000))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Sessions are persisted after every action, so nothing is lost.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing;

    #[test]
    fn renders_simple_hex() {
        let id = ID::<Thing>::default();
        let text = id.to_string();
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn parses_both_forms() {
        let id = ID::<Thing>::default();
        let hyphenated = id.inner().hyphenated().to_string();
        assert_eq!(ID::<Thing>::try_from(id.to_string().as_str()).ok(), Some(id));
        assert_eq!(ID::<Thing>::try_from(hyphenated.as_str()).ok(), Some(id));
    }

    #[test]
    fn finds_id_inside_link() {
        let id = ID::<Thing>::default();
        let link = format!("https://dig.example/treasure/{}?ref=deck-list", id);
        let upper = format!("code: {}", id.to_string().to_uppercase());
        assert_eq!(ID::<Thing>::find(&link), Some(id));
        assert_eq!(ID::<Thing>::find(&upper), Some(id));
        assert_eq!(ID::<Thing>::find("no code here"), None);
        let prefixed = format!("/treasure/cafe-{}", id);
        let hyphenated = format!("/treasure/beef-{}", id.inner().hyphenated());
        assert_eq!(ID::<Thing>::find(&prefixed), Some(id));
        assert_eq!(ID::<Thing>::find(&hyphenated), Some(id));
    }

    #[test]
    fn serde_uses_display() {
        let id = ID::<Thing>::default();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        assert_eq!(serde_json::from_str::<ID<Thing>>(&json).unwrap(), id);
    }
}
