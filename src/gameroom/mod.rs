//! Serialized access to live sessions.
//!
//! The [`Lobby`] keeps every open session behind its own lock, applies
//! actions one at a time, and writes each accepted state through a
//! [`Store`] before anyone else can observe it.
mod failure;
mod lobby;
#[cfg(feature = "database")]
mod postgres;
mod store;
mod table;

pub use failure::*;
pub use lobby::*;
#[cfg(feature = "database")]
pub use postgres::*;
pub use store::*;
pub use table::*;
