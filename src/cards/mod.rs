pub mod card;
pub use card::*;

pub mod decklist;
pub use decklist::*;

pub mod pile;
pub use pile::*;

pub mod tag;
pub use tag::*;
