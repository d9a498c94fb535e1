pub mod action;
pub use action::*;

pub mod die;
pub use die::*;

pub mod entry;
pub use entry::*;

pub mod error;
pub use error::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod rotation;
pub use rotation::*;

pub mod session;
pub use session::*;

pub mod setup;
pub use setup::*;

mod dig;
