//! HTTP surface shared by every browser at a session.
//!
//! - [`Config`]: Command line and environment settings
//! - [`Server`]: actix-web server over a [`Lobby`](crate::gameroom::Lobby)
//! - [`handlers`]: One async handler per route
mod config;
mod error;
mod request;
mod response;
mod server;

pub mod handlers;

pub use config::*;
pub use request::*;
pub use response::*;
pub use server::*;
