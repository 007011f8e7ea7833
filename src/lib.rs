#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod cell;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod scores;
mod ship;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use scores::{ScoreEntry, ScoreError, ScoreTable};
pub use ship::*;
