#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod player;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{place_fleet, PlacementError, PLACEMENT_ATTEMPTS};
pub use player::*;
#[cfg(feature = "std")]
pub use ui::ConsoleSpectator;
