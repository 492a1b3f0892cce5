#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod runner;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use runner::{play_match, MatchResult};
