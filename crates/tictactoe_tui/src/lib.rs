//! Terminal front end for tic-tac-toe.
//!
//! Renders a [`tictactoe::GameEngine`] with ratatui and maps key presses to
//! placements and restarts. All game rules live in the `tictactoe` crate;
//! this crate only draws and forwards input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Direction, action_for, move_cursor};
