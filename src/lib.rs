//! SlideToe - tic-tac-toe where the pieces slide once all six are down.
//!
//! The `game` module is the whole rule engine; `ui` and `input` are the
//! terminal front-end, and `simulator` drives the engine headlessly.

pub mod build_info;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use game::{
    Board, BoardInput, Cell, ClickOutcome, GameSession, GameView, History, Phase, Player, Slide,
};
