//! Game engine: board model, history, and click resolution.

pub mod history;
pub mod logic;
pub mod session;
pub mod types;

pub use history::History;
pub use logic::{
    has_winning_move, legal_moves, process_click, process_input, BoardInput, ClickOutcome,
};
pub use session::{FocusDirection, GameSession, GameView};
pub use types::{is_adjacent, Board, Cell, Phase, Player, Slide, ADJACENCIES, WIN_LINES};
