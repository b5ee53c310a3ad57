// Board geometry
pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: usize = 4;

// Pieces on the board (both players together) at which sliding starts
pub const MOVING_PHASE_THRESHOLD: usize = 6;

// Terminal front-end
pub const INPUT_POLL_MS: u64 = 50;

// Headless simulator defaults
pub const SIM_DEFAULT_GAMES: u32 = 1000;
pub const SIM_DEFAULT_SEED: u64 = 42;
pub const SIM_DEFAULT_MAX_MOVES: u32 = 200;
// Clicks allowed per committed move before a game is abandoned
pub const SIM_CLICKS_PER_MOVE_LIMIT: u32 = 256;
