use super::bitboard::BitBoard;

/// Width and height of the square grid.
pub const BOARD_SIZE: u8 = 5;
/// Number of single-cell ships hidden on the grid.
pub const NUM_SHIPS: usize = 3;
/// Non-repeat guesses allowed before the game is lost.
pub const TURN_LIMIT: u8 = 10;

/// Statistics file used when no path is given on the command line.
pub const DEFAULT_STATS_FILE: &str = "BattleshipStats.txt";

/// Cell set sized for the game grid.
pub type BB = BitBoard<u32, { BOARD_SIZE as usize }>;

const _: () = assert!((BOARD_SIZE as usize) * (BOARD_SIZE as usize) <= u32::BITS as usize);
const _: () = assert!(NUM_SHIPS <= (BOARD_SIZE as usize) * (BOARD_SIZE as usize));
