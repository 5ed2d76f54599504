use core::fmt;

use rand::Rng;

use super::{
    board::Board,
    common::{BoardError, GuessOutcome},
    config::{NUM_SHIPS, TURN_LIMIT},
    ship::ShipSet,
    stats::Statistics,
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Message shown to the player when the game ends.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "You sunk all my battleships! You have won!",
            Outcome::Lost => "Game Over! You have lost",
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Guesses are accepted.
    Playing,
    /// The game just ended; the result is already counted as a win or loss.
    Over(Outcome),
    /// The game was counted and the player is being asked for a rematch.
    AwaitingRematchChoice,
    /// The player declined a rematch.
    Closed,
}

/// Errors returned by session transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The requested action is not valid in the current state.
    InvalidTransition {
        from: SessionState,
        action: &'static str,
    },
    /// The guess was rejected by the board (e.g. out of bounds).
    Board(BoardError),
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidTransition { from, action } => {
                write!(f, "cannot {} while {:?}", action, from)
            }
            SessionError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// One player's game: board, hidden ships, turn count and rematch flow.
///
/// Cumulative results live in a [`Statistics`] value owned by the caller and
/// lent to the transitions that change it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    ships: ShipSet,
    turns: u8,
    state: SessionState,
}

impl GameSession {
    /// Start a game with `NUM_SHIPS` ships placed at random.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_ships(ShipSet::random(rng, NUM_SHIPS))
    }

    /// Start a game with ships at known positions.
    pub fn with_ships(ships: ShipSet) -> Self {
        Self {
            board: Board::new(),
            ships,
            turns: 0,
            state: SessionState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ships still afloat.
    pub fn ships(&self) -> &ShipSet {
        &self.ships
    }

    /// Non-repeat guesses made in this game.
    pub fn turns(&self) -> u8 {
        self.turns
    }

    pub fn turns_remaining(&self) -> u8 {
        TURN_LIMIT.saturating_sub(self.turns)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Resolve a guess at (row, col).
    ///
    /// A repeat guess changes nothing. Otherwise the turn is consumed, a hit
    /// sinks the ship, and the game ends as soon as the last ship is sunk or
    /// the turn limit is reached. A last ship sunk on the final turn counts
    /// only as a win.
    pub fn guess(
        &mut self,
        row: usize,
        col: usize,
        stats: &mut Statistics,
    ) -> Result<GuessOutcome, SessionError> {
        self.expect(SessionState::Playing, "guess")?;
        if self.board.is_guessed(row, col)? {
            log::debug!("repeat guess at ({}, {})", row, col);
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        let hit = self.ships.remove(row, col);
        self.board.record(row, col, hit)?;
        self.turns += 1;
        log::debug!(
            "turn {}: ({}, {}) -> {}",
            self.turns,
            row,
            col,
            if hit { "hit" } else { "miss" }
        );

        if self.ships.is_empty() {
            self.end(Outcome::Won, stats);
        } else if self.turns >= TURN_LIMIT {
            self.end(Outcome::Lost, stats);
        }

        Ok(if hit {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        })
    }

    fn end(&mut self, outcome: Outcome, stats: &mut Statistics) {
        match outcome {
            Outcome::Won => stats.record_win(),
            Outcome::Lost => stats.record_loss(),
        }
        log::info!("game over after {} turns: {:?}", self.turns, outcome);
        self.state = SessionState::Over(outcome);
    }

    /// Count the finished game and move on to the rematch question.
    pub fn finish(&mut self, stats: &mut Statistics) -> Result<Outcome, SessionError> {
        let outcome = match self.state {
            SessionState::Over(outcome) => outcome,
            from => {
                return Err(SessionError::InvalidTransition {
                    from,
                    action: "finish",
                })
            }
        };
        stats.record_game();
        self.state = SessionState::AwaitingRematchChoice;
        Ok(outcome)
    }

    /// Accept the rematch: clear the board, hide new ships, reset turns.
    pub fn rematch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.expect(SessionState::AwaitingRematchChoice, "rematch")?;
        *self = Self::with_ships(ShipSet::random(rng, NUM_SHIPS));
        log::info!("rematch started");
        Ok(())
    }

    /// Decline the rematch. The session accepts no further transitions.
    pub fn decline(&mut self) -> Result<(), SessionError> {
        self.expect(SessionState::AwaitingRematchChoice, "decline")?;
        self.state = SessionState::Closed;
        Ok(())
    }

    fn expect(&self, wanted: SessionState, action: &'static str) -> Result<(), SessionError> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.state,
                action,
            })
        }
    }
}
