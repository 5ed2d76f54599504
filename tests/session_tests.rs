use battleship_solo::{
    BitBoardError, BoardError, GameSession, GuessOutcome, Outcome, SessionError, SessionState,
    ShipSet, Statistics, BOARD_SIZE, TURN_LIMIT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fixed_session() -> GameSession {
    GameSession::with_ships(ShipSet::from_cells([(0, 0), (2, 3), (4, 4)]).unwrap())
}

/// Cells with no ship on them in `fixed_session`, in row-major order.
fn water() -> impl Iterator<Item = (usize, usize)> {
    let size = BOARD_SIZE as usize;
    (0..size * size)
        .map(move |i| (i / size, i % size))
        .filter(|&cell| !matches!(cell, (0, 0) | (2, 3) | (4, 4)))
}

#[test]
fn sinking_every_ship_wins() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();

    assert_eq!(session.guess(0, 0, &mut stats).unwrap(), GuessOutcome::Hit);
    assert_eq!(session.guess(1, 1, &mut stats).unwrap(), GuessOutcome::Miss);
    assert_eq!(session.guess(2, 3, &mut stats).unwrap(), GuessOutcome::Hit);
    assert!(session.is_playing());
    assert_eq!(session.guess(4, 4, &mut stats).unwrap(), GuessOutcome::Hit);

    assert_eq!(session.state(), SessionState::Over(Outcome::Won));
    assert_eq!(session.turns(), 4);
    assert!(session.ships().is_empty());
    assert_eq!(stats, Statistics::new(1, 0, 0));

    assert_eq!(session.finish(&mut stats).unwrap(), Outcome::Won);
    assert_eq!(session.state(), SessionState::AwaitingRematchChoice);
    assert_eq!(stats, Statistics::new(1, 0, 1));
}

#[test]
fn running_out_of_turns_loses() {
    let mut session = fixed_session();
    let mut stats = Statistics::new(3, 2, 5);

    for (r, c) in water().take(TURN_LIMIT as usize - 1) {
        assert_eq!(session.guess(r, c, &mut stats).unwrap(), GuessOutcome::Miss);
        assert!(session.is_playing());
    }
    let (r, c) = water().nth(TURN_LIMIT as usize - 1).unwrap();
    session.guess(r, c, &mut stats).unwrap();

    assert_eq!(session.state(), SessionState::Over(Outcome::Lost));
    assert_eq!(session.turns(), TURN_LIMIT);
    assert_eq!(session.turns_remaining(), 0);
    assert_eq!(session.ships().len(), 3);
    assert_eq!(stats, Statistics::new(3, 3, 5));

    session.finish(&mut stats).unwrap();
    assert_eq!(stats, Statistics::new(3, 3, 6));
}

#[test]
fn winning_on_the_last_turn_counts_only_the_win() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();

    session.guess(0, 0, &mut stats).unwrap();
    session.guess(2, 3, &mut stats).unwrap();
    for (r, c) in water().take(TURN_LIMIT as usize - 3) {
        session.guess(r, c, &mut stats).unwrap();
    }
    assert_eq!(session.turns(), TURN_LIMIT - 1);
    assert!(session.is_playing());

    assert_eq!(session.guess(4, 4, &mut stats).unwrap(), GuessOutcome::Hit);
    assert_eq!(session.turns(), TURN_LIMIT);
    assert_eq!(session.state(), SessionState::Over(Outcome::Won));
    assert_eq!(stats, Statistics::new(1, 0, 0));
}

#[test]
fn repeat_guess_is_free() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();

    session.guess(0, 0, &mut stats).unwrap();
    session.guess(1, 0, &mut stats).unwrap();
    let ships = *session.ships();
    let board = *session.board();

    assert_eq!(
        session.guess(0, 0, &mut stats).unwrap(),
        GuessOutcome::AlreadyGuessed
    );
    assert_eq!(
        session.guess(1, 0, &mut stats).unwrap(),
        GuessOutcome::AlreadyGuessed
    );
    assert_eq!(session.turns(), 2);
    assert_eq!(*session.ships(), ships);
    assert_eq!(*session.board(), board);
}

#[test]
fn guesses_only_while_playing() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();
    for (r, c) in [(0, 0), (2, 3), (4, 4)] {
        session.guess(r, c, &mut stats).unwrap();
    }

    let err = session.guess(1, 1, &mut stats).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidTransition {
            from: SessionState::Over(Outcome::Won),
            action: "guess",
        }
    );
    assert!(session.rematch(&mut SmallRng::seed_from_u64(1)).is_err());
    assert!(session.decline().is_err());
    assert_eq!(session.turns(), 3);
}

#[test]
fn out_of_bounds_guess_is_rejected() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();
    let n = BOARD_SIZE as usize;
    assert_eq!(
        session.guess(n, 0, &mut stats).unwrap_err(),
        SessionError::Board(BoardError::BitBoardError(
            BitBoardError::IndexOutOfBounds { row: n, col: 0 }
        ))
    );
    assert_eq!(session.turns(), 0);
    assert!(session.is_playing());
}

#[test]
fn finish_requires_a_finished_game() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();
    assert!(session.finish(&mut stats).is_err());
    assert_eq!(stats.total_games_played, 0);
}

#[test]
fn rematch_resets_game_but_not_statistics() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut session = fixed_session();
    let mut stats = Statistics::default();
    for (r, c) in water().take(TURN_LIMIT as usize) {
        session.guess(r, c, &mut stats).unwrap();
    }
    session.finish(&mut stats).unwrap();
    let before = stats;

    session.rematch(&mut rng).unwrap();

    assert!(session.is_playing());
    assert_eq!(session.turns(), 0);
    assert!(session.board().is_pristine());
    assert_eq!(session.ships().len(), battleship_solo::NUM_SHIPS);
    assert_eq!(stats, before);
}

#[test]
fn decline_closes_the_session() {
    let mut session = fixed_session();
    let mut stats = Statistics::default();
    for (r, c) in [(0, 0), (2, 3), (4, 4)] {
        session.guess(r, c, &mut stats).unwrap();
    }
    session.finish(&mut stats).unwrap();
    session.decline().unwrap();
    assert_eq!(session.state(), SessionState::Closed);
    assert!(session.guess(1, 1, &mut stats).is_err());
}

#[test]
fn reproducible_placement_with_seed() {
    let a = GameSession::new(&mut SmallRng::seed_from_u64(42));
    let b = GameSession::new(&mut SmallRng::seed_from_u64(42));
    assert_eq!(a.ships(), b.ships());
}
