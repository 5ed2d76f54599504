//! Drives a [`GameSession`] against a [`Presenter`] until the player stops.

use rand::Rng;

use crate::core::{GameSession, SessionError, SessionState, Statistics};
use crate::ui::{GridLayout, Presenter};

/// Why [`play`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// The player declined a rematch.
    Declined,
    /// The presenter ran out of input mid-game.
    Closed,
}

/// Summary of one call to [`play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayReport {
    pub end: PlayEnd,
    /// Games finished during this call.
    pub games: u32,
}

fn render_all<P: Presenter + ?Sized>(
    presenter: &mut P,
    session: &GameSession,
    stats: &Statistics,
    message: &str,
) {
    presenter.render_board(session.board());
    presenter.render_turn(session.turns());
    presenter.render_result_message(message);
    presenter.render_statistics_summary(stats);
}

/// Run games until the player declines a rematch or input ends.
///
/// `stats` is updated in place; persisting it is left to the caller.
pub fn play<P, R>(
    session: &mut GameSession,
    stats: &mut Statistics,
    presenter: &mut P,
    layout: &GridLayout,
    rng: &mut R,
) -> Result<PlayReport, SessionError>
where
    P: Presenter + ?Sized,
    R: Rng + ?Sized,
{
    let mut games = 0;
    render_all(presenter, session, stats, "");

    loop {
        match session.state() {
            SessionState::Playing => {
                let Some(selection) = presenter.next_selection() else {
                    log::info!("input closed during play");
                    return Ok(PlayReport {
                        end: PlayEnd::Closed,
                        games,
                    });
                };
                let Some((row, col)) = selection.resolve(layout) else {
                    log::debug!("selection {:?} is not on a cell", selection);
                    continue;
                };
                let outcome = session.guess(row, col, stats)?;
                render_all(presenter, session, stats, outcome.message());
            }
            SessionState::Over(outcome) => {
                presenter.render_result_message(outcome.message());
                session.finish(stats)?;
                games += 1;
                presenter.render_statistics_summary(stats);
            }
            SessionState::AwaitingRematchChoice => {
                if presenter.confirm_rematch() {
                    session.rematch(rng)?;
                    render_all(presenter, session, stats, "");
                } else {
                    session.decline()?;
                }
            }
            SessionState::Closed => {
                return Ok(PlayReport {
                    end: PlayEnd::Declined,
                    games,
                });
            }
        }
    }
}
