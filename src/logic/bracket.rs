//! Single-elimination bracket: start, current pair, winner advancement.

use crate::models::{Bracket, BracketError, Contestant, ContestantId, Outcome};
use rand::seq::SliceRandom;
use rand::Rng;

/// Start a fresh run over `contestants`; any previous run is discarded.
///
/// The pool is shuffled with `rng`, then round one takes the first
/// `min(bracket_size, pool.len())` entrants. Excess entrants are dropped for
/// this run rather than given byes. Callers wanting a reproducible run pass a
/// seeded generator; the web layer passes `rand::thread_rng()`.
pub fn start_bracket(
    bracket: &mut Bracket,
    contestants: &[Contestant],
    bracket_size: usize,
    rng: &mut impl Rng,
) -> Result<(), BracketError> {
    let mut pool = contestants.to_vec();
    pool.shuffle(rng);

    let effective = bracket_size.min(pool.len());
    // A lone entrant cannot play a match, and an odd field cannot be paired.
    if effective < 2 || effective % 2 != 0 {
        return Err(BracketError::InvalidBracketSize);
    }

    bracket.current_round = pool[..effective].to_vec();
    bracket.pool = pool;
    bracket.bracket_size = effective;
    bracket.next_round = Vec::new();
    bracket.match_index = 0;
    bracket.matches_in_round = effective / 2;
    bracket.finished = false;
    Ok(())
}

/// The pair for the match about to be decided.
///
/// Pure read: calling this repeatedly without an intervening `select_winner`
/// returns the same pair.
pub fn current_match(bracket: &Bracket) -> Result<(&Contestant, &Contestant), BracketError> {
    if !bracket.is_started() {
        return Err(BracketError::NotStarted);
    }
    if bracket.finished {
        return Err(BracketError::AlreadyFinished);
    }
    let i = bracket.match_index * 2;
    match (bracket.current_round.get(i), bracket.current_round.get(i + 1)) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(BracketError::AlreadyFinished),
    }
}

/// Record the winner of the current match and advance.
///
/// `winner` must be one of the two contestants of the current pair. When the
/// round completes, survivors are promoted into a new round; when a round
/// completes with a single survivor, that contestant is the champion and
/// `Outcome::Finished` is returned.
pub fn select_winner(
    bracket: &mut Bracket,
    winner: ContestantId,
) -> Result<Outcome, BracketError> {
    let (left, right) = current_match(bracket)?;
    let advancing = if left.id == winner {
        left.clone()
    } else if right.id == winner {
        right.clone()
    } else {
        return Err(BracketError::InvalidWinner);
    };

    bracket.next_round.push(advancing);
    bracket.match_index += 1;

    if bracket.match_index < bracket.matches_in_round {
        return Ok(Outcome::Continue);
    }

    // Round complete: either a champion, or promote survivors.
    if bracket.next_round.len() == 1 {
        bracket.finished = true;
        return Ok(Outcome::Finished);
    }

    bracket.current_round = std::mem::take(&mut bracket.next_round);
    bracket.match_index = 0;
    bracket.matches_in_round = bracket.current_round.len() / 2;
    Ok(Outcome::Continue)
}
