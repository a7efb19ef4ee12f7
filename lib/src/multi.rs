use crate::data::WordBank;
use crate::engine::TrieSolver;
use crate::results::{Guess, WordleError};
use crate::selectors::{pick_top, WordSelector};
use std::collections::HashMap;
use std::sync::Arc;

/// The number of boards in the standard simultaneous variant.
pub const NUM_BOARDS: usize = 4;

/// How many guesses the simultaneous variant allows.
pub const MULTI_MAX_GUESSES: usize = 10;

/// A board that falls below this many candidates gets finished off before
/// the orchestrator goes back to exploring for the others.
const EXPLORATION_THRESHOLD: usize = 10;

/// Coordinates several independent solvers that share one guess stream, one
/// per secret.
///
/// Each round the caller checks the shared guess against every board and
/// feeds all verdicts back at once. Boards that came back all-`Correct` are
/// retired; the rest prune independently. The next shared guess either
/// finishes off the board with the fewest remaining candidates, or, when no
/// board is close, sums the per-board score tables and takes the global top
/// scorer.
pub struct MultiSolver {
    solvers: Vec<TrieSolver>,
    in_play: Vec<bool>,
    lowest: Option<(usize, usize)>,
}

impl MultiSolver {
    /// Builds one solver per board from the same bank. Each board gets its
    /// own selector from the factory.
    pub fn new<F>(
        bank: &WordBank,
        num_boards: usize,
        make_selector: F,
    ) -> Result<MultiSolver, WordleError>
    where
        F: Fn() -> Box<dyn WordSelector>,
    {
        let mut solvers = Vec::with_capacity(num_boards);
        for _ in 0..num_boards {
            solvers.push(TrieSolver::new(bank, make_selector())?);
        }
        Ok(MultiSolver {
            in_play: vec![true; solvers.len()],
            solvers,
            lowest: None,
        })
    }

    pub fn num_boards(&self) -> usize {
        self.solvers.len()
    }

    /// Which boards are still being solved.
    pub fn in_play(&self) -> &[bool] {
        &self.in_play
    }

    /// Whether every board is done.
    pub fn is_finished(&self) -> bool {
        self.in_play.iter().all(|live| !live)
    }

    /// The remaining candidates on one board.
    pub fn num_candidates(&self, board: usize) -> usize {
        self.solvers[board].num_candidates()
    }

    /// Applies one round of verdicts, one `Guess` per board in board order.
    /// All-`Correct` boards are retired before any pruning happens, so a
    /// solved board never consumes feedback again.
    pub fn process_results(&mut self, guesses: &[Guess]) {
        for (board, guess) in guesses.iter().enumerate().take(self.solvers.len()) {
            if guess.is_correct() {
                self.in_play[board] = false;
            }
        }
        self.lowest = None;
        for (board, guess) in guesses.iter().enumerate().take(self.solvers.len()) {
            if !self.in_play[board] {
                continue;
            }
            self.solvers[board].process_result(guess);
            let count = self.solvers[board].num_candidates();
            if self
                .lowest
                .map_or(true, |(lowest_count, _)| count < lowest_count)
            {
                self.lowest = Some((count, board));
            }
        }
    }

    /// Picks the shared guess for the given round.
    pub fn next_guess(&mut self, round: usize) -> Result<Arc<str>, WordleError> {
        if let Some((count, board)) = self.lowest {
            if count < EXPLORATION_THRESHOLD {
                // One board is nearly pinned down; close it out.
                return self.solvers[board].make_subsequent_guess(round);
            }
        }
        let mut combined: HashMap<Arc<str>, i64> = HashMap::new();
        for board in 0..self.solvers.len() {
            if !self.in_play[board] {
                continue;
            }
            for (word, score) in self.solvers[board].scores(round) {
                *combined.entry(word).or_insert(0) += score;
            }
        }
        pick_top(combined).ok_or(WordleError::NoCandidates)
    }
}
