use crate::checker::Checker;
use crate::data::WordBank;
use crate::engine::TrieSolver;
use crate::selectors::WordSelector;
use rayon::prelude::*;

/// One completed game of a dictionary-wide evaluation: a self-contained
/// result record, keyed by the index its secret held in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub index: usize,
    pub answer: String,
    pub solved: bool,
    pub num_guesses: usize,
    /// How many candidates remained when the game ended.
    pub candidates_left: usize,
    /// The candidate-store size at the moment each guess was made.
    pub candidates_per_round: Vec<usize>,
    pub guesses: Vec<Box<str>>,
}

impl GameRecord {
    /// The header matching [`GameRecord::csv_row`].
    pub fn csv_header(max_num_guesses: usize) -> String {
        let mut columns: Vec<String> = (1..=max_num_guesses)
            .map(|round| format!("guess{}cands", round))
            .collect();
        columns.push("result".to_string());
        columns.push("words_left".to_string());
        columns.push("num_guesses".to_string());
        columns.push("answer".to_string());
        columns.join(",")
    }

    /// Renders the record as one CSV row. Rounds that were never played
    /// report a single remaining candidate.
    pub fn csv_row(&self, max_num_guesses: usize) -> String {
        let mut columns: Vec<String> = (0..max_num_guesses)
            .map(|round| {
                self.candidates_per_round
                    .get(round)
                    .copied()
                    .unwrap_or(1)
                    .to_string()
            })
            .collect();
        columns.push(if self.solved { "success" } else { "failure" }.to_string());
        columns.push(self.candidates_left.to_string());
        columns.push(self.num_guesses.to_string());
        columns.push(self.answer.clone());
        columns.join(",")
    }
}

/// Plays one automated game and records its outcome, the guess trail, and
/// the candidate counts along the way.
pub fn play_recorded_game(
    index: usize,
    secret: &str,
    max_num_guesses: usize,
    bank: &WordBank,
    selector: Box<dyn WordSelector>,
) -> GameRecord {
    let secret = secret.to_lowercase();
    let mut record = GameRecord {
        index,
        answer: secret.clone(),
        solved: false,
        num_guesses: 0,
        candidates_left: 0,
        candidates_per_round: Vec::new(),
        guesses: Vec::new(),
    };
    let mut solver = match TrieSolver::new(bank, selector) {
        Ok(solver) => solver,
        Err(_) => return record,
    };
    let mut checker = match Checker::new(bank, &secret) {
        Ok(checker) => checker,
        Err(_) => {
            record.candidates_left = solver.num_candidates();
            return record;
        }
    };
    for round in 0..max_num_guesses {
        record.candidates_per_round.push(solver.num_candidates());
        let maybe_guess = if round == 0 {
            solver.make_initial_guess()
        } else {
            solver.make_subsequent_guess(round)
        };
        let guess_word = match maybe_guess {
            Ok(word) => word,
            Err(_) => break,
        };
        record.guesses.push(Box::from(guess_word.as_ref()));
        record.num_guesses = round + 1;
        let checked = match checker.check(&guess_word) {
            Ok(guess) => guess,
            Err(_) => break,
        };
        if checked.is_correct() {
            record.solved = true;
            break;
        }
        solver.process_result(&checked);
    }
    record.candidates_left = solver.num_candidates();
    record
}

/// Plays one independent game per bank word and collects the records.
///
/// Every game is an explicit `(index, secret)` work item owning its solver
/// and oracle; the read-only bank is the only shared state. With `parallel`
/// the items run on the rayon pool, and because records are keyed by their
/// pre-assigned index the output order is the same as a sequential run no
/// matter when each game finishes.
pub fn evaluate_bank<F>(
    bank: &WordBank,
    max_num_guesses: usize,
    make_selector: F,
    parallel: bool,
) -> Vec<GameRecord>
where
    F: Fn() -> Box<dyn WordSelector> + Sync,
{
    if parallel {
        bank.par_iter()
            .enumerate()
            .map(|(index, secret)| {
                play_recorded_game(index, secret, max_num_guesses, bank, make_selector())
            })
            .collect()
    } else {
        bank.iter()
            .enumerate()
            .map(|(index, secret)| {
                play_recorded_game(index, secret, max_num_guesses, bank, make_selector())
            })
            .collect()
    }
}
