use crate::checker::Checker;
use crate::data::WordBank;
use crate::results::{GameResult, Guess, KnownLetter, Verdict, WordleError};
use crate::selectors::WordSelector;
use crate::trie::CandidateTrie;
use std::collections::HashMap;
use std::sync::Arc;

/// Solves one game: a candidate trie narrowed after every round of feedback,
/// a selector that picks the best guess from what survives, and the
/// accumulator of confirmed letters.
///
/// The expected call order is [`make_initial_guess`], then alternating
/// [`process_result`] / [`make_subsequent_guess`] until a guess comes back
/// all-`Correct` or the guess budget runs out. The store only shrinks; a
/// solver is built per game and dropped afterwards.
///
/// [`make_initial_guess`]: TrieSolver::make_initial_guess
/// [`make_subsequent_guess`]: TrieSolver::make_subsequent_guess
/// [`process_result`]: TrieSolver::process_result
pub struct TrieSolver {
    trie: CandidateTrie,
    selector: Box<dyn WordSelector>,
    knowns: Vec<KnownLetter>,
}

impl TrieSolver {
    /// Builds the candidate store from the full bank.
    pub fn new(bank: &WordBank, selector: Box<dyn WordSelector>) -> Result<TrieSolver, WordleError> {
        let mut trie = CandidateTrie::new(bank.word_length());
        for word in bank.iter() {
            trie.insert(word)?;
        }
        Ok(TrieSolver {
            trie,
            selector,
            knowns: vec![KnownLetter::blank(); bank.word_length()],
        })
    }

    /// Picks the opening guess over the full candidate set.
    pub fn make_initial_guess(&mut self) -> Result<Arc<str>, WordleError> {
        self.next_guess(0)
    }

    /// Picks the guess for the given 0-based round over what remains.
    pub fn make_subsequent_guess(&mut self, round: usize) -> Result<Arc<str>, WordleError> {
        self.next_guess(round)
    }

    fn next_guess(&mut self, round: usize) -> Result<Arc<str>, WordleError> {
        let candidates = self.trie.candidate_words();
        self.selector
            .select(&candidates, &self.knowns, round)
            .ok_or(WordleError::NoCandidates)
    }

    /// Applies one round of verdicts to the candidate store.
    ///
    /// Corrections run green, then yellow, then black: greens narrow the tree
    /// before the other rules interpret the remaining ambiguity from
    /// duplicate letters. An `Absent` verdict removes the letter everywhere
    /// only when no other occurrence of it in the guess earned a better
    /// verdict; otherwise the true word does contain the letter, and only
    /// this position is ruled out. A guess without a full verdict sequence is
    /// ignored.
    pub fn process_result(&mut self, guess: &Guess) {
        let letters: Vec<char> = guess.text.chars().collect();
        if guess.verdicts.len() != letters.len() || letters.len() != self.knowns.len() {
            return;
        }
        for (index, verdict) in guess.verdicts.iter().enumerate() {
            if *verdict == Verdict::Correct {
                self.knowns[index].confirm(letters[index]);
                self.trie.fixup_correct(index, letters[index]);
            }
        }
        for (index, verdict) in guess.verdicts.iter().enumerate() {
            if *verdict == Verdict::PresentElsewhere {
                self.trie.fixup_present_elsewhere(index, letters[index]);
            }
        }
        for (index, verdict) in guess.verdicts.iter().enumerate() {
            if *verdict == Verdict::Absent {
                let letter = letters[index];
                let occurrences = letters.iter().filter(|other| **other == letter).count();
                if occurrences > 1 && another_occurrence_not_absent(&letters, &guess.verdicts, index)
                {
                    self.trie.fixup_present_elsewhere(index, letter);
                } else {
                    self.trie.fixup_absent(letter);
                }
            }
        }
    }

    /// The number of words still consistent with all feedback so far.
    pub fn num_candidates(&self) -> usize {
        self.trie.num_candidates()
    }

    /// The surviving candidates, in no particular order.
    pub fn candidates(&self) -> Vec<Arc<str>> {
        self.trie.candidate_words()
    }

    /// The per-slot accumulator of confirmed letters.
    pub fn known_letters(&self) -> &[KnownLetter] {
        &self.knowns
    }

    /// The selector's score table over the current candidates. Used by
    /// multi-board coordination to merge rankings across boards.
    pub fn scores(&mut self, round: usize) -> HashMap<Arc<str>, i64> {
        let candidates = self.trie.candidate_words();
        self.selector.compute_scores(&candidates, &self.knowns, round)
    }
}

fn another_occurrence_not_absent(letters: &[char], verdicts: &[Verdict], position: usize) -> bool {
    letters
        .iter()
        .zip(verdicts.iter())
        .enumerate()
        .any(|(index, (letter, verdict))| {
            index != position && *letter == letters[position] && *verdict != Verdict::Absent
        })
}

/// Attempts to guess the given word within the maximum number of guesses,
/// using words from the word bank.
pub fn play_game(
    secret: &str,
    max_num_guesses: usize,
    bank: &WordBank,
    selector: Box<dyn WordSelector>,
) -> GameResult {
    let secret = secret.to_lowercase();
    if !bank.contains(&secret) {
        return GameResult::UnknownWord;
    }
    let mut solver = match TrieSolver::new(bank, selector) {
        Ok(solver) => solver,
        Err(_) => return GameResult::UnknownWord,
    };
    let mut checker = match Checker::new(bank, &secret) {
        Ok(checker) => checker,
        Err(_) => return GameResult::UnknownWord,
    };
    let mut guesses: Vec<Box<str>> = Vec::new();
    for round in 0..max_num_guesses {
        let maybe_guess = if round == 0 {
            solver.make_initial_guess()
        } else {
            solver.make_subsequent_guess(round)
        };
        let guess_word = match maybe_guess {
            Ok(word) => word,
            Err(_) => return GameResult::UnknownWord,
        };
        guesses.push(Box::from(guess_word.as_ref()));
        let checked = match checker.check(&guess_word) {
            Ok(guess) => guess,
            Err(_) => return GameResult::UnknownWord,
        };
        if checked.is_correct() {
            return GameResult::Success(guesses);
        }
        solver.process_result(&checked);
    }
    GameResult::Failure(guesses)
}
