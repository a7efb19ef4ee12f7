use crate::data::WordBank;
use crate::results::{Guess, Verdict, WordleError};
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Computes the per-letter verdicts for `guess` against `answer`.
///
/// Letters are judged in one left-to-right pass that consumes a remaining
/// count per answer letter, so a repeated guess letter can be `Correct` at
/// one occurrence and `Absent` at another. An earlier occurrence claims the
/// count first: with the answer `quiet`, guessing `queen` yields the third
/// letter `PresentElsewhere` and leaves the fourth `Absent`, even though the
/// fourth matches its slot.
pub fn verdicts_for_guess(answer: &str, guess: &str) -> Result<Vec<Verdict>, WordleError> {
    let answer_letters: Vec<char> = answer.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if guess_letters.len() != answer_letters.len() {
        return Err(WordleError::WordLength(guess_letters.len()));
    }
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for letter in &answer_letters {
        *remaining.entry(*letter).or_insert(0) += 1;
    }
    let mut verdicts = Vec::with_capacity(guess_letters.len());
    for (index, letter) in guess_letters.iter().enumerate() {
        let count = remaining.entry(*letter).or_insert(0);
        if *count == 0 {
            verdicts.push(Verdict::Absent);
        } else if *letter == answer_letters[index] {
            *count -= 1;
            verdicts.push(Verdict::Correct);
        } else {
            *count -= 1;
            verdicts.push(Verdict::PresentElsewhere);
        }
    }
    Ok(verdicts)
}

/// Whether `new_guess` honors every hint revealed by `prior`.
///
/// Every `Correct` position must repeat the same letter at the same
/// position, and for each letter the new guess must contain at least as many
/// occurrences as that letter earned `Correct` or `PresentElsewhere` hints.
/// An unchecked prior guess constrains nothing.
pub fn check_consistency(prior: &Guess, new_guess: &str) -> bool {
    let prior_letters: Vec<char> = prior.text.chars().collect();
    let new_letters: Vec<char> = new_guess.chars().collect();
    if prior.verdicts.len() != prior_letters.len() {
        return true;
    }
    let mut required: HashMap<char, usize> = HashMap::new();
    for (index, (letter, verdict)) in prior_letters
        .iter()
        .zip(prior.verdicts.iter())
        .enumerate()
    {
        match verdict {
            Verdict::Correct => {
                if new_letters.get(index) != Some(letter) {
                    return false;
                }
                *required.entry(*letter).or_insert(0) += 1;
            }
            Verdict::PresentElsewhere => {
                *required.entry(*letter).or_insert(0) += 1;
            }
            Verdict::Absent => {}
        }
    }
    required.into_iter().all(|(letter, needed)| {
        new_letters.iter().filter(|other| **other == letter).count() >= needed
    })
}

/// The feedback oracle: checks guesses against a fixed answer, validating
/// them against the dictionary first.
///
/// A guess that cannot be checked (wrong length, unknown word, or a
/// hard-mode violation) is rejected without assigning verdicts or advancing
/// the guess counter; the caller decides whether to re-prompt or abort.
#[derive(Debug)]
pub struct Checker {
    dictionary: HashSet<Arc<str>>,
    answer: Arc<str>,
    word_length: usize,
    hard_mode: bool,
    history: Vec<Guess>,
    num_checked: usize,
}

impl Checker {
    /// Creates a checker for one game. The answer must match the bank's word
    /// length; it does not have to be in the bank.
    pub fn new(bank: &WordBank, answer: &str) -> Result<Checker, WordleError> {
        let answer = answer.to_lowercase();
        let answer_length = answer.chars().count();
        if answer_length != bank.word_length() {
            return Err(WordleError::WordLength(answer_length));
        }
        Ok(Checker {
            dictionary: bank.iter().map(Arc::clone).collect(),
            answer: Arc::from(answer.as_str()),
            word_length: bank.word_length(),
            hard_mode: false,
            history: Vec::new(),
            num_checked: 0,
        })
    }

    /// Turns hard mode on or off. In hard mode every guess must honor all
    /// hints revealed by the guesses checked so far.
    pub fn set_hard_mode(&mut self, hard_mode: bool) {
        self.hard_mode = hard_mode;
    }

    /// How many guesses have been successfully checked.
    pub fn num_checked(&self) -> usize {
        self.num_checked
    }

    /// Checks a guess, returning it with its verdicts filled in.
    pub fn check(&mut self, guess_text: &str) -> Result<Guess, WordleError> {
        let guess_text = guess_text.to_lowercase();
        let num_letters = guess_text.chars().count();
        if num_letters != self.word_length {
            return Err(WordleError::WordLength(num_letters));
        }
        if !self.dictionary.contains(guess_text.as_str()) {
            return Err(WordleError::NotInDictionary);
        }
        if self.hard_mode
            && self
                .history
                .iter()
                .any(|prior| !check_consistency(prior, &guess_text))
        {
            return Err(WordleError::HardModeViolation);
        }
        let verdicts = verdicts_for_guess(&self.answer, &guess_text)?;
        let guess = Guess::with_verdicts(guess_text, verdicts);
        self.history.push(guess.clone());
        self.num_checked += 1;
        Ok(guess)
    }
}
