//! Guess-selection strategies.
//!
//! Every strategy shares the same skeleton: compute letter statistics over a
//! word list, score each candidate from those statistics, then take the top
//! scorer. The variants differ only in how the statistics are computed, so
//! the trait has a single required method and the sort-and-pick step is a
//! shared free function. The random variants exist as baselines for
//! comparison; they rank nothing and override [`WordSelector::select`]
//! directly.

use crate::data::WordBank;
use crate::results::{KnownLetter, Verdict, MAX_GUESSES};
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Ranks the surviving candidates and picks the next guess.
///
/// Selectors carry no per-game state: the evolving candidate set and the
/// known-correct letters are passed in on every call, along with the 0-based
/// `round` number. A selector may cache statistics derived from the full
/// dictionary (see [`FrequencyPositionalSelector`]); those are valid for any
/// game played from the same bank.
pub trait WordSelector {
    /// Assigns a score to each candidate. Higher scores make better guesses.
    fn compute_scores(
        &mut self,
        candidates: &[Arc<str>],
        knowns: &[KnownLetter],
        round: usize,
    ) -> HashMap<Arc<str>, i64>;

    /// Picks the best candidate, or `None` if there are no candidates.
    fn select(
        &mut self,
        candidates: &[Arc<str>],
        knowns: &[KnownLetter],
        round: usize,
    ) -> Option<Arc<str>> {
        pick_top(self.compute_scores(candidates, knowns, round))
    }
}

/// Picks the highest-scoring word. Ties resolve to the lexicographically
/// first word, so any selector that produces the same scores twice selects
/// the same word twice.
pub fn pick_top(scores: HashMap<Arc<str>, i64>) -> Option<Arc<str>> {
    scores
        .into_iter()
        .max_by(|(word_a, score_a), (word_b, score_b)| {
            score_a.cmp(score_b).then_with(|| word_b.cmp(word_a))
        })
        .map(|(word, _)| word)
}

fn letter_frequencies(words: &[Arc<str>]) -> HashMap<char, i64> {
    let mut frequency: HashMap<char, i64> = HashMap::new();
    for word in words {
        for letter in word.chars() {
            *frequency.entry(letter).or_insert(0) += 1;
        }
    }
    frequency
}

fn positional_frequencies(words: &[Arc<str>], word_length: usize) -> Vec<HashMap<char, i64>> {
    let mut tables: Vec<HashMap<char, i64>> = vec![HashMap::new(); word_length];
    for word in words {
        for (index, letter) in word.chars().enumerate() {
            *tables[index].entry(letter).or_insert(0) += 1;
        }
    }
    tables
}

fn confirmed_letters(knowns: &[KnownLetter]) -> HashSet<char> {
    knowns
        .iter()
        .filter(|known| known.verdict == Verdict::Correct)
        .map(|known| known.letter)
        .collect()
}

/// Scores each word from a positional table and an optional global table
/// (weighted double). Confirmed letters contribute nothing. Repeated letters
/// within a word are counted once, except on the final permitted guess where
/// every occurrence counts.
fn score_with_tables(
    candidates: &[Arc<str>],
    positional: &[HashMap<char, i64>],
    global: Option<&HashMap<char, i64>>,
    confirmed: &HashSet<char>,
    round: usize,
) -> HashMap<Arc<str>, i64> {
    let once_per_letter = round < MAX_GUESSES;
    candidates
        .iter()
        .map(|word| {
            let mut seen: HashSet<char> = HashSet::new();
            let mut score = 0;
            for (index, letter) in word.chars().enumerate() {
                let first_occurrence = seen.insert(letter);
                if (first_occurrence || !once_per_letter) && !confirmed.contains(&letter) {
                    score += positional
                        .get(index)
                        .and_then(|table| table.get(&letter))
                        .copied()
                        .unwrap_or(0);
                    if let Some(global) = global {
                        score += 2 * global.get(&letter).copied().unwrap_or(0);
                    }
                }
            }
            (Arc::clone(word), score)
        })
        .collect()
}

/// Scores each candidate by summing the global frequency of its distinct
/// letters over the live candidate set.
#[derive(Clone, Default)]
pub struct NaiveFrequencySelector;

impl NaiveFrequencySelector {
    pub fn new() -> NaiveFrequencySelector {
        NaiveFrequencySelector
    }
}

impl WordSelector for NaiveFrequencySelector {
    fn compute_scores(
        &mut self,
        candidates: &[Arc<str>],
        _knowns: &[KnownLetter],
        _round: usize,
    ) -> HashMap<Arc<str>, i64> {
        let frequency = letter_frequencies(candidates);
        candidates
            .iter()
            .map(|word| {
                let mut seen: HashSet<char> = HashSet::new();
                let mut score = 0;
                for letter in word.chars() {
                    if seen.insert(letter) {
                        score += frequency.get(&letter).copied().unwrap_or(0);
                    }
                }
                (Arc::clone(word), score)
            })
            .collect()
    }
}

/// As [`NaiveFrequencySelector`], but a letter contributes nothing once it is
/// confirmed anywhere, and a slot that is already solved contributes nothing
/// either, so the selector stops spending guesses re-proving what it knows.
#[derive(Clone, Default)]
pub struct ImprovedFrequencySelector;

impl ImprovedFrequencySelector {
    pub fn new() -> ImprovedFrequencySelector {
        ImprovedFrequencySelector
    }
}

impl WordSelector for ImprovedFrequencySelector {
    fn compute_scores(
        &mut self,
        candidates: &[Arc<str>],
        knowns: &[KnownLetter],
        _round: usize,
    ) -> HashMap<Arc<str>, i64> {
        let frequency = letter_frequencies(candidates);
        let confirmed = confirmed_letters(knowns);
        candidates
            .iter()
            .map(|word| {
                let mut seen: HashSet<char> = HashSet::new();
                let mut score = 0;
                for (index, letter) in word.chars().enumerate() {
                    let slot_solved = knowns
                        .get(index)
                        .map_or(false, |known| known.verdict == Verdict::Correct);
                    if seen.insert(letter) && !slot_solved && !confirmed.contains(&letter) {
                        score += frequency.get(&letter).copied().unwrap_or(0);
                    }
                }
                (Arc::clone(word), score)
            })
            .collect()
    }
}

/// Scores each letter by its frequency at that specific position among the
/// live candidates, instead of one global table.
#[derive(Clone, Default)]
pub struct PositionalSelector;

impl PositionalSelector {
    pub fn new() -> PositionalSelector {
        PositionalSelector
    }
}

impl WordSelector for PositionalSelector {
    fn compute_scores(
        &mut self,
        candidates: &[Arc<str>],
        knowns: &[KnownLetter],
        round: usize,
    ) -> HashMap<Arc<str>, i64> {
        let word_length = candidates.first().map_or(0, |word| word.chars().count());
        let positional = positional_frequencies(candidates, word_length);
        let confirmed = confirmed_letters(knowns);
        score_with_tables(candidates, &positional, None, &confirmed, round)
    }
}

/// The default selector: blends positional frequency with global letter
/// frequency, the latter weighted double.
///
/// Each letter contributes `positional[index][letter] + 2 * global[letter]`.
/// For the first two rounds the tables are the ones precomputed over the
/// entire dictionary, since early guesses gain the most from the full letter
/// distribution; from round 2 onward the tables come from the live candidate
/// set. The candidates themselves are always ranked from the live set.
#[derive(Clone)]
pub struct FrequencyPositionalSelector {
    full_positional: Vec<HashMap<char, i64>>,
    full_frequency: HashMap<char, i64>,
}

impl FrequencyPositionalSelector {
    /// Constructs the selector, precomputing the full-dictionary tables used
    /// for the opening rounds.
    pub fn new(bank: &WordBank) -> FrequencyPositionalSelector {
        FrequencyPositionalSelector {
            full_positional: positional_frequencies(bank, bank.word_length()),
            full_frequency: letter_frequencies(bank),
        }
    }
}

impl WordSelector for FrequencyPositionalSelector {
    fn compute_scores(
        &mut self,
        candidates: &[Arc<str>],
        knowns: &[KnownLetter],
        round: usize,
    ) -> HashMap<Arc<str>, i64> {
        let confirmed = confirmed_letters(knowns);
        if round < 2 {
            return score_with_tables(
                candidates,
                &self.full_positional,
                Some(&self.full_frequency),
                &confirmed,
                round,
            );
        }
        let word_length = candidates.first().map_or(0, |word| word.chars().count());
        let positional = positional_frequencies(candidates, word_length);
        let frequency = letter_frequencies(candidates);
        score_with_tables(candidates, &positional, Some(&frequency), &confirmed, round)
    }
}

/// Guesses at random from the surviving candidates. A baseline, not a
/// strategy.
#[derive(Clone, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> RandomSelector {
        RandomSelector
    }
}

impl WordSelector for RandomSelector {
    fn compute_scores(
        &mut self,
        _candidates: &[Arc<str>],
        _knowns: &[KnownLetter],
        _round: usize,
    ) -> HashMap<Arc<str>, i64> {
        // Random picks carry no ranking signal.
        HashMap::new()
    }

    fn select(
        &mut self,
        candidates: &[Arc<str>],
        _knowns: &[KnownLetter],
        _round: usize,
    ) -> Option<Arc<str>> {
        pick_random(candidates)
    }
}

/// As [`RandomSelector`], but avoids words with a repeated letter or more
/// than one vowel, to spread the information gained by early guesses. Falls
/// back to a plain random pick when no candidate qualifies.
#[derive(Clone, Default)]
pub struct EnhancedRandomSelector;

impl EnhancedRandomSelector {
    pub fn new() -> EnhancedRandomSelector {
        EnhancedRandomSelector
    }
}

impl WordSelector for EnhancedRandomSelector {
    fn compute_scores(
        &mut self,
        _candidates: &[Arc<str>],
        _knowns: &[KnownLetter],
        _round: usize,
    ) -> HashMap<Arc<str>, i64> {
        HashMap::new()
    }

    fn select(
        &mut self,
        candidates: &[Arc<str>],
        _knowns: &[KnownLetter],
        _round: usize,
    ) -> Option<Arc<str>> {
        let preferred: Vec<Arc<str>> = candidates
            .iter()
            .filter(|word| !contains_repeated_letter(word) && num_vowels(word) <= 1)
            .map(Arc::clone)
            .collect();
        if preferred.is_empty() {
            return pick_random(candidates);
        }
        pick_random(&preferred)
    }
}

fn pick_random(words: &[Arc<str>]) -> Option<Arc<str>> {
    if words.is_empty() {
        return None;
    }
    let random: usize = rand::random();
    words.get(random % words.len()).map(Arc::clone)
}

fn contains_repeated_letter(word: &str) -> bool {
    let mut seen: HashSet<char> = HashSet::new();
    word.chars().any(|letter| !seen.insert(letter))
}

fn is_vowel(letter: char) -> bool {
    matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn num_vowels(word: &str) -> usize {
    word.chars().filter(|letter| is_vowel(*letter)).count()
}
