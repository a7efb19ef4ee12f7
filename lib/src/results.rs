use std::fmt;

/// The standard word length. Banks built from other material may use a
/// different uniform length; this is the default when nothing else is known.
pub const WORD_LENGTH: usize = 5;

/// How many guesses a single-board game allows.
pub const MAX_GUESSES: usize = 6;

/// The per-letter feedback for one position of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The letter is in the word, at this position.
    Correct,
    /// The letter is in the word, but somewhere else.
    PresentElsewhere,
    /// The letter is not in the word (or every copy of it is already
    /// accounted for by another position).
    Absent,
}

/// Indicates that an error occurred while solving or checking a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WordleError {
    /// A word did not have the expected length. Provides the offending length.
    WordLength(usize),
    /// A guess was not in the dictionary, so it could not be checked.
    NotInDictionary,
    /// The candidate store is empty: the dictionary cannot represent the
    /// secret given the feedback received so far.
    NoCandidates,
    /// A guess ignored a previously revealed hint while hard mode was on.
    HardModeViolation,
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordleError::WordLength(len) => {
                write!(f, "word has length {}, which doesn't match the bank", len)
            }
            WordleError::NotInDictionary => write!(f, "word is not in the dictionary"),
            WordleError::NoCandidates => write!(f, "no candidates remain"),
            WordleError::HardModeViolation => {
                write!(f, "guess ignores a previously revealed hint")
            }
        }
    }
}

impl std::error::Error for WordleError {}

/// A guessed word along with the verdicts it received, in letter order.
///
/// `verdicts` is empty until the guess has been checked, and exactly as long
/// as the word afterwards. Two guesses compare equal iff their verdict
/// sequences are equal: a guess "is correct" by virtue of its all-[`Correct`]
/// verdicts, no matter which word earned them.
///
/// [`Correct`]: Verdict::Correct
#[derive(Debug, Clone, Eq)]
pub struct Guess {
    pub text: String,
    pub verdicts: Vec<Verdict>,
}

impl Guess {
    /// Creates an unchecked guess with no verdicts.
    pub fn new<S: Into<String>>(text: S) -> Guess {
        Guess {
            text: text.into(),
            verdicts: Vec::new(),
        }
    }

    /// Creates a guess that has already been checked.
    pub fn with_verdicts<S: Into<String>>(text: S, verdicts: Vec<Verdict>) -> Guess {
        Guess {
            text: text.into(),
            verdicts,
        }
    }

    /// Whether this guess has received verdicts yet.
    pub fn is_checked(&self) -> bool {
        !self.verdicts.is_empty()
    }

    /// Whether every verdict is [`Verdict::Correct`]. An unchecked guess is
    /// never correct.
    pub fn is_correct(&self) -> bool {
        self.is_checked() && self.verdicts.iter().all(|v| *v == Verdict::Correct)
    }
}

impl PartialEq for Guess {
    fn eq(&self, other: &Self) -> bool {
        self.verdicts == other.verdicts
    }
}

/// The most certain state known for one letter slot.
///
/// Every slot starts blank with [`Verdict::Absent`]; it is upgraded to
/// [`Verdict::Correct`] at most once and never downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownLetter {
    pub letter: char,
    pub verdict: Verdict,
}

impl KnownLetter {
    /// A slot about which nothing is known.
    pub fn blank() -> KnownLetter {
        KnownLetter {
            letter: ' ',
            verdict: Verdict::Absent,
        }
    }

    /// Records that `letter` is confirmed at this slot. A slot that is
    /// already confirmed stays as it is.
    pub fn confirm(&mut self, letter: char) {
        if self.verdict != Verdict::Correct {
            self.letter = letter;
            self.verdict = Verdict::Correct;
        }
    }
}

impl Default for KnownLetter {
    fn default() -> KnownLetter {
        KnownLetter::blank()
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Box<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_equality_compares_verdicts_not_text() {
        let all_green = vec![Verdict::Correct; 5];
        let a = Guess::with_verdicts("haute", all_green.clone());
        let b = Guess::with_verdicts("slice", all_green);

        assert_eq!(a, b);
        assert_ne!(a, Guess::new("haute"));
    }

    #[test]
    fn guess_is_correct() {
        assert!(Guess::with_verdicts("abc", vec![Verdict::Correct; 3]).is_correct());
        assert!(!Guess::new("abc").is_correct());
        assert!(!Guess::with_verdicts(
            "abc",
            vec![Verdict::Correct, Verdict::Correct, Verdict::PresentElsewhere]
        )
        .is_correct());
    }

    #[test]
    fn known_letter_upgrades_once() {
        let mut known = KnownLetter::blank();
        assert_eq!(known.verdict, Verdict::Absent);

        known.confirm('a');
        assert_eq!(known.letter, 'a');
        assert_eq!(known.verdict, Verdict::Correct);

        known.confirm('b');
        assert_eq!(known.letter, 'a');
        assert_eq!(known.verdict, Verdict::Correct);
    }
}
