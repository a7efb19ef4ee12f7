use crate::results::{WordleError, WORD_LENGTH};
use std::collections::HashSet;
use std::io::BufRead;
use std::io::Result;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the possible words for this Wordle game.
///
/// Every word in the bank has the same length, fixed by the first word seen.
/// The bank is immutable once constructed and cheap to share across threads.
#[derive(Clone)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_set: HashSet<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is converted to
    /// lower case. Blank lines and lines whose length differs from the first
    /// word's are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self> {
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut word_set: HashSet<Arc<str>> = HashSet::new();
        let mut word_length = 0;
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if word_length == 0 {
                word_length = word.chars().count();
            } else if word.chars().count() != word_length {
                continue;
            }
            let word: Arc<str> = Arc::from(word.as_str());
            all_words.push(Arc::clone(&word));
            word_set.insert(word);
        }
        if word_length == 0 {
            word_length = WORD_LENGTH;
        }
        Ok(WordBank {
            all_words,
            word_set,
            word_length,
        })
    }

    /// Constructs a new `WordBank` struct from the given words.
    ///
    /// Each word is converted to lower case. Unlike [`WordBank::from_reader`],
    /// a word whose length differs from the first word's is an error.
    pub fn from_iterator<S, I>(words: I) -> std::result::Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut word_set: HashSet<Arc<str>> = HashSet::new();
        let mut word_length = 0;
        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let this_length = word.chars().count();
            if word_length == 0 {
                word_length = this_length;
            } else if this_length != word_length {
                return Err(WordleError::WordLength(this_length));
            }
            let word: Arc<str> = Arc::from(word.as_str());
            all_words.push(Arc::clone(&word));
            word_set.insert(word);
        }
        if word_length == 0 {
            word_length = WORD_LENGTH;
        }
        Ok(WordBank {
            all_words,
            word_set,
            word_length,
        })
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Whether the bank contains no words at all.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the uniform length of the words in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Whether the given word is in the bank.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
