use crate::results::WordleError;
use std::collections::HashSet;
use std::sync::Arc;

const ROOT: usize = 0;

#[derive(Debug)]
struct Node {
    value: char,
    children: Vec<usize>,
    is_leaf: bool,
}

impl Node {
    fn new(value: char) -> Node {
        Node {
            value,
            children: Vec::new(),
            is_leaf: false,
        }
    }
}

/// A prefix tree over the surviving candidate words, one level per letter
/// position.
///
/// Nodes live in a flat arena and refer to their children by index, so
/// pruning a branch is just detaching it from its parent's child list; the
/// orphaned slots are abandoned rather than reused, since the store only
/// shrinks over the life of one game and is dropped afterwards.
///
/// A flat set of the candidate words is kept in lockstep with the tree: at
/// all times the set equals exactly the words spelled by the leaf paths.
/// Pruning never fails; an empty store is valid and is only surfaced once a
/// guess is requested from it.
pub struct CandidateTrie {
    nodes: Vec<Node>,
    candidates: HashSet<Arc<str>>,
    word_length: usize,
}

impl CandidateTrie {
    /// Creates an empty trie for words of the given length.
    pub fn new(word_length: usize) -> CandidateTrie {
        CandidateTrie {
            nodes: vec![Node::new('\0')],
            candidates: HashSet::new(),
            word_length,
        }
    }

    /// Inserts a word, creating one node per new letter along its path.
    /// A word of the wrong length is refused.
    pub fn insert(&mut self, word: &str) -> Result<(), WordleError> {
        let num_letters = word.chars().count();
        if num_letters != self.word_length {
            return Err(WordleError::WordLength(num_letters));
        }
        let mut node = ROOT;
        for letter in word.chars() {
            node = match self.child_with_value(node, letter) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(letter));
                    self.nodes[node].children.push(child);
                    child
                }
            };
        }
        self.nodes[node].is_leaf = true;
        self.candidates.insert(Arc::from(word));
        Ok(())
    }

    /// The number of surviving candidates.
    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// The flat set of surviving candidates.
    pub fn candidates(&self) -> &HashSet<Arc<str>> {
        &self.candidates
    }

    /// The surviving candidates as a list, in no particular order.
    pub fn candidate_words(&self) -> Vec<Arc<str>> {
        self.candidates.iter().map(Arc::clone).collect()
    }

    /// Whether the given word is still a candidate.
    pub fn contains(&self, word: &str) -> bool {
        self.candidates.contains(word)
    }

    /// The letter is confirmed at this position: removes every branch at
    /// this position whose value is not the confirmed letter.
    ///
    /// Applying the same confirmation twice is a no-op the second time.
    pub fn fixup_correct(&mut self, position: usize, letter: char) {
        let mut prefix = String::with_capacity(self.word_length);
        self.prune_position(ROOT, 0, position, letter, true, &mut prefix);
    }

    /// The letter exists in the word but not at this position: removes the
    /// branch labeled `letter` at this position only, leaving words that
    /// place the letter elsewhere untouched.
    pub fn fixup_present_elsewhere(&mut self, position: usize, letter: char) {
        let mut prefix = String::with_capacity(self.word_length);
        self.prune_position(ROOT, 0, position, letter, false, &mut prefix);
    }

    /// The letter does not occur in the word at all: removes the letter's
    /// branch at every position.
    ///
    /// Whether an `Absent` verdict means this, or a same-position-only
    /// removal, depends on the other occurrences of the letter in the guess;
    /// that decision belongs to the caller (see
    /// [`TrieSolver::process_result`](crate::engine::TrieSolver::process_result)).
    pub fn fixup_absent(&mut self, letter: char) {
        let mut prefix = String::with_capacity(self.word_length);
        self.remove_everywhere(ROOT, letter, &mut prefix);
    }

    /// Reconstructs the words spelled by the leaf paths. The result always
    /// matches [`CandidateTrie::candidates`]; it exists so that the invariant
    /// can be checked from the outside.
    pub fn leaf_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.candidates.len());
        let mut prefix = String::with_capacity(self.word_length);
        self.collect_leaf_words(ROOT, &mut prefix, &mut words);
        words
    }

    fn child_with_value(&self, node: usize, letter: char) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[*child].value == letter)
    }

    /// Walks down to `position` and prunes that level's children: with
    /// `keep_letter` only the matching branch survives, without it only the
    /// matching branch is removed.
    fn prune_position(
        &mut self,
        node: usize,
        depth: usize,
        position: usize,
        letter: char,
        keep_letter: bool,
        prefix: &mut String,
    ) {
        if depth == position {
            let children = std::mem::take(&mut self.nodes[node].children);
            let mut kept = Vec::with_capacity(children.len());
            for child in children {
                if (self.nodes[child].value == letter) == keep_letter {
                    kept.push(child);
                } else {
                    self.drop_subtree(child, prefix);
                }
            }
            self.nodes[node].children = kept;
            return;
        }
        let children = self.nodes[node].children.clone();
        for child in children {
            prefix.push(self.nodes[child].value);
            self.prune_position(child, depth + 1, position, letter, keep_letter, prefix);
            prefix.pop();
        }
    }

    fn remove_everywhere(&mut self, node: usize, letter: char, prefix: &mut String) {
        let children = std::mem::take(&mut self.nodes[node].children);
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            if self.nodes[child].value == letter {
                self.drop_subtree(child, prefix);
            } else {
                kept.push(child);
            }
        }
        self.nodes[node].children = kept.clone();
        for child in kept {
            prefix.push(self.nodes[child].value);
            self.remove_everywhere(child, letter, prefix);
            prefix.pop();
        }
    }

    /// Detaches a subtree, removing every leaf word under it from the
    /// candidate set. `prefix` holds the letters above `node`.
    fn drop_subtree(&mut self, node: usize, prefix: &mut String) {
        prefix.push(self.nodes[node].value);
        if self.nodes[node].is_leaf {
            self.candidates.remove(prefix.as_str());
        }
        let children = std::mem::take(&mut self.nodes[node].children);
        for child in children {
            self.drop_subtree(child, prefix);
        }
        prefix.pop();
    }

    fn collect_leaf_words(&self, node: usize, prefix: &mut String, words: &mut Vec<String>) {
        if self.nodes[node].is_leaf {
            words.push(prefix.clone());
        }
        for child in self.nodes[node].children.clone() {
            prefix.push(self.nodes[child].value);
            self.collect_leaf_words(child, prefix, words);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_trie(words: &[&str]) -> CandidateTrie {
        let mut trie = CandidateTrie::new(words[0].len());
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    fn assert_set_matches_leaves(trie: &CandidateTrie) {
        let mut leaves = trie.leaf_words();
        leaves.sort();
        let mut set: Vec<String> = trie.candidates().iter().map(|w| w.to_string()).collect();
        set.sort();
        assert_eq!(leaves, set);
    }

    #[test]
    fn insert_and_count() {
        let trie = build_trie(&["slate", "slant", "crane"]);

        assert_eq!(trie.num_candidates(), 3);
        assert!(trie.contains("slate"));
        assert!(trie.contains("crane"));
        assert!(!trie.contains("slime"));
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn insert_wrong_length_is_refused() {
        let mut trie = CandidateTrie::new(5);

        assert_eq!(trie.insert("abc"), Err(WordleError::WordLength(3)));
        assert_eq!(trie.num_candidates(), 0);
    }

    #[test]
    fn fixup_correct_removes_siblings() {
        let mut trie = build_trie(&["slate", "crane", "crate", "slant"]);

        trie.fixup_correct(0, 'c');

        assert_eq!(trie.num_candidates(), 2);
        assert!(trie.contains("crane"));
        assert!(trie.contains("crate"));
        assert!(!trie.contains("slate"));
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn fixup_correct_deep_position() {
        let mut trie = build_trie(&["slate", "slant", "crane", "crate"]);

        trie.fixup_correct(3, 't');

        assert_eq!(trie.num_candidates(), 2);
        assert!(trie.contains("slate"));
        assert!(trie.contains("crate"));
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn fixup_correct_is_idempotent() {
        let mut trie = build_trie(&["slate", "slant", "crane", "crate"]);

        trie.fixup_correct(3, 't');
        let after_once: Vec<String> = {
            let mut words = trie.leaf_words();
            words.sort();
            words
        };
        trie.fixup_correct(3, 't');
        let mut after_twice = trie.leaf_words();
        after_twice.sort();

        assert_eq!(after_once, after_twice);
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn fixup_present_elsewhere_prunes_one_position_only() {
        let mut trie = build_trie(&["slate", "tangy", "crate"]);

        // 't' is in the word but not at position 3: "slate" and "crate" go,
        // "tangy" keeps its 't' at position 0.
        trie.fixup_present_elsewhere(3, 't');

        assert_eq!(trie.num_candidates(), 1);
        assert!(trie.contains("tangy"));
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn fixup_absent_removes_letter_everywhere() {
        let mut trie = build_trie(&["slate", "tangy", "crone", "bumpy"]);

        trie.fixup_absent('t');

        assert_eq!(trie.num_candidates(), 2);
        assert!(trie.contains("crone"));
        assert!(trie.contains("bumpy"));
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn fixups_only_shrink() {
        let mut trie = build_trie(&["slate", "slant", "crane", "crate", "tangy"]);

        let mut last = trie.num_candidates();
        trie.fixup_correct(0, 's');
        assert!(trie.num_candidates() <= last);
        last = trie.num_candidates();

        trie.fixup_present_elsewhere(4, 'e');
        assert!(trie.num_candidates() <= last);
        last = trie.num_candidates();

        trie.fixup_absent('z');
        assert!(trie.num_candidates() <= last);
        assert_set_matches_leaves(&trie);
    }

    #[test]
    fn pruning_to_empty_is_valid() {
        let mut trie = build_trie(&["slate", "slant"]);

        trie.fixup_correct(0, 'z');

        assert_eq!(trie.num_candidates(), 0);
        assert!(trie.leaf_words().is_empty());
    }

    #[test]
    fn set_matches_leaves_after_mixed_fixups() {
        let mut trie = build_trie(&["aback", "abase", "abate", "bates", "beads", "cease"]);

        trie.fixup_present_elsewhere(0, 'b');
        assert_set_matches_leaves(&trie);
        trie.fixup_correct(1, 'b');
        assert_set_matches_leaves(&trie);
        trie.fixup_absent('d');
        assert_set_matches_leaves(&trie);
        trie.fixup_absent('q');
        assert_set_matches_leaves(&trie);
    }
}
