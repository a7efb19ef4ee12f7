#[macro_use]
extern crate assert_matches;

use trie_wordle_solver::selectors::*;
use trie_wordle_solver::*;

fn create_word_bank(words: Vec<&str>) -> WordBank {
    WordBank::from_iterator(words).unwrap()
}

#[test]
fn play_game_solves_the_secret() {
    let bank = create_word_bank(vec!["alpha", "allot", "begot", "below", "endow", "ingot"]);
    let selector = Box::new(FrequencyPositionalSelector::new(&bank));

    let result = play_game("alpha", MAX_GUESSES, &bank, selector);

    match result {
        GameResult::Success(guesses) => {
            assert!(!guesses.is_empty());
            assert!(guesses.len() <= MAX_GUESSES);
            assert_eq!(guesses.last().unwrap().as_ref(), "alpha");
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn play_game_rejects_secret_outside_the_bank() {
    let bank = create_word_bank(vec!["alpha", "allot", "begot"]);
    let selector = Box::new(FrequencyPositionalSelector::new(&bank));

    assert_eq!(
        play_game("other", MAX_GUESSES, &bank, selector),
        GameResult::UnknownWord
    );
}

#[test]
fn play_game_out_of_guesses_is_a_failure() {
    // Words differing only in the first letter force one elimination per
    // round; two guesses cannot be enough.
    let bank = create_word_bank(vec![
        "bight", "fight", "light", "might", "night", "right", "sight", "tight",
    ]);
    let selector = Box::new(FrequencyPositionalSelector::new(&bank));

    let result = play_game("tight", 2, &bank, selector);

    match result {
        GameResult::Failure(guesses) => assert_eq!(guesses.len(), 2),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn solver_narrows_candidates_between_guesses() {
    let bank = create_word_bank(vec!["alpha", "allot", "begot", "below", "endow", "ingot"]);
    let mut solver =
        TrieSolver::new(&bank, Box::new(FrequencyPositionalSelector::new(&bank))).unwrap();
    assert_eq!(solver.num_candidates(), bank.len());

    let guess = solver.make_initial_guess().unwrap();
    let verdicts = verdicts_for_guess("alpha", &guess).unwrap();
    solver.process_result(&Guess::with_verdicts(guess.to_string(), verdicts));

    assert!(solver.num_candidates() < bank.len());
    assert!(solver
        .candidates()
        .iter()
        .any(|word| word.as_ref() == "alpha"));
}

#[test]
fn solver_reports_exhaustion_as_no_candidates() {
    let bank = create_word_bank(vec!["slate", "crane"]);
    let mut solver =
        TrieSolver::new(&bank, Box::new(NaiveFrequencySelector::new())).unwrap();

    // Verdicts no bank word satisfies.
    solver.process_result(&Guess::with_verdicts("crane", vec![Verdict::Absent; 5]));

    assert_eq!(solver.num_candidates(), 0);
    assert_matches!(
        solver.make_subsequent_guess(1),
        Err(WordleError::NoCandidates)
    );
}

#[test]
fn known_letters_accumulate_greens_only_once() {
    let bank = create_word_bank(vec!["sweet", "sleet", "swoop"]);
    let mut solver =
        TrieSolver::new(&bank, Box::new(NaiveFrequencySelector::new())).unwrap();

    let verdicts = verdicts_for_guess("sweet", "sleet").unwrap();
    solver.process_result(&Guess::with_verdicts("sleet", verdicts.clone()));
    solver.process_result(&Guess::with_verdicts("sleet", verdicts));

    let knowns = solver.known_letters();
    assert_eq!(knowns[0].letter, 's');
    assert_eq!(knowns[0].verdict, Verdict::Correct);
    assert_eq!(knowns[2].letter, 'e');
    assert_eq!(knowns[3].letter, 'e');
    assert_eq!(knowns[4].letter, 't');
    assert_eq!(knowns[1].verdict, Verdict::Absent);
}

#[test]
fn every_deterministic_selector_wins_on_a_small_bank() {
    let words = vec!["alpha", "allot", "begot", "below", "endow", "ingot"];
    let bank = create_word_bank(words.clone());

    for secret in words {
        let selectors: Vec<Box<dyn WordSelector>> = vec![
            Box::new(NaiveFrequencySelector::new()),
            Box::new(ImprovedFrequencySelector::new()),
            Box::new(PositionalSelector::new()),
            Box::new(FrequencyPositionalSelector::new(&bank)),
        ];
        for selector in selectors {
            assert_matches!(
                play_game(secret, bank.len(), &bank, selector),
                GameResult::Success(_)
            );
        }
    }
}
