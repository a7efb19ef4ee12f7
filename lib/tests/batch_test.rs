use trie_wordle_solver::selectors::*;
use trie_wordle_solver::*;

fn bank() -> WordBank {
    WordBank::from_iterator(vec!["alpha", "allot", "begot", "below", "endow", "ingot"]).unwrap()
}

#[test]
fn evaluate_bank_plays_every_word_in_order() {
    let bank = bank();

    let records = evaluate_bank(
        &bank,
        MAX_GUESSES,
        || Box::new(FrequencyPositionalSelector::new(&bank)),
        false,
    );

    assert_eq!(records.len(), bank.len());
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.index, index);
        assert_eq!(record.answer, bank[index].as_ref());
        assert!(record.solved);
        assert!(record.num_guesses <= MAX_GUESSES);
        assert_eq!(record.guesses.len(), record.num_guesses);
        assert_eq!(record.candidates_per_round.len(), record.num_guesses);
        // The store starts full and only shrinks.
        assert_eq!(record.candidates_per_round[0], bank.len());
        for window in record.candidates_per_round.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }
}

#[test]
fn parallel_run_matches_sequential_run() {
    let bank = bank();
    let make_selector = || {
        Box::new(FrequencyPositionalSelector::new(&bank)) as Box<dyn WordSelector>
    };

    let sequential = evaluate_bank(&bank, MAX_GUESSES, make_selector, false);
    let parallel = evaluate_bank(&bank, MAX_GUESSES, make_selector, true);

    assert_eq!(sequential, parallel);
}

#[test]
fn csv_row_matches_header_shape() {
    let bank = bank();
    let records = evaluate_bank(
        &bank,
        MAX_GUESSES,
        || Box::new(FrequencyPositionalSelector::new(&bank)),
        false,
    );

    let header = GameRecord::csv_header(MAX_GUESSES);
    assert_eq!(
        header,
        "guess1cands,guess2cands,guess3cands,guess4cands,guess5cands,guess6cands,\
         result,words_left,num_guesses,answer"
    );

    for record in &records {
        let row = record.csv_row(MAX_GUESSES);
        assert_eq!(row.split(',').count(), header.split(',').count());
        assert!(row.ends_with(&record.answer));
        assert!(row.contains("success"));
    }
}

#[test]
fn failed_game_is_recorded_not_skipped() {
    let bank = WordBank::from_iterator(vec![
        "bight", "fight", "light", "might", "night", "right", "sight", "tight",
    ])
    .unwrap();

    // Two guesses cannot separate eight words differing only in their first
    // letter.
    let records = evaluate_bank(
        &bank,
        2,
        || Box::new(FrequencyPositionalSelector::new(&bank)),
        false,
    );

    assert_eq!(records.len(), bank.len());
    let failures: Vec<&GameRecord> = records.iter().filter(|record| !record.solved).collect();
    assert!(!failures.is_empty());
    for failure in failures {
        assert_eq!(failure.num_guesses, 2);
        assert!(failure.candidates_left > 0);
        assert!(failure.csv_row(2).contains("failure"));
    }
}
