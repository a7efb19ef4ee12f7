use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::time::Instant;
use trie_wordle_solver::selectors::*;
use trie_wordle_solver::*;

/// Simple program to run a Wordle game in reverse, where the computer guesses the word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// Which guess-selection strategy to use.
    #[arg(long, value_enum, default_value = "frequency-positional")]
    selector: SelectorArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark {
        /// Run the games on a thread pool instead of sequentially.
        #[arg(long)]
        parallel: bool,
    },
    /// Run a single game with the given word.
    Single { word: String },
    /// Run an interactive game against the solver.
    Interactive,
    /// Solve several boards at once, sharing one guess stream.
    Multi { words: Vec<String> },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SelectorArg {
    Naive,
    Improved,
    Positional,
    FrequencyPositional,
    Random,
    EnhancedRandom,
}

fn make_selector(arg: SelectorArg, bank: &WordBank) -> Box<dyn WordSelector> {
    match arg {
        SelectorArg::Naive => Box::new(NaiveFrequencySelector::new()),
        SelectorArg::Improved => Box::new(ImprovedFrequencySelector::new()),
        SelectorArg::Positional => Box::new(PositionalSelector::new()),
        SelectorArg::FrequencyPositional => Box::new(FrequencyPositionalSelector::new(bank)),
        SelectorArg::Random => Box::new(RandomSelector::new()),
        SelectorArg::EnhancedRandom => Box::new(EnhancedRandomSelector::new()),
    }
}

fn main() -> io::Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    match args.command {
        Command::Benchmark { parallel } => run_benchmark(&word_bank, args.selector, parallel),
        Command::Single { word } => play_single_game(&word, &word_bank, args.selector),
        Command::Interactive => play_interactive_game(&word_bank, args.selector)?,
        Command::Multi { words } => play_multi_game(&words, &word_bank, args.selector),
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(word_bank: &WordBank, selector: SelectorArg, parallel: bool) {
    let records = evaluate_bank(
        word_bank,
        MAX_GUESSES,
        || make_selector(selector, word_bank),
        parallel,
    );

    println!("{}", GameRecord::csv_header(MAX_GUESSES));
    for record in &records {
        println!("{}", record.csv_row(MAX_GUESSES));
    }

    let mut num_games_per_round: HashMap<usize, u32> = HashMap::new();
    let mut successes = 0;
    for record in &records {
        if record.solved {
            successes += 1;
            *num_games_per_round.entry(record.num_guesses).or_insert(0) += 1;
        }
    }

    println!("\n|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<usize> = num_games_per_round.keys().copied().collect();
    num_rounds.sort_unstable();
    for num_round in num_rounds {
        println!("|{}|{}|", num_round, num_games_per_round[&num_round]);
    }

    let solved_guess_counts: Vec<usize> = records
        .iter()
        .filter(|record| record.solved)
        .map(|record| record.num_guesses)
        .collect();
    if !solved_guess_counts.is_empty() {
        let average: f64 =
            solved_guess_counts.iter().sum::<usize>() as f64 / solved_guess_counts.len() as f64;
        let std_dev: f64 = (solved_guess_counts
            .iter()
            .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
            .sum::<f64>()
            / solved_guess_counts.len() as f64)
            .sqrt();
        println!(
            "\n**Average number of guesses:** {:.2} +/- {:.2}",
            average, std_dev
        );
    }
    println!(
        "{}/{} = {:.4}",
        successes,
        records.len(),
        successes as f64 / records.len() as f64
    );
}

fn play_single_game(word: &str, word_bank: &WordBank, selector: SelectorArg) {
    let result = play_game(
        word,
        MAX_GUESSES,
        word_bank,
        make_selector(selector, word_bank),
    );
    match result {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            eprintln!("Error: given word not in the word list.");
            std::process::exit(1);
        }
    }
}

fn play_interactive_game(word_bank: &WordBank, selector: SelectorArg) -> io::Result<()> {
    let mut solver = match TrieSolver::new(word_bank, make_selector(selector, word_bank)) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\""
    );

    for round in 0..MAX_GUESSES {
        let maybe_guess = if round == 0 {
            solver.make_initial_guess()
        } else {
            solver.make_subsequent_guess(round)
        };
        let guess = match maybe_guess {
            Ok(guess) => guess,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
        println!("I'm guessing: {}. How did I do?", guess);

        let mut result = read_verdicts(guess.as_ref(), word_bank.word_length());
        while let Err(err) = result {
            println!("{}", err);
            result = read_verdicts(guess.as_ref(), word_bank.word_length());
        }
        let result = result.unwrap();

        if result.is_correct() {
            println!("I did it! It took me {} guesses.", round + 1);
            return Ok(());
        }

        solver.process_result(&result);
    }

    println!("I couldn't guess it :(");

    Ok(())
}

fn read_verdicts(guess: &str, word_length: usize) -> io::Result<Guess> {
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    let input = buffer.trim();

    if input.chars().count() != word_length {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Input {} didn't match the length of my guess. Try again.",
                input
            ),
        ));
    }

    Ok(Guess::with_verdicts(
        guess,
        input
            .chars()
            .map(|letter| match letter {
                '.' => Ok(Verdict::Absent),
                'y' => Ok(Verdict::PresentElsewhere),
                'g' => Ok(Verdict::Correct),
                _ => Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Must enter only the letters '.', 'y', or 'g'. Try again.",
                )),
            })
            .collect::<io::Result<Vec<Verdict>>>()?,
    ))
}

fn play_multi_game(words: &[String], word_bank: &WordBank, selector: SelectorArg) {
    if words.is_empty() || words.len() > NUM_BOARDS {
        eprintln!(
            "Error: expected between 1 and {} secret words, got {}.",
            NUM_BOARDS,
            words.len()
        );
        std::process::exit(1);
    }
    let mut multi = match MultiSolver::new(word_bank, words.len(), || {
        make_selector(selector, word_bank)
    }) {
        Ok(multi) => multi,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let mut checkers: Vec<Checker> = Vec::with_capacity(words.len());
    for word in words {
        match Checker::new(word_bank, word) {
            Ok(checker) => checkers.push(checker),
            Err(err) => {
                eprintln!("Error: {}: {}", word, err);
                std::process::exit(1);
            }
        }
    }

    for round in 0..MULTI_MAX_GUESSES {
        let guess = match multi.next_guess(round) {
            Ok(guess) => guess,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
        println!("Guess #{}: {}", round + 1, guess);

        let mut results = Vec::with_capacity(checkers.len());
        for checker in checkers.iter_mut() {
            match checker.check(&guess) {
                Ok(result) => results.push(result),
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            }
        }
        multi.process_results(&results);

        for (board, live) in multi.in_play().iter().enumerate() {
            if *live {
                println!(
                    "\tboard {}: {} candidates left",
                    board + 1,
                    multi.num_candidates(board)
                );
            } else {
                println!("\tboard {}: solved", board + 1);
            }
        }

        if multi.is_finished() {
            println!("Solved all {} boards in {} guesses.", words.len(), round + 1);
            return;
        }
    }

    println!("Couldn't solve every board in {} guesses.", MULTI_MAX_GUESSES);
}
