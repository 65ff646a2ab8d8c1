use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Instant;
use lexica_solver::{Board, BoardFactory, GameMode, Language};

/// Create the best of a number of random boards, and print all its words.
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        bail!("usage: solve_board <language code> <letters.txt> <dictionary.bin> [cells] [min length] [candidates]");
    }
    let language = Language::from_code(&args[1])?;
    let number = |i: usize, default: usize| -> Result<usize> {
        Ok(match args.get(i) {
            Some(arg) => arg.parse()?,
            None => default,
        })
    };
    let mode = GameMode::new(number(4, 16)?, number(5, 3)?)?;
    let candidates = number(6, 1)?;

    let t0 = Instant::now();
    let factory = BoardFactory::load(language, &PathBuf::from(&args[2]), &PathBuf::from(&args[3]))?;
    println!("Loading {} took {:?}", factory.trie(), t0.elapsed());

    let t0 = Instant::now();
    let board = factory.best_candidate(&mode, candidates, Board::word_count)?;
    println!("Best of {} boards in {:?}", candidates, t0.elapsed());
    println!("{}\n", board.grid());
    for (length, count) in board.word_counts() {
        println!("{:2} letters: {} words", length, count);
    }
    for (word, paths) in board.solutions() {
        println!("{} {:?}", word, paths[0].positions());
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
