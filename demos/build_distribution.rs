use anyhow::{bail, Result};
use lexica_solver::{Language, LetterFrequency};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::time::Instant;

/// Measure a letter distribution from a word list with one word per line.
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("usage: build_distribution <language code> <words.txt> <letters.txt>");
    }
    let language = Language::from_code(&args[1])?;
    let t0 = Instant::now();
    let mut frequency = LetterFrequency::new(language);
    for line in BufReader::new(File::open(&args[2])?).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            frequency.add_word(word);
        }
    }
    let distribution = frequency.to_distribution()?;
    distribution.write(BufWriter::new(File::create(&args[3])?))?;
    println!(
        "{} letters from {} words written to {} in {:?}",
        distribution.len(),
        frequency.word_count(),
        args[3],
        t0.elapsed()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
