use anyhow::{bail, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::time::Instant;
use lexica_solver::{Language, Trie};

/// Convert a word list with one word per line to a binary dictionary.
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        bail!("usage: build_trie <language code> <words.txt> <dictionary.bin>");
    }
    let language = Language::from_code(&args[1])?;
    let codec = language.codec();
    let t0 = Instant::now();
    let mut words = Vec::new();
    let mut skipped = 0;
    for line in BufReader::new(File::open(&args[2])?).lines() {
        let word = line?.trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        // words with letters that are not tiles of the language, or variants
        // of a tile, can never be played
        if codec.encode_normalized(&word).is_err() {
            skipped += 1;
            continue;
        }
        words.push(word);
    }
    let trie = Trie::from_words(&words, language)?;
    trie.write(BufWriter::new(File::create(&args[3])?))?;
    println!(
        "{} ({} words skipped) written to {} in {:?}",
        trie,
        skipped,
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
