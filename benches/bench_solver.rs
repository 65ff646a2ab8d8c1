use criterion::{criterion_group, criterion_main, Criterion};
use lexica_solver::{GameMode, Language, LetterGrid, Matching, Solver, Trie};
use rand::{rngs::StdRng, Rng, SeedableRng};

const TEST_GRID: &[&str] = &[
    "s e r s t",
    "p a t l i",
    "r i n e d",
    "qu e s o n",
    "t h e r a",
];

/// Random words, to get a dictionary of realistic size without data files.
fn random_words(n: usize) -> Vec<String> {
    const LETTERS: &[u8] = b"eeeeeeaaaaiiiioooonnnrrrtttlsuuudgbcmpfhvwyk";
    let mut rng = StdRng::seed_from_u64(123);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(2..9);
            (0..len)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect()
        })
        .collect()
}

fn dictionary(language: &Language) -> Vec<u8> {
    let trie = Trie::from_words(&random_words(100_000), language).unwrap();
    let mut bytes = Vec::new();
    trie.write(&mut bytes).unwrap();
    bytes
}

fn bench_solve(c: &mut Criterion) {
    let language = Language::from_code("en_US").unwrap();
    let bytes = dictionary(language);
    let trie = Trie::deserialize(bytes.as_slice(), language).unwrap();
    let grid = LetterGrid::from_strings(TEST_GRID).unwrap();
    let mode = GameMode::new(25, 3).unwrap();
    c.bench_function("solver.solve", |b| {
        b.iter(|| Solver::new(&trie).solve(&grid, &mode.filter()))
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let language = Language::from_code("en_US").unwrap();
    let bytes = dictionary(language);
    let grid = LetterGrid::from_strings(TEST_GRID).unwrap();
    c.bench_function("trie.deserialize", |b| {
        b.iter(|| Trie::deserialize(bytes.as_slice(), language).unwrap())
    });
    c.bench_function("trie.deserialize_for_grid", |b| {
        b.iter(|| {
            Trie::deserialize_for_grid(bytes.as_slice(), language, &grid, Matching::Normalized)
                .unwrap()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = bench_solve
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = bench_deserialize
}

criterion_main!(benches, slow);
