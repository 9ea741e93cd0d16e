//! Basic example of using the word-search engine

use sopa_core::{parse_puzzles, parse_wordlist, write_puzzles, Generator, Solver};

fn main() {
    let words = parse_wordlist("perro gato auto electron comida").expect("valid words");

    // Generate a puzzle
    println!("Generating a puzzle for {} words...\n", words.len());
    let mut generator = Generator::with_seed(2024);
    let generated = generator.generate(&words).expect("words fit the estimated grid");

    println!("Generated puzzle:");
    println!("{}\n", generated.puzzle.grid);

    println!("Placements:");
    for placement in &generated.placements {
        println!("  {}", placement);
    }

    // Save it in the text format and read it back
    let text = write_puzzles(std::slice::from_ref(&generated.puzzle));
    println!("\n--- Puzzle file ---\n{}", text);
    let parsed = parse_puzzles(&text).expect("writer output parses");

    // Solve it
    let solver = Solver::new();
    for puzzle in &parsed {
        let solution = solver.solve(&puzzle.grid, &puzzle.words);
        for (word, placement) in solution.results() {
            match placement {
                Some(p) => println!("Found {}", p),
                None => println!("Word not found: {}", word),
            }
        }
    }
}
