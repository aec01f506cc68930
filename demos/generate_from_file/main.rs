//! Example reading text from a file and printing a poem made from its words.
//!
//! Usage: generate_from_file <FILE_PATH> <POEM_LENGTH> <LINE_LENGTH>
//! Using `cargo run`: `cargo run --example generate_from_file -- <FILE_PATH> <POEM_LENGTH> <LINE_LENGTH>`

use poemish::{fetch, Composer, PoemSpec, Source};

use rand::thread_rng;
use std::process::exit;

const USAGE: &str = "Usage: generate_from_file <FILE_PATH> <POEM_LENGTH> <LINE_LENGTH>";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        println!("{USAGE}");
        exit(1);
    }

    let extracted = fetch(&Source::file(&args[1])).expect("could not read file");
    let spec = PoemSpec::new(
        args[2].parse().expect("did not provide a valid poem length"),
        args[3].parse().expect("did not provide a valid line length"),
    )
    .expect("lengths must be at least 1");

    let poem = Composer::new().compose(&mut thread_rng(), &extracted.words, &spec);
    println!("A poem generated from {}\n", extracted.title);
    println!("{poem}");
}
