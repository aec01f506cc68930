use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poemish", version)]
#[command(about = "Make cut-up poems from web pages and text files")]
pub struct Cli {
    /// What to do. Without a command, a menu is shown
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the texts poems can be made from
    #[arg(long, global = true, env = "POEMISH_TEXTS_DIR", default_value = "txt_files")]
    pub texts_dir: PathBuf,

    /// Directory saved poems go to
    #[arg(long, global = true, env = "POEMISH_POEMS_DIR", default_value = "poetry")]
    pub poems_dir: PathBuf,

    /// Seed the random number generator, for repeatable poems
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Do not color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log more; repeat for even more
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Make a poem. Anything not given as an option is asked for
    Generate(GenerateArgs),
    /// Show a random saved poem
    Browse,
    /// Add a text to make poems from
    Add(AddArgs),
    /// List the texts poems can be made from
    List,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Name of a text in the texts directory
    #[arg(long, conflicts_with = "website")]
    pub file: Option<String>,

    /// URL of a web page
    #[arg(long)]
    pub website: Option<String>,

    /// Number of words in the poem
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub poem_length: Option<u32>,

    /// Line length
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub line_length: Option<u32>,

    /// Save the poem under this name
    #[arg(long, conflicts_with = "no_save")]
    pub save: Option<String>,

    /// Do not offer to save the poem
    #[arg(long)]
    pub no_save: bool,

    /// Never pick the same word twice, as long as the source has enough words
    #[arg(long)]
    pub unique: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Name of the new text
    pub name: String,

    /// Copy the text from this file instead of reading standard input
    #[arg(long)]
    pub from: Option<PathBuf>,
}
