use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use poemish::{fetch, Composer, Library, Poem};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::cli::{AddArgs, GenerateArgs};
use crate::config::RunConfig;
use crate::prompt::Prompter;
use crate::ui;

const MENU: &str = "\
1) Make a poem
2) Read a saved poem
3) Add a text
4) List texts
5) Quit";

/// What every command works with.
pub struct Context {
    pub library: Library,
    pub rng: StdRng,
    /// Clear the screen before showing a poem.
    pub clear_screen: bool,
}

impl Context {
    pub fn new(library: Library, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            library,
            rng,
            clear_screen: false,
        }
    }
}

pub fn generate<R: BufRead, W: Write>(
    ctx: &mut Context,
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let config = RunConfig::resolve(args, &ctx.library, prompter)?;
    let extracted = fetch(&config.source).context("no poem was made")?;

    if extracted.words.len() < config.spec.poem_length() {
        warn!(
            words = extracted.words.len(),
            poem_length = config.spec.poem_length(),
            "source has fewer words than the poem, words will repeat"
        );
    }

    let poem = Composer::with_policy(config.policy).compose(
        &mut ctx.rng,
        &extracted.words,
        &config.spec,
    );
    info!(source = %config.source, "made a poem");

    if ctx.clear_screen {
        ui::clear_screen()?;
    }
    ui::show_poem(prompter.writer(), &extracted.title, &poem)?;
    save(ctx, args, prompter, &extracted.title, &poem)
}

fn save<R: BufRead, W: Write>(
    ctx: &Context,
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
    title: &str,
    poem: &Poem,
) -> Result<()> {
    if args.no_save {
        return Ok(());
    }

    let name = match &args.save {
        Some(name) => name.clone(),
        None => {
            if !prompter.ask_yes_no("Would you like to save this poem?")? {
                return Ok(());
            }
            let library = &ctx.library;
            prompter.ask_until(
                "Enter a file name",
                None,
                |answer| match library.poem_path(answer) {
                    Err(_) => "That is not a valid file name. Please input another one.",
                    Ok(_) => "File already exists. Please input a new file name.",
                }
                .to_string(),
                |answer| {
                    library
                        .poem_name_free(answer)
                        .is_ok_and(|free| free)
                        .then(|| answer.to_string())
                },
            )?
        }
    };

    let path = ctx.library.save_poem(&name, title, poem)?;
    prompter.say(format!("Saved to {}", path.display()))?;
    Ok(())
}

pub fn browse(ctx: &mut Context) -> Result<()> {
    let (path, contents) = ctx.library.random_poem(&mut ctx.rng)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    ui::show_saved(&mut io::stdout(), &name, &contents)
}

pub fn add(ctx: &Context, args: &AddArgs) -> Result<()> {
    let contents = match &args.from {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("could not read standard input")?,
    };
    let path = ctx.library.add_text(&args.name, &contents)?;
    println!("Added {}", path.display());
    Ok(())
}

fn add_interactive<R: BufRead, W: Write>(
    ctx: &Context,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.ask("Enter a name for the new text", None)?;
    let from = prompter.ask("Enter the path of a file to copy it from", None)?;
    let contents =
        fs::read_to_string(&from).with_context(|| format!("could not read {from}"))?;
    let path = ctx.library.add_text(&name, &contents)?;
    prompter.say(format!("Added {}", path.display()))
}

pub fn list(ctx: &Context) -> Result<()> {
    let texts = ctx.library.list_texts()?;
    if texts.is_empty() {
        println!("No texts in {}", ctx.library.texts_dir().display());
    }
    for text in texts {
        println!("{text}");
    }
    Ok(())
}

/// The home screen. Runs until the user quits or input ends.
pub fn menu<R: BufRead, W: Write>(ctx: &mut Context, prompter: &mut Prompter<R, W>) -> Result<()> {
    loop {
        prompter.say(MENU)?;
        let Ok(choice) = prompter.ask("What would you like to do", None) else {
            return Ok(());
        };

        let res = match choice.to_lowercase().as_str() {
            "1" | "make" | "generate" => generate(ctx, &GenerateArgs::default(), prompter),
            "2" | "read" | "browse" => browse(ctx),
            "3" | "add" => add_interactive(ctx, prompter),
            "4" | "list" => list(ctx),
            "5" | "q" | "quit" => return Ok(()),
            _ => {
                prompter.say("Please choose one of the options")?;
                continue;
            }
        };

        if let Err(e) = res {
            ui::error(format!("{e:#}"));
        }
    }
}
