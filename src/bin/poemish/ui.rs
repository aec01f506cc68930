use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use poemish::library::header;
use poemish::Poem;

pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

pub fn show_poem(out: &mut impl Write, title: &str, poem: &Poem) -> Result<()> {
    writeln!(out, "{}\n\n", header(title).cyan())?;
    writeln!(out, "{}\n\n\n", poem.as_str().green())?;
    Ok(())
}

pub fn show_saved(out: &mut impl Write, name: &str, contents: &str) -> Result<()> {
    writeln!(out, "{}\n", name.cyan())?;
    writeln!(out, "{}", contents.green())?;
    Ok(())
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{}", message.to_string().red());
}
