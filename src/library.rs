//! The on-disk side of poemish: a directory of source texts to make poems from, and a directory of
//! saved poems.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{PoemError, Result};
use crate::poem::Poem;

const EXTENSION: &str = "txt";

/// The first line of every saved poem.
pub fn header(title: &str) -> String {
    format!("A poem generated from {title}")
}

/// Turns a user supplied text name into a file name: spaces become underscores, everything is
/// lowercased, and `.txt` is added unless it is already there.
///
/// ```
/// # use poemish::library::text_file_name;
/// assert_eq!(text_file_name("Moby Dick").unwrap(), "moby_dick.txt");
/// assert_eq!(text_file_name("poems.TXT").unwrap(), "poems.txt");
/// assert!(text_file_name("../etc/passwd").is_err());
/// ```
pub fn text_file_name(name: &str) -> Result<String> {
    let name = checked_name(name)?.split(' ').join("_").to_lowercase();
    if name.ends_with(".txt") {
        Ok(name)
    } else {
        Ok(format!("{name}.{EXTENSION}"))
    }
}

fn checked_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
        || trimmed.contains('\0')
    {
        return Err(PoemError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    texts_dir: PathBuf,
    poems_dir: PathBuf,
}

impl Library {
    pub fn new(texts_dir: impl Into<PathBuf>, poems_dir: impl Into<PathBuf>) -> Self {
        Self {
            texts_dir: texts_dir.into(),
            poems_dir: poems_dir.into(),
        }
    }

    pub fn texts_dir(&self) -> &Path {
        &self.texts_dir
    }

    pub fn poems_dir(&self) -> &Path {
        &self.poems_dir
    }

    /// Finds the text called `name`, see [`text_file_name()`].
    pub fn resolve_text(&self, name: &str) -> Result<PathBuf> {
        let path = self.texts_dir.join(text_file_name(name)?);
        if path.is_file() {
            Ok(path)
        } else {
            Err(PoemError::TextNotFound(path))
        }
    }

    /// File names in the texts directory, sorted. A missing directory has no texts.
    pub fn list_texts(&self) -> Result<Vec<String>> {
        Ok(list_files(&self.texts_dir)?
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }

    /// Stores `contents` as a new text. Existing texts are never overwritten.
    pub fn add_text(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.texts_dir.join(text_file_name(name)?);
        write_new(&path, contents)?;
        info!(path = %path.display(), "added text");
        Ok(path)
    }

    /// Where a poem saved as `name` would go.
    pub fn poem_path(&self, name: &str) -> Result<PathBuf> {
        let name = checked_name(name)?;
        let stem = name.strip_suffix(".txt").unwrap_or(name);
        Ok(self.poems_dir.join(format!("{stem}.{EXTENSION}")))
    }

    /// Whether a poem could be saved as `name` without overwriting anything.
    pub fn poem_name_free(&self, name: &str) -> Result<bool> {
        Ok(!self.poem_path(name)?.exists())
    }

    /// Saves `poem` under `name`, headed by where it came from. Line markers are left out.
    pub fn save_poem(&self, name: &str, title: &str, poem: &Poem) -> Result<PathBuf> {
        let path = self.poem_path(name)?;
        let contents = format!("{}\n\n{}", header(title), poem.without_markers());
        write_new(&path, &contents)?;
        info!(path = %path.display(), "saved poem");
        Ok(path)
    }

    /// Saved poems, sorted by path.
    pub fn list_poems(&self) -> Result<Vec<PathBuf>> {
        list_files(&self.poems_dir)
    }

    /// Picks a saved poem at random and reads it.
    pub fn random_poem(&self, rng: &mut impl Rng) -> Result<(PathBuf, String)> {
        let poems = self.list_poems()?;
        let path = poems
            .choose(rng)
            .ok_or_else(|| PoemError::NoPoems(self.poems_dir.clone()))?
            .clone();
        let contents = fs::read_to_string(&path)?;
        Ok((path, contents))
    }
}

/// `.txt` files directly inside `dir`, sorted.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "directory missing, treating as empty");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == EXTENSION) {
            files.push(path);
        }
    }
    Ok(files.into_iter().sorted().collect())
}

fn write_new(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(PoemError::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(contents.as_bytes())?;
    Ok(())
}
