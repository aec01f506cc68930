//! At the heart of a [`Poem`](crate::Poem) is a [`Word`]. In fact, this is just a String. But we
//! make a distinction here: A Word is a token that survived
//! [`normalize()`](crate::extract::normalize()); it is never empty, and it holds no whitespace, no
//! digits and none of the [`PUNCTUATION`] characters.
//!
//! Words are kept in a [`WordSequence`], which is the corpus a poem is sampled from.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PoemError, Result};

/// Representation of a cleaned word.
pub type Word = String;

/// A borrowed version of [`Word`]; if [`Word`] is [`String`], then [`WordRef`] is `&str`.
pub type WordRef<'a> = &'a str;

/// Identifies the document a [`WordSequence`] was taken from. May be empty.
pub type Title = String;

/// Characters that are stripped from text before it is split into words.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '?', '|', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
    '`', '~', '(', ')', '"',
];

/// Returns `true` if `c` is removed by normalization.
pub fn is_stripped(c: char) -> bool {
    c.is_ascii_digit() || PUNCTUATION.contains(&c)
}

/// Returns `true` if `word` could appear in a [`WordSequence`].
pub fn is_valid_word(word: WordRef<'_>) -> bool {
    !word.is_empty() && !word.chars().any(|c| c.is_whitespace() || is_stripped(c))
}

/// An ordered, immutable list of [`Word`]s.
///
/// ```
/// # use poemish::WordSequence;
/// let words = WordSequence::new(vec!["hello".to_string(), "world".to_string()]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(&words[1], "world");
///
/// assert!(WordSequence::new(vec!["hello world".to_string()]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Word>"))]
pub struct WordSequence(Vec<Word>);

impl WordSequence {
    /// Creates a sequence from already cleaned words.
    ///
    /// Fails with [`PoemError::InvalidWord`] on the first word that is empty, or that holds
    /// whitespace, digits or punctuation.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if let Some(bad) = words.iter().find(|w| !is_valid_word(w)) {
            return Err(PoemError::InvalidWord(bad.clone()));
        }
        Ok(Self(words))
    }

    /// Used by the extractor, which only ever produces valid words.
    pub(crate) fn from_clean(words: Vec<Word>) -> Self {
        debug_assert!(words.iter().all(|w| is_valid_word(w)));
        Self(words)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<WordRef<'_>> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = WordRef<'_>> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Word> {
        self.0
    }
}

impl Index<usize> for WordSequence {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl TryFrom<Vec<Word>> for WordSequence {
    type Error = PoemError;

    fn try_from(value: Vec<Word>) -> Result<Self> {
        Self::new(value)
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
