//! See the top level crate documentation for information about the [`Poem`] type.

use std::fmt;

use rand::Rng;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PoemError, Result};
use crate::sample::{sample_indices, SamplingPolicy};
use crate::token::{WordRef, WordSequence};

/// Marks the start of a line.
pub const LINE_MARKER: char = '\t';

/// Ends a line.
pub const LINE_BREAK: char = '\n';

/// The size of a poem: how many words in total, and how many words per line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoemSpec"))]
pub struct PoemSpec {
    poem_length: usize,
    line_length: usize,
}

impl PoemSpec {
    /// Both lengths must be at least one.
    pub fn new(poem_length: usize, line_length: usize) -> Result<Self> {
        if poem_length == 0 {
            return Err(PoemError::InvalidSpec("poem length must be at least 1"));
        }
        if line_length == 0 {
            return Err(PoemError::InvalidSpec("line length must be at least 1"));
        }
        Ok(Self {
            poem_length,
            line_length,
        })
    }

    pub fn poem_length(&self) -> usize {
        self.poem_length
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// `poem_length / line_length`, rounded down. This is the modulus the layout is built on, so
    /// it is also the number of words on each full line; it is zero when a line is asked to be
    /// longer than the whole poem.
    pub fn lines_per_poem(&self) -> usize {
        self.poem_length / self.line_length
    }
}

/// Unchecked [`PoemSpec`] fields; deserialization goes through [`PoemSpec::new()`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPoemSpec {
    poem_length: usize,
    line_length: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoemSpec> for PoemSpec {
    type Error = PoemError;

    fn try_from(raw: RawPoemSpec) -> Result<Self> {
        Self::new(raw.poem_length, raw.line_length)
    }
}

/// A rendered poem. Each line starts with a [`LINE_MARKER`] followed by a capitalized word, and
/// full lines end in a [`LINE_BREAK`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poem(String);

impl Poem {
    /// Lays out the words at `indices` according to `spec`.
    ///
    /// This is the deterministic half of [`Composer::compose()`]; the random half picks the
    /// indices.
    ///
    /// ```
    /// # use poemish::{Poem, PoemSpec, WordSequence};
    /// let words = WordSequence::new(
    ///     ["a", "rose", "is", "red", "sky", "blue"].map(String::from).to_vec()
    /// ).unwrap();
    /// let spec = PoemSpec::new(6, 2).unwrap();
    /// let poem = Poem::render(&words, &[0, 1, 2, 3, 4, 5], &spec);
    /// assert_eq!(poem.as_str(), "\tA rose is\n\tRed sky blue\n");
    /// ```
    ///
    /// # Panics
    ///
    /// If an index is out of bounds for `words`.
    pub fn render(words: &WordSequence, indices: &[usize], spec: &PoemSpec) -> Self {
        let k = spec.lines_per_poem();
        let mut poem = String::new();

        for (i, &index) in indices.iter().enumerate() {
            let word = &words[index];

            // With k == 0 there is no modulus to go by; the whole poem is one line.
            let line_start = if k == 0 { i == 0 } else { i % k == 0 };
            if line_start {
                poem.push(LINE_MARKER);
                poem.push_str(&capitalize(word));
            } else {
                poem.push_str(word);
            }

            if k != 0 && i != 0 && (i + 1) % k == 0 {
                poem.push(LINE_BREAK);
            } else {
                poem.push(' ');
            }
        }

        Self(poem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The lines of the poem, markers included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    /// The words of the poem, in order.
    pub fn words(&self) -> impl Iterator<Item = WordRef<'_>> {
        self.0.split_whitespace()
    }

    /// The poem with every [`LINE_MARKER`] removed. This is what gets written to disk.
    pub fn without_markers(&self) -> String {
        self.0.replace(LINE_MARKER, "")
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Poem {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Uppercases the first grapheme of `word` and leaves the rest alone.
pub fn capitalize(word: WordRef<'_>) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut res = first.to_uppercase();
            res.push_str(graphemes.as_str());
            res
        }
        None => String::new(),
    }
}

/// Samples words from a [`WordSequence`] and lays them out as a [`Poem`].
///
/// ```
/// # use poemish::{Composer, PoemSpec, extract::normalize};
/// # use rand::thread_rng;
/// let words = normalize("the quick brown fox jumps over the lazy dog");
/// let poem = Composer::new().compose(&mut thread_rng(), &words, &PoemSpec::new(6, 3).unwrap());
/// assert_eq!(poem.words().count(), 6);
/// assert_eq!(poem.lines().count(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    policy: SamplingPolicy,
}

impl Composer {
    /// A composer using [`SamplingPolicy::RedrawOnce`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SamplingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Draws `spec.poem_length()` words from `words` and renders them.
    ///
    /// An empty `words` gives an empty poem. A corpus shorter than the poem is not an error
    /// either; words will simply repeat.
    pub fn compose(&self, rng: &mut impl Rng, words: &WordSequence, spec: &PoemSpec) -> Poem {
        let indices = sample_indices(rng, words.len(), spec.poem_length(), self.policy);
        debug!(
            corpus = words.len(),
            poem_length = spec.poem_length(),
            line_length = spec.line_length(),
            policy = ?self.policy,
            "composing poem"
        );
        Poem::render(words, &indices, spec)
    }
}

/// Composes a poem with the default [`Composer`].
///
/// Unlike [`PoemSpec::new()`], a `poem_length` of zero is accepted and gives an empty poem. A
/// `line_length` of zero is rejected with [`PoemError::InvalidSpec`].
///
/// ```
/// # use poemish::{create_poem, WordSequence};
/// # use rand::thread_rng;
/// let poem = create_poem(&mut thread_rng(), &WordSequence::default(), 0, 8).unwrap();
/// assert!(poem.is_empty());
/// ```
pub fn create_poem(
    rng: &mut impl Rng,
    words: &WordSequence,
    poem_length: usize,
    line_length: usize,
) -> Result<Poem> {
    if line_length == 0 {
        return Err(PoemError::InvalidSpec("line length must be at least 1"));
    }
    if poem_length == 0 {
        return Ok(Poem::default());
    }
    let spec = PoemSpec::new(poem_length, line_length)?;
    Ok(Composer::new().compose(rng, words, &spec))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use super::{capitalize, create_poem, Composer, Poem, PoemSpec, LINE_BREAK, LINE_MARKER};
    use crate::error::PoemError;
    use crate::extract::normalize;
    use crate::sample::SamplingPolicy;
    use crate::token::WordSequence;

    fn letters() -> WordSequence {
        normalize("alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima")
    }

    fn count(poem: &Poem, c: char) -> usize {
        poem.as_str().chars().filter(|&x| x == c).count()
    }

    fn render(poem_length: usize, line_length: usize) -> String {
        let spec = PoemSpec::new(poem_length, line_length).unwrap();
        let indices: Vec<usize> = (0..poem_length).collect();
        Poem::render(&letters(), &indices, &spec).into_string()
    }

    #[test]
    fn spec_rejects_zero() {
        assert!(matches!(
            PoemSpec::new(0, 8),
            Err(PoemError::InvalidSpec(_))
        ));
        assert!(matches!(
            PoemSpec::new(40, 0),
            Err(PoemError::InvalidSpec(_))
        ));
        assert_eq!(PoemSpec::new(40, 8).unwrap().lines_per_poem(), 5);
        assert_eq!(PoemSpec::new(5, 100).unwrap().lines_per_poem(), 0);
    }

    #[test]
    fn capitalize_first_only() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("hELLO"), "HELLO");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("e\u{301}lan"), "E\u{301}lan");
        assert_eq!(capitalize("'twas"), "'twas");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn render_even_lines() {
        assert_eq!(render(6, 2), "\tAlpha bravo charlie\n\tDelta echo foxtrot\n");
        assert_eq!(render(6, 3), "\tAlpha bravo\n\tCharlie delta\n\tEcho foxtrot\n");
    }

    #[test]
    fn render_ragged_last_line() {
        // 7 / 3 == 2 words per line, the seventh word starts a line that never ends
        assert_eq!(
            render(7, 3),
            "\tAlpha bravo\n\tCharlie delta\n\tEcho foxtrot\n\tGolf "
        );
    }

    #[test]
    fn render_line_longer_than_poem() {
        assert_eq!(render(5, 100), "\tAlpha bravo charlie delta echo ");
    }

    #[test]
    fn line_longer_than_poem_still_capitalizes_first_word() {
        let spec = PoemSpec::new(3, 4).unwrap();
        assert_eq!(spec.lines_per_poem(), 0);
        let poem = Poem::render(&letters(), &[2, 0, 1], &spec);
        assert_eq!(poem.as_str(), "\tCharlie alpha bravo ");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_spec_is_checked() {
        let spec: PoemSpec =
            serde_json::from_str(r#"{"poem_length":40,"line_length":8}"#).unwrap();
        assert_eq!(spec, PoemSpec::new(40, 8).unwrap());

        assert!(serde_json::from_str::<PoemSpec>(r#"{"poem_length":5,"line_length":0}"#).is_err());
        assert!(serde_json::from_str::<PoemSpec>(r#"{"poem_length":0,"line_length":5}"#).is_err());
    }

    /// With one word per line the first word never gets a break after it, so the first line
    /// holds two words.
    #[test]
    fn render_one_word_per_line() {
        assert_eq!(
            render(4, 4),
            "\tAlpha \tBravo\n\tCharlie\n\tDelta\n"
        );
    }

    #[test]
    fn render_repeated_indices() {
        let spec = PoemSpec::new(4, 2).unwrap();
        let poem = Poem::render(&letters(), &[1, 1, 1, 1], &spec);
        assert_eq!(poem.as_str(), "\tBravo bravo\n\tBravo bravo\n");
    }

    #[test]
    fn empty_poem() {
        let poem = create_poem(&mut thread_rng(), &WordSequence::default(), 0, 8).unwrap();
        assert!(poem.is_empty());
        let poem = create_poem(&mut thread_rng(), &letters(), 0, 3).unwrap();
        assert!(poem.is_empty());
    }

    #[test]
    fn empty_corpus_gives_empty_poem() {
        let poem = create_poem(&mut thread_rng(), &WordSequence::default(), 40, 8).unwrap();
        assert!(poem.is_empty());
    }

    #[test]
    fn zero_line_length_is_invalid() {
        assert!(matches!(
            create_poem(&mut thread_rng(), &letters(), 10, 0),
            Err(PoemError::InvalidSpec(_))
        ));
    }

    #[test]
    fn single_unterminated_line() {
        let poem = create_poem(&mut thread_rng(), &letters(), 5, 100).unwrap();
        assert_eq!(poem.words().count(), 5);
        assert_eq!(count(&poem, LINE_MARKER), 1);
        assert_eq!(count(&poem, LINE_BREAK), 0);
        assert!(poem.as_str().starts_with(LINE_MARKER));
    }

    #[test]
    fn shape_holds_for_many_specs() {
        let words = letters();
        let mut rng = thread_rng();
        for poem_length in 1..30 {
            for line_length in 1..12 {
                let spec = PoemSpec::new(poem_length, line_length).unwrap();
                let poem = Composer::new().compose(&mut rng, &words, &spec);
                let k = spec.lines_per_poem();

                assert_eq!(poem.words().count(), poem_length);

                let breaks = match k {
                    0 => 0,
                    1 => poem_length - 1,
                    k => poem_length / k,
                };
                assert_eq!(count(&poem, LINE_BREAK), breaks, "{poem_length}/{line_length}");

                let markers = if k == 0 {
                    1
                } else {
                    poem_length.div_ceil(k)
                };
                assert_eq!(count(&poem, LINE_MARKER), markers, "{poem_length}/{line_length}");
            }
        }
    }

    #[test]
    fn only_line_starts_are_capitalized() {
        let words = letters();
        let mut rng = thread_rng();
        for (poem_length, line_length) in [(40, 8), (12, 3), (9, 2), (5, 100), (3, 3)] {
            let spec = PoemSpec::new(poem_length, line_length).unwrap();
            let poem = Composer::new().compose(&mut rng, &words, &spec);

            for (n, segment) in poem.as_str().split(LINE_MARKER).enumerate() {
                for (i, word) in segment.split_whitespace().enumerate() {
                    if n > 0 && i == 0 {
                        assert!(word.starts_with(|c: char| c.is_uppercase()), "{word}");
                        assert!(words.iter().any(|w| w.eq_ignore_ascii_case(word)));
                    } else {
                        assert!(words.iter().any(|w| w == word), "{word}");
                    }
                }
            }
        }
    }

    #[test]
    fn unique_policy_never_repeats_on_large_corpus() {
        let words = letters();
        let spec = PoemSpec::new(words.len(), 3).unwrap();
        let composer = Composer::with_policy(SamplingPolicy::Unique);
        for _ in 0..50 {
            let poem = composer.compose(&mut thread_rng(), &words, &spec);
            let mut seen: Vec<String> = poem.words().map(str::to_lowercase).collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), words.len());
        }
    }

    #[test]
    fn small_corpus_repeats_words() {
        let words = normalize("lonely");
        let poem = create_poem(&mut thread_rng(), &words, 4, 2).unwrap();
        assert_eq!(poem.as_str(), "\tLonely lonely\n\tLonely lonely\n");
    }

    #[test]
    fn seeded_compose_is_reproducible() {
        let words = letters();
        let spec = PoemSpec::new(40, 8).unwrap();
        let a = Composer::new().compose(&mut StdRng::seed_from_u64(1), &words, &spec);
        let b = Composer::new().compose(&mut StdRng::seed_from_u64(1), &words, &spec);
        assert_eq!(a, b);
    }

    #[test]
    fn without_markers_strips_tabs() {
        let poem = Poem(render(6, 3));
        assert_eq!(poem.without_markers(), "Alpha bravo\nCharlie delta\nEcho foxtrot\n");
        assert_eq!(
            poem.lines().collect::<Vec<_>>(),
            vec!["\tAlpha bravo", "\tCharlie delta", "\tEcho foxtrot"]
        );
    }
}
