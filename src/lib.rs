//! Dead simple cut-up poetry from web pages and text files.
//!
//! A document is boiled down to a flat list of lowercase words (see [`extract`]), a handful of
//! those words are picked at random (see [`sample`]), and the picks are laid out in lines, each
//! starting with a tab and a capitalized word (see [`Poem`]).
//!
//! ```
//! # use poemish::{extract::extract_html, Composer, PoemSpec};
//! # use rand::thread_rng;
//! let page = extract_html(
//!     "<title>Weather</title><body><p>Grey clouds, cold rain; 3 umbrellas and a dog.</p></body>",
//! );
//! let poem = Composer::new().compose(&mut thread_rng(), &page.words, &PoemSpec::new(8, 2).unwrap());
//!
//! assert_eq!(page.title, "Weather");
//! assert_eq!(poem.lines().count(), 2);
//! assert!(poem.lines().all(|l| l.starts_with('\t')));
//! ```
//!
//! # Features
//!
//! - `serde` - Derives `Serialize` and `Deserialize` for the data types. Deserializing checks
//! the same rules as the constructors.
//! - `cli` - Builds the `poemish` binary. Enabled by default; library users can turn it off with
//! `default-features = false`.
//! - `inline-more` - Passed on to [`hashbrown`](https://crates.io/crates/hashbrown). Enabled by
//! default.

pub mod error;
pub mod extract;
pub mod library;
pub mod poem;
pub mod sample;
pub mod source;
pub mod token;

pub use error::{PoemError, Result};
pub use extract::Extracted;
pub use library::Library;
pub use poem::{create_poem, Composer, Poem, PoemSpec};
pub use sample::SamplingPolicy;
pub use source::{fetch, Mode, Source};
pub use token::{Title, Word, WordSequence};
