//! Turns documents into a [`WordSequence`] and a [`Title`].
//!
//! Both HTML and plain text go through [`normalize()`]: every digit and every
//! [`PUNCTUATION`](crate::token::PUNCTUATION) character is removed, the text is lowercased, and
//! what is left is split on whitespace. Line breaks (`\n`, `\r\n` and `\r`) count as whitespace, so
//! a word is never glued to the one on the next line.

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{is_stripped, Title, Word, WordSequence};

/// The output of extraction: the words of a document and what to call it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extracted {
    pub title: Title,
    pub words: WordSequence,
}

/// Cleans `text` and splits it into words.
///
/// ```
/// # use poemish::extract::normalize;
/// let words = normalize("Line one.\nLine two!");
/// assert_eq!(words.as_slice(), &["line", "one", "line", "two"]);
/// ```
pub fn normalize(text: &str) -> WordSequence {
    let cleaned: String = text.chars().filter(|c| !is_stripped(*c)).collect();
    let words: Vec<Word> = cleaned
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    WordSequence::from_clean(words)
}

/// Extracts words from a plain text document. The title is whatever the caller names the text.
pub fn extract_text(text: &str, title: impl Into<Title>) -> Extracted {
    let words = normalize(text);
    debug!(words = words.len(), "extracted plain text");
    Extracted {
        title: title.into(),
        words,
    }
}

/// Extracts words from the `<body>` of an HTML document, and the title from its `<title>`.
///
/// The contents of `<script>` elements are never part of the words.
///
/// ```
/// # use poemish::extract::extract_html;
/// let html = "<html><head><title>T</title></head>\
///     <body><script>ignored();</script><p>Hello, World! 123</p></body></html>";
/// let extracted = extract_html(html);
/// assert_eq!(extracted.title, "T");
/// assert_eq!(extracted.words.as_slice(), &["hello", "world"]);
/// ```
pub fn extract_html(html: &str) -> Extracted {
    let doc = Html::parse_document(html);

    let title = match Selector::parse("title") {
        Ok(s) => doc
            .select(&s)
            .flat_map(|el| el.text())
            .collect::<String>()
            .trim()
            .to_string(),
        Err(_) => Title::new(),
    };

    let body_text = match Selector::parse("body") {
        Ok(s) => doc.select(&s).map(visible_text).collect::<Vec<_>>().join(" "),
        Err(_) => String::new(),
    };

    let words = normalize(&body_text);
    debug!(%title, words = words.len(), "extracted html");
    Extracted { title, words }
}

/// Text of every node below `el` that is not inside a `<script>`. Separate text nodes are joined
/// with a space so words in neighbouring elements stay apart.
fn visible_text(el: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    for node in el.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_script = node
            .ancestors()
            .filter_map(|a| a.value().as_element())
            .any(|e| e.name().eq_ignore_ascii_case("script"));
        if !in_script {
            pieces.push(&**text);
        }
    }
    pieces.join(" ")
}
