//! Where the words come from. A [`Source`] is either a web page or a local text file; [`fetch()`]
//! retrieves it once and hands the result to the [`extract`](crate::extract) functions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, info};

use crate::error::{PoemError, Result};
use crate::extract::{extract_html, extract_text, Extracted};
use crate::token::Title;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

/// What kind of source a poem is made from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    FromWebsite,
    FromFile,
}

impl Mode {
    /// Reads an answer to "website or file?". Anything starting with `website` or `file`
    /// (ignoring case) is accepted.
    ///
    /// ```
    /// # use poemish::source::Mode;
    /// assert_eq!(Mode::parse("Website please"), Some(Mode::FromWebsite));
    /// assert_eq!(Mode::parse("file"), Some(Mode::FromFile));
    /// assert_eq!(Mode::parse("neither"), None);
    /// ```
    pub fn parse(answer: &str) -> Option<Self> {
        let answer = answer.trim().to_lowercase();
        if answer.starts_with("website") {
            Some(Self::FromWebsite)
        } else if answer.starts_with("file") {
            Some(Self::FromFile)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Website(Url),
    File(PathBuf),
}

impl Source {
    /// A website source. Only absolute `http` and `https` URLs are accepted.
    pub fn website(url: &str) -> Result<Self> {
        let invalid = |reason: &str| PoemError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };
        let parsed = Url::parse(url.trim()).map_err(|e| invalid(&e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self::Website(parsed)),
            _ => Err(invalid("only http and https are supported")),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Website(_) => Mode::FromWebsite,
            Self::File(_) => Mode::FromFile,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Website(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Retrieves `source` and extracts its words. There is exactly one attempt; any failure to fetch
/// or read is a [`PoemError::Retrieval`].
pub fn fetch(source: &Source) -> Result<Extracted> {
    info!(%source, "retrieving source");
    match source {
        Source::Website(url) => fetch_website(url),
        Source::File(path) => read_file(path),
    }
}

fn fetch_website(url: &Url) -> Result<Extracted> {
    let fail = |e: reqwest::Error| PoemError::retrieval(url.as_str(), e);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .map_err(fail)?;
    let body = client
        .get(url.clone())
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(fail)?;

    debug!(bytes = body.len(), "fetched page");
    Ok(extract_html(&body))
}

fn read_file(path: &Path) -> Result<Extracted> {
    let bytes =
        std::fs::read(path).map_err(|e| PoemError::retrieval(path.display().to_string(), e))?;
    let text = String::from_utf8_lossy(&bytes);

    debug!(bytes = bytes.len(), "read file");
    Ok(extract_text(&text, file_title(path)))
}

/// The title of a file source is its file name.
pub fn file_title(path: &Path) -> Title {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
