//! Settles everything a poem needs before any text is fetched.
//!
//! Fields are resolved one after the other: first the mode, then the source for that mode, then
//! the two lengths. A field given on the command line is taken as is; a missing one is asked for.

use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;
use poemish::{Library, Mode, PoemSpec, SamplingPolicy, Source};

use crate::cli::GenerateArgs;
use crate::prompt::Prompter;

pub const DEFAULT_POEM_LENGTH: usize = 40;
pub const DEFAULT_LINE_LENGTH: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub source: Source,
    pub spec: PoemSpec,
    pub policy: SamplingPolicy,
}

impl RunConfig {
    pub fn resolve<R: BufRead, W: Write>(
        args: &GenerateArgs,
        library: &Library,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Self> {
        let mode = match (&args.file, &args.website) {
            (Some(_), _) => Mode::FromFile,
            (None, Some(_)) => Mode::FromWebsite,
            (None, None) => prompter.ask_mode()?,
        };

        let source = match mode {
            Mode::FromFile => resolve_file(args.file.as_deref(), library, prompter)?,
            Mode::FromWebsite => resolve_website(args.website.as_deref(), prompter)?,
        };

        let poem_length = match args.poem_length {
            Some(n) => n as usize,
            None => prompter.ask_count("Enter maximum length of your poem", DEFAULT_POEM_LENGTH)?,
        };
        let line_length = match args.line_length {
            Some(n) => n as usize,
            None => prompter.ask_count("Enter a specified line length", DEFAULT_LINE_LENGTH)?,
        };

        let policy = if args.unique {
            SamplingPolicy::Unique
        } else {
            SamplingPolicy::RedrawOnce
        };

        Ok(Self {
            source,
            spec: PoemSpec::new(poem_length, line_length)?,
            policy,
        })
    }
}

fn resolve_file<R: BufRead, W: Write>(
    name: Option<&str>,
    library: &Library,
    prompter: &mut Prompter<R, W>,
) -> Result<Source> {
    if let Some(name) = name {
        return Ok(Source::file(library.resolve_text(name)?));
    }

    let existing = library.list_texts()?.into_iter().join("\n");
    let path = prompter.ask_until(
        "Enter a text file to make a poem from",
        None,
        |_| {
            format!(
                "This file doesn't exist in the {} directory. Please input another one. \
                 Existing files include:\n\n{existing}",
                library.texts_dir().display()
            )
        },
        |answer| library.resolve_text(answer).ok(),
    )?;
    Ok(Source::file(path))
}

fn resolve_website<R: BufRead, W: Write>(
    url: Option<&str>,
    prompter: &mut Prompter<R, W>,
) -> Result<Source> {
    if let Some(url) = url {
        return Ok(Source::website(url)?);
    }

    prompter.ask_until(
        "Enter a link to make a poem from",
        None,
        |_| "Please input a valid URL".to_string(),
        |answer| Source::website(answer).ok(),
    )
}

#[cfg(test)]
mod tests {
    use poemish::{Library, Mode, PoemError, PoemSpec, SamplingPolicy, Source};
    use tempfile::TempDir;

    use super::RunConfig;
    use crate::cli::GenerateArgs;
    use crate::prompt::tests::{output, prompter};

    fn library() -> (TempDir, Library) {
        let dir = tempfile::tempdir().unwrap();
        let lib = Library::new(dir.path().join("txt_files"), dir.path().join("poetry"));
        lib.add_text("the raven", "Once upon a midnight dreary").unwrap();
        (dir, lib)
    }

    #[test]
    fn everything_from_args() {
        let (_dir, lib) = library();
        let args = GenerateArgs {
            file: Some("The Raven".to_string()),
            poem_length: Some(12),
            line_length: Some(3),
            unique: true,
            ..Default::default()
        };
        let mut p = prompter("");
        let config = RunConfig::resolve(&args, &lib, &mut p).unwrap();

        assert_eq!(config.source, Source::file(lib.texts_dir().join("the_raven.txt")));
        assert_eq!(config.spec, PoemSpec::new(12, 3).unwrap());
        assert_eq!(config.policy, SamplingPolicy::Unique);
        assert_eq!(output(&p), "");
    }

    #[test]
    fn missing_file_from_args_fails() {
        let (_dir, lib) = library();
        let args = GenerateArgs {
            file: Some("lenore".to_string()),
            ..Default::default()
        };
        let err = RunConfig::resolve(&args, &lib, &mut prompter("")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PoemError>(),
            Some(PoemError::TextNotFound(_))
        ));
    }

    #[test]
    fn asks_in_order() {
        let (_dir, lib) = library();
        let mut p = prompter("file\nlenore\nthe raven\n\n4\n");
        let config = RunConfig::resolve(&GenerateArgs::default(), &lib, &mut p).unwrap();

        assert_eq!(config.source.mode(), Mode::FromFile);
        assert_eq!(config.spec, PoemSpec::new(40, 4).unwrap());
        assert_eq!(config.policy, SamplingPolicy::RedrawOnce);

        let out = output(&p);
        assert!(out.contains("Existing files include:\n\nthe_raven.txt"));
        let mode = out.find("website or a txt file").unwrap();
        let file = out.find("Enter a text file").unwrap();
        let length = out.find("maximum length").unwrap();
        let line = out.find("line length").unwrap();
        assert!(mode < file && file < length && length < line);
    }

    #[test]
    fn asks_for_website() {
        let (_dir, lib) = library();
        let mut p = prompter("website\nnot a url\nhttps://example.com/\n");
        let args = GenerateArgs {
            poem_length: Some(10),
            line_length: Some(2),
            ..Default::default()
        };
        let config = RunConfig::resolve(&args, &lib, &mut p).unwrap();

        assert_eq!(config.source, Source::website("https://example.com/").unwrap());
        assert!(output(&p).contains("Please input a valid URL"));
    }

    #[test]
    fn website_arg_skips_mode_question() {
        let (_dir, lib) = library();
        let args = GenerateArgs {
            website: Some("http://example.com".to_string()),
            poem_length: Some(10),
            line_length: Some(2),
            ..Default::default()
        };
        let mut p = prompter("");
        let config = RunConfig::resolve(&args, &lib, &mut p).unwrap();
        assert_eq!(config.source.mode(), Mode::FromWebsite);
    }
}
