//! Languages command implementation.

use std::io::{self, Write};

use hilex_lex::Language;
use serde::Serialize;

use super::common::resolve_format;
use super::traits::{emit, Report};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the languages command.
#[derive(Debug, Clone, Default)]
pub struct LanguagesArgs {
    /// Report format override.
    pub format: Option<String>,
}

/// One supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    /// Display name.
    pub name: &'static str,
    /// Extensions that select the language.
    pub extensions: &'static [&'static str],
    /// Size of the keyword table.
    pub keywords: usize,
    /// Whether this is the fallback for unknown extensions.
    pub default: bool,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            name: language.name(),
            extensions: language.extensions(),
            keywords: language.keywords().len(),
            default: language == Language::default(),
        }
    }
}

impl Report for LanguageInfo {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let extensions = if self.default {
            "(default)".to_string()
        } else {
            self.extensions
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(
            out,
            "{:<10} {:<16} {:>4} keywords",
            self.name, extensions, self.keywords
        )
    }
}

/// Execute the languages command.
pub fn run_languages(args: LanguagesArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format.as_deref(), config)?;
    let reports: Vec<LanguageInfo> = Language::ALL.into_iter().map(LanguageInfo::from).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&reports, format, &mut out)
}
