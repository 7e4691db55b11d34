//! Calculator settings read from a plain-text document of titled sections:
//!
//! ```text
//! logging
//!  loglevel: info
//!  log_to_file: false
//! repl
//!  prompt: >
//! variables
//!  x: 13
//!  y: -4
//! ```
//! Section titles and keys are identifiers, values are comma separated and typed as
//! integer, float, boolean or text (first type that fits). Values cannot contain
//! whitespace. Lines starting with `//`, `#`, `%` or `;` are comments.
use crate::symbolic::element::Valuation;

use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{all_consuming, map, recognize},
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub type Section = HashMap<String, Vec<SettingValue>>;
pub type SettingsDocument = HashMap<String, Section>;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl SettingValue {
    fn classify(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<i64>() {
            SettingValue::Integer(value)
        } else if let Ok(value) = raw.parse::<f64>() {
            SettingValue::Float(value)
        } else if let Ok(value) = raw.parse::<bool>() {
            SettingValue::Boolean(value)
        } else {
            SettingValue::Text(raw.to_string())
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Integer(_) => "integer",
            SettingValue::Float(_) => "float",
            SettingValue::Boolean(_) => "boolean",
            SettingValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingValue::Integer(value) => write!(f, "{}", value),
            SettingValue::Float(value) => write!(f, "{}", value),
            SettingValue::Boolean(value) => write!(f, "{}", value),
            SettingValue::Text(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Unreadable { path: PathBuf, source: std::io::Error },
    Syntax(String),
    WrongType {
        section: String,
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    InvalidVariable { key: String, reason: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::Unreadable { path, source } => {
                write!(f, "cannot read settings file {}: {}", path.display(), source)
            }
            SettingsError::Syntax(details) => write!(f, "settings document cannot be parsed: {}", details),
            SettingsError::WrongType {
                section,
                key,
                expected,
                found,
            } => write!(f, "{}.{} must be a {}, found a {}", section, key, expected, found),
            SettingsError::InvalidVariable { key, reason } => {
                write!(f, "variable entry '{}' is invalid: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////
//           DOCUMENT GRAMMAR
////////////////////////////////////////////////////////////////

/// `[A-Za-z_][A-Za-z0-9_]*`
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn setting_value(input: &str) -> IResult<&str, SettingValue> {
    map(
        take_while1(|c: char| c != ',' && !c.is_whitespace()),
        SettingValue::classify,
    )
    .parse(input)
}

/// `key: v1, v2, ...`
fn entry(input: &str) -> IResult<&str, (String, Vec<SettingValue>)> {
    map(
        separated_pair(
            identifier,
            delimited(space0, tag(":"), space0),
            separated_list1(delimited(space0, tag(","), space0), setting_value),
        ),
        |(key, values)| (key.to_string(), values),
    )
    .parse(input)
}

/// title followed by one or more entries
fn section(input: &str) -> IResult<&str, (String, Section)> {
    map(
        pair(
            terminated(identifier, multispace0),
            many1(terminated(entry, multispace0)),
        ),
        |(title, entries)| (title.to_string(), entries.into_iter().collect()),
    )
    .parse(input)
}

fn is_comment(line: &str) -> bool {
    let line = line.trim_start();
    ["//", "#", "%", ";"].iter().any(|marker| line.starts_with(marker))
}

/// Parse the whole text; anything left unparsed is an error.
/// A repeated section title merges into the earlier one, a repeated key overwrites.
pub fn parse_settings_document(text: &str) -> Result<SettingsDocument, SettingsError> {
    let cleaned = text
        .lines()
        .filter(|line| !is_comment(line))
        .collect::<Vec<_>>()
        .join("\n");
    let (_, sections) = all_consuming(preceded(multispace0, many0(section)))
        .parse(cleaned.as_str())
        .map_err(|e| SettingsError::Syntax(e.to_string()))?;
    let mut document = SettingsDocument::new();
    for (title, entries) in sections {
        document.entry(title).or_default().extend(entries);
    }
    Ok(document)
}

////////////////////////////////////////////////////////////////
//           CALCULATOR SETTINGS
////////////////////////////////////////////////////////////////

pub const DEFAULT_PROMPT: &str = "Give an input";

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSettings {
    /// level name for the logger, `None` for the default
    pub loglevel: Option<String>,
    pub log_to_file: bool,
    pub prompt: String,
    /// variables known before the first command
    pub valuation: Valuation,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            loglevel: None,
            log_to_file: false,
            prompt: DEFAULT_PROMPT.to_string(),
            valuation: Valuation::new(),
        }
    }
}

fn first_value<'a>(document: &'a SettingsDocument, section: &str, key: &str) -> Option<&'a SettingValue> {
    document.get(section)?.get(key)?.first()
}

fn wrong_type(section: &str, key: &str, expected: &'static str, found: &SettingValue) -> SettingsError {
    SettingsError::WrongType {
        section: section.to_string(),
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}

impl CalculatorSettings {
    pub fn from_document(document: &SettingsDocument) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        match first_value(document, "logging", "loglevel") {
            None => {}
            Some(SettingValue::Text(level)) => settings.loglevel = Some(level.clone()),
            Some(other) => return Err(wrong_type("logging", "loglevel", "string", other)),
        }
        match first_value(document, "logging", "log_to_file") {
            None => {}
            Some(SettingValue::Boolean(flag)) => settings.log_to_file = *flag,
            Some(other) => return Err(wrong_type("logging", "log_to_file", "boolean", other)),
        }
        if let Some(prompt) = first_value(document, "repl", "prompt") {
            settings.prompt = prompt.to_string();
        }

        if let Some(variables) = document.get("variables") {
            for (key, values) in variables {
                let mut chars = key.chars();
                let name = match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => c,
                    _ => {
                        return Err(SettingsError::InvalidVariable {
                            key: key.clone(),
                            reason: "name must be a single letter".to_string(),
                        });
                    }
                };
                match values.as_slice() {
                    [SettingValue::Integer(value)] => {
                        settings.valuation.insert(name, *value);
                    }
                    _ => {
                        return Err(SettingsError::InvalidVariable {
                            key: key.clone(),
                            reason: "value must be a single integer".to_string(),
                        });
                    }
                }
            }
        }
        debug!("settings loaded: {:?}", settings);
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }
}

impl FromStr for CalculatorSettings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_document(&parse_settings_document(s)?)
    }
}
