//! Control file reader.
//!
//! The control file sets quiz-level metadata, one `KEY: value` pair per
//! line. Values may be wrapped in double quotes.

use std::collections::BTreeMap;

use thiserror::Error;

/// Default quiz title.
pub const DEFAULT_TITLE: &str = "THIS IS THE TITLE";
/// Default author name.
pub const DEFAULT_AUTHOR: &str = "I am The Author";
/// Default content license.
pub const DEFAULT_LICENSE: &str = "ODC PDDL";
/// Default pass percentage.
pub const DEFAULT_PASS_PERCENTAGE: u32 = 50;
/// Default number of questions drawn per attempt.
pub const DEFAULT_POOL_SIZE: u32 = 5;
/// Default archive name.
pub const DEFAULT_PACKAGE_NAME: &str = "myMCQ-fb.h5p";

/// Errors emitted while reading a control file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// A non-empty line has no `:` separator.
    #[error("control file line {line}: expected 'KEY: value', found '{content}'")]
    MissingSeparator {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// A numeric key holds something that is not a number.
    #[error("control key {key}: '{value}' is not a valid number")]
    InvalidNumber {
        /// Key name.
        key: String,
        /// Raw value.
        value: String,
    },
}

/// Raw key/value pairs read from a control file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlParams {
    entries: BTreeMap<String, String>,
}

impl ControlParams {
    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Iterate over all pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `TITLE`.
    pub fn title(&self) -> &str {
        self.get("TITLE").unwrap_or(DEFAULT_TITLE)
    }

    /// `AUTHOR`.
    pub fn author(&self) -> &str {
        self.get("AUTHOR").unwrap_or(DEFAULT_AUTHOR)
    }

    /// `LICENSE`.
    pub fn license(&self) -> &str {
        self.get("LICENSE").unwrap_or(DEFAULT_LICENSE)
    }

    /// `INTRODUCTION`.
    pub fn introduction(&self) -> &str {
        self.get("INTRODUCTION").unwrap_or("")
    }

    /// `PASS_PERCENTAGE`.
    pub fn pass_percentage(&self) -> Result<u32, ControlError> {
        self.number("PASS_PERCENTAGE", DEFAULT_PASS_PERCENTAGE)
    }

    /// `POOL_SIZE`.
    pub fn pool_size(&self) -> Result<u32, ControlError> {
        self.number("POOL_SIZE", DEFAULT_POOL_SIZE)
    }

    /// `DISABLE_BACKWARDS_NAVIGATION`.
    pub fn disable_backwards_navigation(&self) -> bool {
        self.flag("DISABLE_BACKWARDS_NAVIGATION", false)
    }

    /// `RANDOM_QUESTIONS`.
    pub fn random_questions(&self) -> bool {
        self.flag("RANDOM_QUESTIONS", true)
    }

    /// `NAME_H5P`, always ending in `.h5p`.
    pub fn package_name(&self) -> String {
        let name = self.get("NAME_H5P").unwrap_or(DEFAULT_PACKAGE_NAME);
        if name.ends_with(".h5p") {
            name.to_string()
        } else {
            format!("{name}.h5p")
        }
    }

    fn number(&self, key: &str, default: u32) -> Result<u32, ControlError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.parse().map_err(|_| ControlError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }
}

/// Parse control file contents.
pub fn parse_control(input: &str) -> Result<ControlParams, ControlError> {
    let mut params = ControlParams::default();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(ControlError::MissingSeparator {
                line: index + 1,
                content: line.to_string(),
            });
        };
        params.insert(key.trim(), value.trim().trim_matches('"'));
    }
    Ok(params)
}
