//! Evaluation options.

use std::fmt;
use std::str::FromStr;

use tmplkit_foundation::{Error, ErrorKind};

/// What a field reference does when its key is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingKey {
    /// Evaluation fails with a missing-field error.
    #[default]
    Error,
    /// The field evaluates to `nil`.
    Zero,
}

impl FromStr for MissingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "zero" | "default" => Ok(Self::Zero),
            other => Err(Error::new(ErrorKind::Config(format!(
                "unrecognized missing-key option {other:?} (want \"error\" or \"zero\")"
            )))),
        }
    }
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Zero => "zero",
        })
    }
}

/// Options fixed at compile time and used on every evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Policy for absent fields.
    pub missing_key: MissingKey,
}

impl EvalConfig {
    /// Default configuration: absent fields are errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration where absent fields evaluate to `nil`.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            missing_key: MissingKey::Zero,
        }
    }

    /// Builder method to set the missing-key policy.
    #[must_use]
    pub fn with_missing_key(mut self, missing_key: MissingKey) -> Self {
        self.missing_key = missing_key;
        self
    }
}
