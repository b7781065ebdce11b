use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common error type for every core operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unknown target profile: {0}")]
    UnknownProfile(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Environmental state applied multiplicatively to detection performance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Clear,
    Auroral,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Clear, Condition::Auroral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Auroral => "auroral",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(Condition::Clear),
            "auroral" | "aurora" => Ok(Condition::Auroral),
            other => Err(ModelError::InvalidInput(format!(
                "unknown condition '{}', expected 'clear' or 'auroral'",
                other
            ))),
        }
    }
}
