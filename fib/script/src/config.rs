use std::env::{self, VarError};
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("could not parse {var}={value:?}: {reason}")]
    Parse {
        var: String,
        value: String,
        reason: String,
    },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Index handed to `fibonacci`.
    pub n: i64,
    /// Also write the full decimal value to stderr.
    pub print_value: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: 100000,
            print_value: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let def = Self::default();
        let config = Self {
            n: env_or("FIB_ARG", def.n)?,
            print_value: env_or("FIB_PRINT", def.print_value)?,
        };
        if config.n < 0 {
            warn!(n = config.n, "negative FIB_ARG, result will be 0");
        }
        Ok(config)
    }
}

pub fn env_or<T>(var: &str, def: T) -> Result<T, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    match env::var(var) {
        Ok(value) => parse_or(var, Some(value), def),
        Err(VarError::NotPresent) => parse_or(var, None, def),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: var.into() }),
    }
}

/// Parses `value` if present, otherwise falls back to `def`.
pub fn parse_or<T>(var: &str, value: Option<String>, def: T) -> Result<T, ConfigError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    let Some(value) = value else {
        debug!(var, "not set, using default");
        return Ok(def);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Parse {
        var: var.into(),
        reason: e.to_string(),
        value,
    })
}
