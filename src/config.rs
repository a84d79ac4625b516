use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{CalcError, CalcResult};

/// Front-end settings. The interpreter itself has nothing to configure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Prefix the answer marker when a line starts with an infix operator.
    #[serde(default = "default_true")]
    pub implicit_answer: bool,

    /// Lines longer than this (in characters) are rejected before evaluation.
    #[serde(default = "default_max_input_length")]
    pub max_input_length: usize,

    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Which renderings of the answer are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub ascii: bool,
    #[serde(default = "default_true")]
    pub decimal: bool,
    #[serde(default = "default_true")]
    pub unsigned: bool,
    #[serde(default = "default_true")]
    pub hex: bool,
    #[serde(default = "default_true")]
    pub binary: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            implicit_answer: default_true(),
            max_input_length: default_max_input_length(),
            history_size: default_history_size(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ascii: default_true(),
            decimal: default_true(),
            unsigned: default_true(),
            hex: default_true(),
            binary: default_true(),
        }
    }
}

impl CalcConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> CalcResult<T> {
    let file = File::open(path)
        .map_err(|e| CalcError::internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| CalcError::internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> CalcResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| CalcError::internal(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_true() -> bool {
    true
}

fn default_max_input_length() -> usize {
    256
}

fn default_history_size() -> usize {
    64
}
