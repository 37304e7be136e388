//! TOML configuration for deploying a reader.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::address::Address;
use crate::error::ConfigError;
use crate::reader::ByteStringReader;

/// Deployment settings for a [`ByteStringReader`].
///
/// ```toml
/// owner = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
/// value = 1000000000
/// label = "TestFixture"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
    pub owner: Address,
    #[serde(default)]
    pub value: u64,
    #[serde(default)]
    pub label: Option<String>,
}

impl ReaderConfig {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            value: 0,
            label: None,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn deploy(&self) -> ByteStringReader {
        let reader = ByteStringReader::deploy_with_value(self.owner, self.value);
        match &self.label {
            Some(label) => reader.with_label(label.clone()),
            None => reader,
        }
    }
}
