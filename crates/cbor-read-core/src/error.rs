//! Error types for decoding, identity parsing and configuration.

use std::path::PathBuf;

use thiserror::Error;

const NOT_OWNER: &str = "You aren't the owner";
const OUT_OF_BOUNDS: &str = "Must read within bounds of cbor";
const TRAILING_DATA: &str = "Must read entire cbor";

/// Why a `read_this` call reverted.
///
/// `Display` yields the exact revert reason. [`ReadError::Unreasoned`]
/// carries no reason and displays as the empty string.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadError {
    #[error("{}", NOT_OWNER)]
    NotOwner,
    #[error("{}", OUT_OF_BOUNDS)]
    OutOfBounds,
    #[error("{}", TRAILING_DATA)]
    TrailingData,
    #[error("")]
    Unreasoned,
}

impl ReadError {
    /// The revert reason string, or `None` for an unreasoned revert.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ReadError::NotOwner => Some(NOT_OWNER),
            ReadError::OutOfBounds => Some(OUT_OF_BOUNDS),
            ReadError::TrailingData => Some(TRAILING_DATA),
            ReadError::Unreasoned => None,
        }
    }

    /// Short stable name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ReadError::NotOwner => "not_owner",
            ReadError::OutOfBounds => "out_of_bounds",
            ReadError::TrailingData => "trailing_data",
            ReadError::Unreasoned => "unreasoned",
        }
    }
}

/// Error parsing an [`Address`](crate::Address) from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be 40 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex in address")]
    InvalidHex,
}

/// Error loading a [`ReaderConfig`](crate::ReaderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
