//! Error types.
//!
//! Each concern gets its own enum so callers can tell a transport failure
//! from a malformed catalog from a bad squad document:
//!
//! - `FetchError`: a document could not be retrieved or decoded
//! - `CatalogError`: raw records could not be turned into a `CardIndex`
//! - `CostResolutionError`: a variable cost could not be resolved (non-fatal)
//! - `ListError`: a squad document could not be retrieved or decoded
//! - `UnrecognizedCardError`: a squad entry names a card the index lacks (non-fatal)
//! - `RollError`: a dice query could not be understood

use thiserror::Error;

/// Failure retrieving or decoding one catalog document.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("got status {status} fetching {location}")]
    Status { location: String, status: u16 },

    #[error("transport error fetching {location}: {message}")]
    Transport { location: String, message: String },

    #[error("I/O error reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog source: {0}")]
    InvalidSource(String),
}

/// Failure building a `CardIndex` from raw records.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("duplicate card key: {0}")]
    DuplicateKey(String),

    #[error("malformed card {xws}: {reason}")]
    Malformed { xws: String, reason: String },
}

/// A variable point cost that could not be resolved.
///
/// Callers treat this as a zero cost and keep rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostResolutionError {
    #[error("unknown cost variable: {0}")]
    UnknownVariable(String),

    #[error("cost variable {variable} resolved to {key}, which has no entry in the cost table")]
    MissingValue { variable: String, key: String },
}

/// Failure decoding a squad document. Raised before any output line exists.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("could not decode squad document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("not a list builder link: {0}")]
    UnrecognizedLink(String),

    #[error("list builder error: {0}")]
    Vendor(String),
}

/// A squad entry whose short id is not in the index.
///
/// Contained to the line it appears on; the rest of the list still renders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnrecognizedCardError {
    #[error("unrecognized pilot: {0}")]
    Pilot(String),

    #[error("unrecognized upgrade: {0}")]
    Upgrade(String),
}

/// Failure understanding a dice query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("could not work out how many dice to roll in \"{0}\"")]
    MissingCount(String),

    #[error("could not tell which dice to roll in \"{0}\"")]
    MissingColor(String),

    #[error("cannot roll red and green dice together in \"{0}\"")]
    MixedColors(String),

    #[error("can only roll between 1 and {max} dice, not {requested}")]
    TooMany { requested: usize, max: usize },

    #[error("a die needs at least one side")]
    NoSides,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
