//! Error types for zhanghui operations.

use thiserror::Error;

/// Errors that can occur while loading text for parsing.
///
/// Parsing itself never fails: undecodable bytes decode lossily and
/// malformed headings degrade to chapter 1. Only the I/O boundary can
/// error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
