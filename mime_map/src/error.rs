use std::{io, sync::Arc};

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum MimeError {
    #[error("Failed to load MIME mapping table: {0:#}")]
    TableLoad(Arc<anyhow::Error>),

    #[error("I/O error: {0}")]
    IOError(#[from] io::Error),

    #[error("Invalid mapping table JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Key can never match a normalized lookup: {0:?}")]
    UnreachableKey(String),
}

pub type Result<T> = std::result::Result<T, MimeError>;
