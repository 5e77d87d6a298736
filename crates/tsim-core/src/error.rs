//! Shared primitive error type.
//!
//! Sub-crates define their own error enums for concerns specific to them and
//! wrap `TsimError` as one variant via `#[from]` where they need one of these.

use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error)]
pub enum TsimError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("unknown node id {0:?}")]
    UnknownNodeName(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TsimResult<T> = Result<T, TsimError>;
