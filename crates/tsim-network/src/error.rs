use thiserror::Error;
use tsim_core::NodeId;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("duplicate directed edge {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
