//! Error types for `tsim-io`.

use thiserror::Error;

/// Errors that can occur loading CSV input or writing the simulation log.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed row {row} in {file}: {reason}")]
    MalformedRow { file: &'static str, row: usize, reason: String },

    #[error("demand row {row} references unknown node {node:?}")]
    UnknownNode { row: usize, node: String },

    #[error("demand row {row} has lane {lane}, outside 1-5")]
    LaneOutOfRange { row: usize, lane: u8 },

    #[error("demand row {row} has unrecognised vehicle type code {code}")]
    UnknownVehicleType { row: usize, code: u8 },
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
