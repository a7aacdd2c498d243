//! Error types for the IR program graph.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IrError {
    #[error("invalid integer width {bits} for {context} (supported widths: 1..=64)")]
    InvalidIntWidth { context: &'static str, bits: u32 },

    #[error("vector type has zero lanes")]
    ZeroLaneVector,

    #[error("data sequence has no elements")]
    EmptyDataSequence,

    #[error("reference to undefined global `{0}`")]
    UndefinedGlobal(String),

    #[error("reference to undefined function `{0}`")]
    UndefinedFunction(String),

    #[error("block address names unknown block `{block}` in function `{function}`")]
    UndefinedBlock { function: String, block: String },

    #[error("serialization failed: {0}")]
    Serialize(#[from] bincode::Error),
}
