//! Error types for the analysis.

use thiserror::Error;

/// Hard failures the resolver can produce.
///
/// Category-level problems never surface here; they degrade to the
/// length-0 sentinel in-band.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("recursion depth limit of {limit} exceeded while resolving a constant")]
    DepthLimitExceeded { limit: usize },
}

/// Failures of a full traversal.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to write analysis output: {0}")]
    Io(#[from] std::io::Error),
}
