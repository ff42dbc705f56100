use thiserror::Error;

use crate::TraversalPolicy;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("waypoint index {index} out of range for a path of {len} waypoints")]
    OutOfRange { index: usize, len: usize },

    #[error("{operation} is not supported under the {policy} policy")]
    Unsupported {
        operation: &'static str,
        policy:    TraversalPolicy,
    },

    #[error("waypoint parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PathResult<T> = Result<T, PathError>;
