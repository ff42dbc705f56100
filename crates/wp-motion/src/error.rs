use thiserror::Error;
use wp_path::PathError;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("mover configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type MotionResult<T> = Result<T, MotionError>;
