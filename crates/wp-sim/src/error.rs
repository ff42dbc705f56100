use thiserror::Error;
use wp_core::WpError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] WpError),
}

pub type SimResult<T> = Result<T, SimError>;
