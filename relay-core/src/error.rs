use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// The platform rejected or failed a request (send, chat action).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RelayError>;
