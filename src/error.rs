use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarcartError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Print command `{program}` exited with {status}")]
    PrintCommand {
        program: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, BarcartError>;
