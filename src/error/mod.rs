use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("unknown use case: {0}")]
    UnknownUseCase(String),

    #[error("text-generation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("text-generation service returned no completion")]
    EmptyResponse,

    #[error("authentication error: {0}")]
    AuthenticationError(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serde_json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else if err.is_decode() {
            format!("malformed response body: {err}")
        } else {
            err.to_string()
        };
        Error::ServiceUnavailable(reason)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
