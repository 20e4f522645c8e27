#[derive(thiserror::Error, Debug)]
pub enum ActransitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error response: {0} {1}")]
    Response(u16, String),

    #[error("Deserialize error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Decode error for {0}: {1}")]
    Decode(&'static str, #[source] serde_json::Error),
}

pub type ActransitResult<T> = Result<T, ActransitError>;
