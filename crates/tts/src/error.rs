#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("synthesis api returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: serde_json::Value,
    },
}
