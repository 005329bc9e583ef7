use crate::EpisodeStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Libsql(#[from] libsql::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Episode not found: {0}")]
    EpisodeNotFound(String),
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition {
        from: EpisodeStatus,
        to: EpisodeStatus,
    },
}
