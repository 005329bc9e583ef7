#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    OpenAI(#[from] async_openai::error::OpenAIError),
    #[error(transparent)]
    Template(#[from] bazi_template::Error),
    #[error("model returned no content")]
    EmptyCompletion,
}
