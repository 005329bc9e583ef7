#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Minijinja(#[from] minijinja::Error),
}
