mod task;

pub use task::*;

mod error;
pub use error::*;

use async_openai::config::OpenAIConfig;

/// Chat-completion handle, constructed once at startup and injected into
/// request handlers.
#[derive(Clone)]
pub struct Client {
    pub(crate) inner: async_openai::Client<OpenAIConfig>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            inner: async_openai::Client::with_config(config),
        }
    }
}
