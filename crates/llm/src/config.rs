/// Default chat-completions base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1";

/// Connection settings for the hosted model.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Bearer token. `None` sends no `Authorization` header.
    pub api_key: Option<String>,
    /// Model identifier sent in every request.
    pub model: String,
}

impl LlmConfig {
    /// Load model settings from environment variables.
    ///
    /// | Env Var        | Required | Default                        |
    /// |----------------|----------|--------------------------------|
    /// | `LLM_API_KEY`  | no       | falls back to `OPENROUTER_API_KEY` |
    /// | `LLM_BASE_URL` | no       | `https://openrouter.ai/api/v1` |
    /// | `LLM_MODEL`    | no       | `deepseek/deepseek-r1`         |
    ///
    /// A missing key is not an error: requests then fail upstream and every
    /// suggestion falls back to `"Uncategorized"`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("LLM_API_KEY")
            .or_else(|_| std::env::var("OPENROUTER_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url = std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        Self {
            base_url,
            api_key,
            model,
        }
    }

    /// Config pointing at `base_url` with the default model and no key.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}
