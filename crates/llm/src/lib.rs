//! Hosted language-model client used to suggest journal categories.
//!
//! Talks to any OpenAI-compatible chat-completions endpoint (OpenRouter by
//! default). [`categorize::suggest_category`] is the only entry point the rest
//! of the workspace needs: it never fails and falls back to
//! [`categorize::FALLBACK_CATEGORY`].

pub mod categorize;
pub mod client;
pub mod config;
pub mod prompt;

pub use categorize::{suggest_category, FALLBACK_CATEGORY};
pub use client::{LlmClient, LlmError};
pub use config::LlmConfig;
