//! Category suggestion with a fixed fallback.

use crate::client::LlmClient;
use crate::prompt::{entry_prompt, system_instruction};

/// Label returned whenever the model call fails.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Ask the model for one category name for an entry.
///
/// `existing` holds the owner's current category names; the model is told to
/// reuse one verbatim when it fits. A successful reply is returned with
/// surrounding whitespace removed and nothing else changed. Any failure is
/// logged and turned into [`FALLBACK_CATEGORY`].
///
/// Callers are expected to pass non-blank `title` and `content`.
pub async fn suggest_category(
    client: &LlmClient,
    title: &str,
    content: &str,
    existing: &[String],
) -> String {
    let system = system_instruction(existing);
    let prompt = entry_prompt(title, content);

    match client.complete(&system, &prompt).await {
        Ok(text) => {
            let category = text.trim().to_string();
            tracing::debug!(category = %category, model = %client.config().model, "Category suggested");
            category
        }
        Err(e) => {
            tracing::warn!(error = %e, "Categorization failed, using fallback");
            FALLBACK_CATEGORY.to_string()
        }
    }
}
