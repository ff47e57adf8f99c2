//! Journal entry input rules.
//!
//! Title and content are the only user-supplied fields of an entry. Both are
//! stored trimmed and must be non-empty after trimming; no other limits apply.

use crate::error::CoreError;

/// Message returned whenever either field is missing or blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and content are required";

/// Trimmed, non-empty entry text ready to be categorized or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryText {
    pub title: String,
    pub content: String,
}

/// Trim both fields and reject the pair if either ends up empty.
///
/// Accepts `Option`s so request bodies with absent fields share the same
/// error as bodies with blank ones.
pub fn normalize_entry_text(
    title: Option<&str>,
    content: Option<&str>,
) -> Result<EntryText, CoreError> {
    let title = title.map(str::trim).unwrap_or_default();
    let content = content.map(str::trim).unwrap_or_default();

    if title.is_empty() || content.is_empty() {
        return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.into()));
    }

    Ok(EntryText {
        title: title.to_string(),
        content: content.to_string(),
    })
}
