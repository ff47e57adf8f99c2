//! Account input rules and the viewer label shown at the root of the graph.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Label used when neither a display name nor an email local part is usable.
pub const DEFAULT_VIEWER_LABEL: &str = "User";

/// Trim and lowercase an email address, then check its syntax.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let normalized = email.trim().to_lowercase();
    if !normalized.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            email.trim()
        )));
    }
    Ok(normalized)
}

/// Trim an optional display name, collapsing blank values to `None`.
pub fn normalize_display_name(display_name: Option<&str>) -> Option<String> {
    display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Name shown for a viewer: display name, else email local part, else `"User"`.
pub fn viewer_label(display_name: Option<&str>, email: &str) -> String {
    if let Some(name) = normalize_display_name(display_name) {
        return name;
    }
    match email.split('@').next().map(str::trim) {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => DEFAULT_VIEWER_LABEL.to_string(),
    }
}
