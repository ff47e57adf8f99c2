//! Instruction text sent with every categorization request.

/// Example names shown to the model to anchor the expected style.
pub const EXAMPLE_CATEGORIES: &[&str] = &[
    "Work Ideas",
    "Personal Reflections",
    "Travel Plans",
    "Health & Fitness",
    "Creative Projects",
    "Learning Notes",
    "Relationship Thoughts",
    "Financial Planning",
];

/// Build the system instruction listing the owner's existing categories.
pub fn system_instruction(existing: &[String]) -> String {
    let existing_list = if existing.is_empty() {
        "No existing categories".to_string()
    } else {
        bullet_list(existing.iter().map(String::as_str))
    };
    let examples = bullet_list(EXAMPLE_CATEGORIES.iter().copied());

    format!(
        "You are an AI assistant that categorizes journal entries. Based on the title and \
         content provided, suggest a single, concise category name (2-4 words max) that best \
         represents the theme or topic of the entry.\n\
         \n\
         If the entry closely matches one of these existing categories, use that exact category \
         name instead of creating a new one:\n\
         {existing_list}\n\
         \n\
         Examples of good category names:\n\
         {examples}\n\
         \n\
         Respond with ONLY the category name, nothing else."
    )
}

/// Build the user message carrying the entry itself.
pub fn entry_prompt(title: &str, content: &str) -> String {
    format!("Title: {title}\n\nContent: {content}")
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
