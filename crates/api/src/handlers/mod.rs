pub mod auth;
pub mod categories;
pub mod categorize;
pub mod entries;
pub mod journal;
