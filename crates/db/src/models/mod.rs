//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs consumed by the matching repository

pub mod category;
pub mod entry;
pub mod session;
pub mod user;
