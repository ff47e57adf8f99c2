//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Every category and entry query is scoped by
//! the owning `user_id`.

pub mod category_repo;
pub mod entry_repo;
pub mod session_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use entry_repo::EntryRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
