//! Journal domain logic with no I/O.
//!
//! Shared by the repository layer, the categorizer client and the HTTP API.

pub mod entries;
pub mod error;
pub mod graph;
pub mod types;
pub mod users;
