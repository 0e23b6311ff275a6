//! Repository access components
//!
//! Read-only access to an existing Git repository:
//!
//! - `database`: loose-object database (blobs, trees, commits)
//! - `refs`: reference resolution (HEAD, branches, tags)
//! - `repository`: discovery and ownership of the two above

pub mod database;
pub mod refs;
pub mod repository;
