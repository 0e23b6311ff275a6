//! Git data structures and the depth algorithms
//!
//! - `branch`: ref names and revision-expression parsing
//! - `core`: shared error taxonomy (process exit codes)
//! - `depth`: path snapshots, the frontier, and the depth engine
//! - `objects`: Git object types (blob, tree, commit)
//! - `walk`: reverse-topological ancestry iteration

pub mod branch;
pub mod core;
pub mod depth;
pub mod objects;
pub mod walk;
