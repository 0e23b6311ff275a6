//! Content-stability depth computation
//!
//! This is the core of the tool:
//!
//! - `snapshot`: resolves the tracked paths to blob IDs within one commit
//! - `frontier`: the walk's worklist of discovered-but-unresolved commits
//! - `depth_finder`: the frontier-propagating walk over the ancestry DAG
//! - `version_prefix`: optional textual prefix from the root blobs

pub mod depth_finder;
pub mod frontier;
pub mod snapshot;
pub mod version_prefix;
