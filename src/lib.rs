//! Derive a monotonically increasing build number purely from repository
//! history: the depth, in commit-generations, to which the tracked files'
//! current content extends unchanged into the past.

pub mod areas;
pub mod artifacts;
