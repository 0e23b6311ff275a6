//! Content-stability depth engine
//!
//! Computes how many commit-generations deep the tracked paths' current
//! content extends into history. The engine walks the ancestry DAG in
//! reverse-topological order, propagating a frontier of commits that are
//! still reachable with unchanged content:
//!
//! 1. The frontier starts as `{start: 0}`.
//! 2. Each commit yielded by the walk that is in the frontier gets dequeued
//!    with its depth. Commits outside the frontier are not on any tracked
//!    path and are skipped.
//! 3. The commit is **visible** if its tracked-path snapshot equals the
//!    starting commit's snapshot element-by-element; otherwise it is
//!    **hidden** and contributes nothing further — in particular, its
//!    parents are not discovered through it.
//! 4. A visible commit becomes the answer if it is strictly deeper than the
//!    current one, and each of its parents is recorded in the frontier at
//!    `depth + 1` (raising an existing entry, never lowering it).
//!
//! Because children are yielded before their parents along every path, a
//! commit's frontier depth is final by the time it is dequeued, so the
//! computed maximum is independent of the order in which sibling edges were
//! discovered.
//!
//! If the walk runs out while the frontier is non-empty, the available
//! ancestry cannot resolve all pending commits — typically a shallow clone —
//! and the engine fails rather than return a partial answer.
//!
//! ## Debug Logging
//!
//! Build with the `debug_walk` feature to trace every dequeue decision:
//!
//! ```toml
//! # In Cargo.toml
//! [features]
//! debug_walk = []
//! ```

use crate::artifacts::core::DepthError;
use crate::artifacts::depth::frontier::Frontier;
use crate::artifacts::depth::snapshot::PathSnapshot;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;

/// Macro for debug logging, enabled with the debug_walk feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Result of a depth computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthReport {
    /// Generations between the starting commit and the deepest visible one
    pub depth: usize,
    /// The deepest visible commit (the starting commit at depth 0)
    pub commit: ObjectId,
}

/// Computes the content-stability depth for one starting commit
///
/// Generic over the snapshot loader so unit tests can drive the walk from an
/// in-memory commit store; production passes a closure over the path
/// snapshot resolver.
pub struct DepthFinder<SnapshotLoaderFn>
where
    SnapshotLoaderFn: Fn(&SlimCommit) -> anyhow::Result<PathSnapshot>,
{
    snapshot_loader: SnapshotLoaderFn,
}

impl<SnapshotLoaderFn> DepthFinder<SnapshotLoaderFn>
where
    SnapshotLoaderFn: Fn(&SlimCommit) -> anyhow::Result<PathSnapshot>,
{
    pub fn new(snapshot_loader: SnapshotLoaderFn) -> Self {
        Self { snapshot_loader }
    }

    /// Run the frontier walk
    ///
    /// # Arguments
    ///
    /// * `start_oid` - the commit the depth is measured from
    /// * `root_snapshot` - the tracked paths' blob IDs at `start_oid`, the
    ///   comparison baseline for every visited commit
    /// * `walk` - ancestry iterator guaranteeing children before parents
    ///   along every path
    pub fn find_depth(
        &self,
        start_oid: ObjectId,
        root_snapshot: &PathSnapshot,
        walk: impl IntoIterator<Item = SlimCommit>,
    ) -> anyhow::Result<DepthReport> {
        let mut frontier = Frontier::default();
        frontier.record(start_oid.clone(), 0);

        let mut max_depth = 0;
        let mut deepest_commit = start_oid;

        let mut walk = walk.into_iter();
        while !frontier.is_empty() {
            let Some(commit) = walk.next() else {
                debug_log!(
                    "Walk exhausted with {} pending frontier entries",
                    frontier.len()
                );
                return Err(DepthError::HistoryTooShallow.into());
            };

            // Not on any tracked ancestry path
            let Some(depth) = frontier.take(&commit.oid) else {
                continue;
            };

            let snapshot = (self.snapshot_loader)(&commit)?;
            if snapshot != *root_snapshot {
                debug_log!("Commit {} at depth {}: hidden", &commit.oid, depth);
                continue;
            }

            debug_log!("Commit {} at depth {}: visible", &commit.oid, depth);

            // Strict comparison: the first commit dequeued at the maximum
            // depth stays the answer
            if depth > max_depth {
                max_depth = depth;
                deepest_commit = commit.oid.clone();
            }

            for parent in &commit.parents {
                frontier.record(parent.clone(), depth + 1);
            }
        }

        Ok(DepthReport {
            depth: max_depth,
            commit: deepest_commit,
        })
    }
}
