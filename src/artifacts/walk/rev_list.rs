//! Reverse-topological commit iterator
//!
//! A commit can be reachable from the start commit via ancestry paths of
//! different lengths through different merge parents. The depth engine's
//! frontier bookkeeping is only correct if every child is yielded before any
//! of its parents, so plain parent-chasing or timestamp ordering is not
//! enough: the iterator performs a full in-degree topological sort.
//!
//! ## Algorithm
//!
//! 1. **Discovery**: breadth-first walk from the start commit, loading a
//!    [`SlimCommit`] per reachable commit and counting each commit's
//!    children within the reachable subgraph. A parent whose object is
//!    missing from the database (a shallow-clone boundary) is silently
//!    skipped here; whether that matters is the engine's call, not ours.
//! 2. **Emission**: a max-heap keyed by `(timestamp, object id)` holds
//!    commits whose child count has reached zero. Popping yields the next
//!    commit and decrements its parents' counts. Children therefore always
//!    precede parents, newest first among independent commits, and the
//!    total order is deterministic.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start_oid: ObjectId,
}

impl RevList<'_> {
    /// Plan the walk and return the iterator
    ///
    /// All database access happens here; iteration itself is infallible.
    pub fn into_iter(self) -> anyhow::Result<RevListIntoIter> {
        RevListIntoIter::plan(
            |oid: &ObjectId| self.repository.database().load_slim_commit(oid),
            self.start_oid,
        )
    }
}

pub struct RevListIntoIter {
    /// Discovered commits not yet ready for emission
    pending: HashMap<ObjectId, SlimCommit>,
    /// Children remaining within the reachable subgraph, per commit
    child_count: HashMap<ObjectId, usize>,
    /// Commits whose children have all been emitted
    ready: BinaryHeap<SlimCommit>,
}

impl RevListIntoIter {
    fn plan<CommitLoaderFn>(
        commit_loader: CommitLoaderFn,
        start_oid: ObjectId,
    ) -> anyhow::Result<Self>
    where
        CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<SlimCommit>>,
    {
        let mut pending = HashMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start_oid.clone()]);

        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            // An absent object is a shallow-history boundary, not an error
            let Some(commit) = commit_loader(&oid)? else {
                continue;
            };

            queue.extend(commit.parents.iter().cloned());
            pending.insert(oid, commit);
        }

        let mut child_count: HashMap<ObjectId, usize> = HashMap::new();
        for commit in pending.values() {
            for parent in &commit.parents {
                if pending.contains_key(parent) {
                    *child_count.entry(parent.clone()).or_default() += 1;
                }
            }
        }

        // Only the start commit has no children within the reachable
        // subgraph, so it alone seeds the heap
        let mut ready = BinaryHeap::new();
        if let Some(start) = pending.remove(&start_oid) {
            ready.push(start);
        }

        Ok(RevListIntoIter {
            pending,
            child_count,
            ready,
        })
    }
}

impl Iterator for RevListIntoIter {
    type Item = SlimCommit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.ready.pop()?;

        for parent in &commit.parents {
            if let Some(count) = self.child_count.get_mut(parent) {
                *count -= 1;
                if *count == 0
                    && let Some(parent_commit) = self.pending.remove(parent)
                {
                    self.ready.push(parent_commit);
                }
            }
        }

        Some(commit)
    }
}
