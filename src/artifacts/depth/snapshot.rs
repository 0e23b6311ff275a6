//! Tracked-path snapshot resolution
//!
//! A snapshot records, for every tracked path in order, the blob ID the path
//! resolves to within one commit's tree — or that the path is absent there.
//! Absence is a normal outcome, not an error: the engine uses it to decide
//! visibility. A path naming anything other than a regular-file blob
//! (directory, symlink, gitlink) counts as absent, because content identity
//! is meaningless for those entries.

use crate::artifacts::core::DepthError;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use derive_new::new;

/// Blob IDs of the tracked paths within one commit, in path order
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PathSnapshot(Vec<Option<ObjectId>>);

impl PathSnapshot {
    /// Index of the first absent path, if any
    pub fn first_absent(&self) -> Option<usize> {
        self.0.iter().position(Option::is_none)
    }

    /// The resolved blob IDs, skipping absent paths
    pub fn blob_oids(&self) -> impl Iterator<Item = &ObjectId> {
        self.0.iter().flatten()
    }
}

/// Resolves the tracked paths against a commit's tree
///
/// Generic over the tree loader so tests can drive it from an in-memory
/// store; production passes a closure over the object database.
#[derive(new)]
pub struct SnapshotResolver<'p, TreeLoaderFn>
where
    TreeLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Tree>>,
{
    tree_loader: TreeLoaderFn,
    paths: &'p [String],
}

impl<TreeLoaderFn> SnapshotResolver<'_, TreeLoaderFn>
where
    TreeLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Tree>>,
{
    /// Resolve every tracked path against the given tree
    pub fn resolve(&self, tree_oid: &ObjectId) -> anyhow::Result<PathSnapshot> {
        let mut entries = Vec::with_capacity(self.paths.len());
        for path in self.paths {
            entries.push(self.resolve_blob(tree_oid, path)?);
        }

        Ok(PathSnapshot(entries))
    }

    /// Resolve the starting commit's snapshot, where every path must exist
    ///
    /// An absent path here is the dedicated validation failure that stops
    /// the run before any walk begins.
    pub fn resolve_root(&self, tree_oid: &ObjectId) -> anyhow::Result<PathSnapshot> {
        let snapshot = self.resolve(tree_oid)?;

        if let Some(index) = snapshot.first_absent() {
            return Err(DepthError::PathNotFound {
                path: self.paths[index].clone(),
            }
            .into());
        }

        Ok(snapshot)
    }

    fn resolve_blob(&self, tree_oid: &ObjectId, path: &str) -> anyhow::Result<Option<ObjectId>> {
        let mut components = path.split('/').filter(|c| !c.is_empty());

        let Some(mut component) = components.next() else {
            return Ok(None);
        };

        let mut current_oid = tree_oid.clone();
        loop {
            let Some(tree) = (self.tree_loader)(&current_oid)? else {
                return Ok(None);
            };
            let Some(entry) = tree.entry(component) else {
                return Ok(None);
            };

            match components.next() {
                Some(next_component) => {
                    // Descend: anything but a directory dead-ends the path
                    if entry.mode != EntryMode::Directory {
                        return Ok(None);
                    }
                    current_oid = entry.oid.clone();
                    component = next_component;
                }
                None => {
                    return Ok(entry.mode.is_blob().then(|| entry.oid.clone()));
                }
            }
        }
    }
}
