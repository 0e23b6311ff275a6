//! Git references, read side
//!
//! References are human-readable names pointing at commits. A ref file
//! contains either a 40-character SHA-1 (direct reference) or a
//! `ref: <path>` line (symbolic reference, followed recursively). Only
//! loose refs are read; packed-refs are out of scope alongside packfiles.

use crate::artifacts::branch::ref_name::RefName;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Read-only reference resolver rooted at the `.git` directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the `.git` directory
    path: Box<Path>,
}

/// A ref file's content: another ref's path, or a direct object ID
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef(String),
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef(symref_match[1].to_string())))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    /// Read the object ID a reference points to
    ///
    /// Follows symbolic references recursively until reaching a direct OID.
    /// Returns `Ok(None)` when no such ref exists, or when it points at an
    /// unborn branch (`HEAD` in a repository with no commits).
    pub fn read_ref(&self, name: &RefName) -> anyhow::Result<Option<ObjectId>> {
        for candidate in self.candidate_paths(name) {
            if let Some(oid) = self.resolve_ref_file(&candidate)? {
                return Ok(Some(oid));
            }
        }

        Ok(None)
    }

    /// Places a name may live under `.git`, in lookup order
    fn candidate_paths(&self, name: &RefName) -> Vec<PathBuf> {
        if name.is_head() {
            return vec![self.path.join("HEAD")];
        }

        let name = Path::new(name.as_ref());
        vec![
            self.path.join(name),
            self.path.join("refs").join(name),
            self.path.join("refs").join("heads").join(name),
            self.path.join("refs").join("tags").join(name),
            self.path.join("refs").join("remotes").join(name),
        ]
    }

    fn resolve_ref_file(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match SymRefOrOid::read_symref_or_oid(path)? {
            None => Ok(None),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef(target)) => {
                // A dangling symref target is an unborn branch
                self.resolve_ref_file(&self.path.join(target))
            }
        }
    }
}
