//! Version prefix assembly
//!
//! With `--cat`, the printed depth is preceded by the content of every
//! tracked blob at the starting commit: each blob's bytes with trailing
//! whitespace stripped, followed by a `.` separator, concatenated in path
//! order. A tracked file containing `1.4` thus turns the output `27` into
//! `1.4.27`.

use crate::artifacts::depth::snapshot::PathSnapshot;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

/// Assembles the version prefix from the starting commit's tracked blobs
pub struct VersionPrefixBuilder<BlobLoaderFn>
where
    BlobLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Blob>>,
{
    blob_loader: BlobLoaderFn,
}

impl<BlobLoaderFn> VersionPrefixBuilder<BlobLoaderFn>
where
    BlobLoaderFn: Fn(&ObjectId) -> anyhow::Result<Option<Blob>>,
{
    pub fn new(blob_loader: BlobLoaderFn) -> Self {
        Self { blob_loader }
    }

    pub fn build(&self, root_snapshot: &PathSnapshot) -> anyhow::Result<String> {
        let mut prefix: Vec<u8> = Vec::new();

        for oid in root_snapshot.blob_oids() {
            let blob = (self.blob_loader)(oid)
                .with_context(|| format!("unable to load blob {}", oid.to_short_oid()))?
                .with_context(|| format!("object {} is not a blob", oid.to_short_oid()))?;

            prefix.extend_from_slice(blob.content());
            while prefix
                .last()
                .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            {
                prefix.pop();
            }

            prefix.push(b'.');
        }

        Ok(String::from_utf8_lossy(&prefix).into_owned())
    }
}
