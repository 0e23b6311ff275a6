//! Git blob object
//!
//! Blobs store raw file content. The depth walk mostly compares blobs by ID
//! without ever loading them; the one consumer of actual content is the
//! version prefix builder, which is why content stays as raw bytes rather
//! than a string — tracked files are not required to be UTF-8.

use crate::artifacts::objects::object::Unpackable;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Git blob object representing file content
#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    /// Get the raw file content
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(content.into()))
    }
}
