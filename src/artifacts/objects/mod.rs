//! Git object types read by the depth walk
//!
//! Everything here is read-only: objects are deserialized from the loose
//! object store and never written back. The object kinds are:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (names, modes, and object IDs)
//! - **Commit**: snapshot metadata (tree, ordered parents, author)
//! - **Tag**: recognized by its header only, so a revision that resolves to
//!   an annotated tag can be rejected as "not a commit"
//!
//! All objects share the on-disk framing `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
