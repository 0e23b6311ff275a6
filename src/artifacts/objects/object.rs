use anyhow::Result;
use std::io::BufRead;

/// Deserialization seam for objects read from the database
///
/// Implementors receive a reader positioned just past the `<type> <size>\0`
/// header and parse the remaining payload.
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}
