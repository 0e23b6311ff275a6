//! Tree entry modes
//!
//! Git trees record an octal mode per entry. The depth walk only ever asks
//! one question of a mode: does this entry name a regular-file blob? Content
//! identity is meaningless for directories, symlinks, and gitlinks, so the
//! snapshot resolver treats all of those as absent.

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum EntryMode {
    Regular,
    Executable,
    Symlink,
    Directory,
    Gitlink,
}

impl EntryMode {
    /// Parse the octal mode string as written in a tree entry
    ///
    /// Git writes directory entries as `40000` (no leading zero).
    pub fn from_octal_str(mode: &str) -> anyhow::Result<Self> {
        match mode {
            "100644" => Ok(EntryMode::Regular),
            "100755" => Ok(EntryMode::Executable),
            "120000" => Ok(EntryMode::Symlink),
            "40000" => Ok(EntryMode::Directory),
            "160000" => Ok(EntryMode::Gitlink),
            _ => Err(anyhow::anyhow!("Invalid tree entry mode: {}", mode)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Executable => "100755",
            EntryMode::Symlink => "120000",
            EntryMode::Directory => "40000",
            EntryMode::Gitlink => "160000",
        }
    }

    /// Whether this entry is a regular-file blob (executable or not)
    pub fn is_blob(&self) -> bool {
        matches!(self, EntryMode::Regular | EntryMode::Executable)
    }
}
