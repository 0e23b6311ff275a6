use crate::areas::database::Database;
use crate::areas::refs::Refs;
use std::path::Path;

/// Read-only handle on an existing Git repository
///
/// Discovered by walking upward from a starting directory until a `.git`
/// directory appears, like git itself does. Nothing here ever mutates
/// repository state; all resources are plain owned values released on drop,
/// on every exit path.
pub struct Repository {
    git_dir: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Discover the repository containing `start`
    pub fn discover(start: &Path) -> anyhow::Result<Self> {
        let start = start.canonicalize()?;

        for dir in start.ancestors() {
            let git_dir = dir.join(".git");
            if git_dir.is_dir() {
                return Ok(Self::open_git_dir(&git_dir));
            }
        }

        anyhow::bail!(
            "not a git repository (or any of the parent directories): {}",
            start.display()
        )
    }

    fn open_git_dir(git_dir: &Path) -> Self {
        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.to_path_buf().into_boxed_path());

        Repository {
            git_dir: git_dir.to_path_buf().into_boxed_path(),
            database,
            refs,
        }
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
