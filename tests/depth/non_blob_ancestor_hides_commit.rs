use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn path_that_was_a_directory_hides_the_commit(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");

    // In the oldest commit, "config" is a directory; comparing content
    // identity with a directory is meaningless, so that commit is hidden
    // even though an entry named "config" exists
    let dir_inner = repo.tree_with_file("dummy", &version);
    let tree_with_dir = repo.tree(&[("40000", "config", &dir_inner)]);
    let tree_with_file = repo.tree_with_file("config", &version);

    let c1 = repo.commit(&tree_with_dir, &[], "config is a directory");
    let c2 = repo.commit(&tree_with_file, &[&c1], "config becomes a file");
    let c3 = repo.commit(&tree_with_file, &[&c2], "three");
    repo.set_branch("main", &c3);

    run_git_depth(repository_dir.path(), &["HEAD", "config"])
        .assert()
        .success()
        .stdout("1\n");
}

#[rstest]
fn path_that_was_a_symlink_hides_the_commit(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");

    // Same blob ID, but recorded as a symlink in the oldest commit
    let tree_link = repo.tree(&[("120000", "VERSION", &version)]);
    let tree_file = repo.tree(&[("100644", "VERSION", &version)]);

    let c1 = repo.commit(&tree_link, &[], "symlink");
    let c2 = repo.commit(&tree_file, &[&c1], "regular file");
    repo.set_branch("main", &c2);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("0\n");
}
