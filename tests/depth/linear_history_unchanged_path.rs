use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn linear_history_unchanged_path(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");
    let tree = repo.tree_with_file("VERSION", &version);

    // Four commits, the tracked file never changes: root is generation 3
    let c1 = repo.commit(&tree, &[], "one");
    let c2 = repo.commit(&tree, &[&c1], "two");
    let c3 = repo.commit(&tree, &[&c2], "three");
    let c4 = repo.commit(&tree, &[&c3], "four");
    repo.set_branch("main", &c4);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("3\n");
}

#[rstest]
fn single_commit_has_depth_zero(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");
    let tree = repo.tree_with_file("VERSION", &version);
    let c1 = repo.commit(&tree, &[], "only");
    repo.set_branch("main", &c1);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("0\n");
}

#[rstest]
fn unrelated_files_do_not_affect_the_depth(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");

    // Another file churns on every commit; VERSION never changes
    let mut parent: Option<String> = None;
    for i in 0..3 {
        let churn = repo.blob(&format!("draft {i}\n"));
        let tree = repo.tree(&[("100644", "VERSION", &version), ("100644", "notes.txt", &churn)]);
        let parents: Vec<&str> = parent.iter().map(String::as_str).collect();
        parent = Some(repo.commit(&tree, &parents, &format!("commit {i}")));
    }
    repo.set_branch("main", parent.as_deref().unwrap());

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("2\n");
}
