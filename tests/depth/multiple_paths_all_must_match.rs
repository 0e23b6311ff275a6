use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn multiple_paths_all_must_match(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let major = repo.blob("2\n");
    let minor_old = repo.blob("6\n");
    let minor_new = repo.blob("7\n");

    // MAJOR never changes; MINOR changes one generation below HEAD's parent
    let tree_old = repo.tree(&[("100644", "MAJOR", &major), ("100644", "MINOR", &minor_old)]);
    let tree_new = repo.tree(&[("100644", "MAJOR", &major), ("100644", "MINOR", &minor_new)]);
    let c1 = repo.commit(&tree_old, &[], "one");
    let c2 = repo.commit(&tree_new, &[&c1], "bump minor");
    let c3 = repo.commit(&tree_new, &[&c2], "three");
    repo.set_branch("main", &c3);

    // Tracking MAJOR alone reaches the root
    run_git_depth(repository_dir.path(), &["HEAD", "MAJOR"])
        .assert()
        .success()
        .stdout("2\n");

    // Tracking both stops where MINOR changed
    run_git_depth(repository_dir.path(), &["HEAD", "MAJOR", "MINOR"])
        .assert()
        .success()
        .stdout("1\n");
}

#[rstest]
fn nested_paths_are_tracked_through_subtrees(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let version = repo.blob("1.0\n");

    // doc/VERSION stays identical while the subtree around it churns
    let mut parent: Option<String> = None;
    for i in 0..3 {
        let extra = repo.blob(&format!("page {i}\n"));
        let doc_tree = repo.tree(&[("100644", "VERSION", &version), ("100644", "index.md", &extra)]);
        let root_tree = repo.tree(&[("40000", "doc", &doc_tree)]);
        let parents: Vec<&str> = parent.iter().map(String::as_str).collect();
        parent = Some(repo.commit(&root_tree, &parents, &format!("commit {i}")));
    }
    repo.set_branch("main", parent.as_deref().unwrap());

    run_git_depth(repository_dir.path(), &["HEAD", "doc/VERSION"])
        .assert()
        .success()
        .stdout("2\n");
}
