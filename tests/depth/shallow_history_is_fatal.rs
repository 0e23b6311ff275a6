use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn shallow_history_is_fatal(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let tree = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let c1 = repo.commit(&tree, &[], "one");
    let c2 = repo.commit(&tree, &[&c1], "two");
    let c3 = repo.commit(&tree, &[&c2], "three");
    repo.set_branch("main", &c3);

    // Drop c1's object, as a depth-2 shallow clone would: c1 stays pending
    // in the frontier when the walk runs out
    repo.delete_object(&c1);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("too shallow"));
}

#[rstest]
fn truncation_behind_a_content_change_is_harmless(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let old_tree = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let new_tree = repo.tree_with_file("VERSION", &repo.blob("2.0\n"));
    let c1 = repo.commit(&old_tree, &[], "one");
    let c2 = repo.commit(&old_tree, &[&c1], "two");
    let c3 = repo.commit(&new_tree, &[&c2], "bump");
    let c4 = repo.commit(&new_tree, &[&c3], "four");
    repo.set_branch("main", &c4);

    // c1 is gone, but it is only reachable through c2, which is hidden by
    // the content change at c3 and never enqueues its parents: the answer
    // is complete without c1
    repo.delete_object(&c1);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("1\n");
}
