use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn immediate_change_yields_zero(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());

    // The direct parent already carries different content
    let old_tree = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let new_tree = repo.tree_with_file("VERSION", &repo.blob("2.0\n"));
    let c1 = repo.commit(&old_tree, &[], "old version");
    let c2 = repo.commit(&new_tree, &[&c1], "bump version");
    repo.set_branch("main", &c2);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("0\n");
}

#[rstest]
fn change_mid_history_stops_the_walk_there(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());

    let old_tree = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let new_tree = repo.tree_with_file("VERSION", &repo.blob("2.0\n"));
    let c1 = repo.commit(&old_tree, &[], "one");
    let c2 = repo.commit(&old_tree, &[&c1], "two");
    let c3 = repo.commit(&new_tree, &[&c2], "bump");
    let c4 = repo.commit(&new_tree, &[&c3], "four");
    let c5 = repo.commit(&new_tree, &[&c4], "five");
    repo.set_branch("main", &c5);

    // c3 introduced the current content, two generations below HEAD
    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("2\n");
}
