use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn hidden_branch_blocks_deeper_history(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let current = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let other = repo.tree_with_file("VERSION", &repo.blob("0.9\n"));

    //   old (1.0)          fresh (1.0)
    //     |                   |
    //   detour (0.9)          |
    //       \                /
    //        \              /
    //         merge (1.0, HEAD)
    //
    // old carries the current content, but it is only reachable through the
    // hidden detour commit, so the walk must never discover it
    let old = repo.commit(&current, &[], "old");
    let detour = repo.commit(&other, &[&old], "detour");
    let fresh = repo.commit(&current, &[], "fresh");
    let merge = repo.commit(&current, &[&detour, &fresh], "merge");
    repo.set_branch("main", &merge);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("1\n");
}

#[rstest]
fn deep_history_behind_a_visible_branch_still_counts(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let current = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let other = repo.tree_with_file("VERSION", &repo.blob("0.9\n"));

    // One merge parent is hidden, the other continues three generations
    let deep1 = repo.commit(&current, &[], "deep 1");
    let deep2 = repo.commit(&current, &[&deep1], "deep 2");
    let deep3 = repo.commit(&current, &[&deep2], "deep 3");
    let hidden = repo.commit(&other, &[], "hidden side");
    let merge = repo.commit(&current, &[&hidden, &deep3], "merge");
    repo.set_branch("main", &merge);

    run_git_depth(repository_dir.path(), &["HEAD", "VERSION"])
        .assert()
        .success()
        .stdout("3\n");
}
