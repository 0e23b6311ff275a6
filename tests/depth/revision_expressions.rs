use crate::common::command::{repository_dir, run_git_depth};
use crate::common::repo::FixtureRepo;
use assert_fs::TempDir;
use rstest::rstest;

/// Chain of four commits with an unchanged tracked file, main at the tip
fn chain_of_four(repo: &mut FixtureRepo) -> Vec<String> {
    let tree = repo.tree_with_file("VERSION", &repo.blob("1.0\n"));
    let c1 = repo.commit(&tree, &[], "one");
    let c2 = repo.commit(&tree, &[&c1], "two");
    let c3 = repo.commit(&tree, &[&c2], "three");
    let c4 = repo.commit(&tree, &[&c3], "four");
    repo.set_branch("main", &c4);
    vec![c1, c2, c3, c4]
}

#[rstest]
fn branch_name_resolves(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    chain_of_four(&mut repo);

    run_git_depth(repository_dir.path(), &["main", "VERSION"])
        .assert()
        .success()
        .stdout("3\n");
}

#[rstest]
fn head_alias_resolves(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    chain_of_four(&mut repo);

    run_git_depth(repository_dir.path(), &["@", "VERSION"])
        .assert()
        .success()
        .stdout("3\n");
}

#[rstest]
fn parent_suffix_measures_from_the_parent(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    chain_of_four(&mut repo);

    run_git_depth(repository_dir.path(), &["HEAD^", "VERSION"])
        .assert()
        .success()
        .stdout("2\n");
}

#[rstest]
fn ancestor_suffix_steps_generations(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    chain_of_four(&mut repo);

    run_git_depth(repository_dir.path(), &["main~2", "VERSION"])
        .assert()
        .success()
        .stdout("1\n");
}

#[rstest]
fn full_and_abbreviated_oids_resolve(repository_dir: TempDir) {
    let mut repo = FixtureRepo::init(repository_dir.path());
    let commits = chain_of_four(&mut repo);
    let tip = &commits[3];

    run_git_depth(repository_dir.path(), &[tip.as_str(), "VERSION"])
        .assert()
        .success()
        .stdout("3\n");

    run_git_depth(repository_dir.path(), &[&tip[..7], "VERSION"])
        .assert()
        .success()
        .stdout("3\n");
}
