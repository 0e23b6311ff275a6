use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use git_depth::areas::repository::Repository;
use git_depth::artifacts::branch::revision::Revision;
use git_depth::artifacts::core::{DepthError, GENERIC_FAILURE_EXIT_CODE};
use git_depth::artifacts::depth::depth_finder::DepthFinder;
use git_depth::artifacts::depth::snapshot::SnapshotResolver;
use git_depth::artifacts::depth::version_prefix::VersionPrefixBuilder;
use git_depth::artifacts::objects::commit::SlimCommit;
use git_depth::artifacts::objects::object_id::ObjectId;
use git_depth::artifacts::objects::object_type::ObjectType;
use git_depth::artifacts::walk::rev_list::RevList;
use is_terminal::IsTerminal;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "git-depth",
    version = "0.1.0",
    about = "Derive a build number from tracked-file stability in commit history",
    long_about = "git-depth reports how many commit-generations deep the tracked files' \
    current content extends unchanged into history. Because history only grows, the \
    reported depth is a monotonically increasing build number that needs no counter \
    stored anywhere outside the repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'c',
        long = "cat",
        help = "Prepend each tracked file's content, trailing whitespace stripped, as a version prefix"
    )]
    cat: bool,
    #[arg(index = 1, default_value = "HEAD", help = "The commit to measure from")]
    commit: String,
    #[arg(index = 2, help = "Tracked file paths whose stability defines the depth")]
    paths: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if !std::io::stderr().is_terminal() {
                colored::control::set_override(false);
            }
            eprintln!("{} {:#}", "error:".red(), err);

            let exit_code = err
                .downcast_ref::<DepthError>()
                .map(DepthError::exit_code)
                .unwrap_or(GENERIC_FAILURE_EXIT_CODE);
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let pwd = std::env::current_dir()?;
    let repository = Repository::discover(&pwd)?;

    let root_oid = Revision::try_parse(&cli.commit)?
        .resolve(&repository)?
        .with_context(|| format!("bad revision: {}", cli.commit))?;

    let object_type = repository
        .database()
        .get_object_type(&root_oid)
        .with_context(|| format!("object {} not found", root_oid.to_short_oid()))?;
    if object_type != ObjectType::Commit {
        return Err(DepthError::NotACommit.into());
    }

    let root = repository
        .database()
        .load_slim_commit(&root_oid)?
        .with_context(|| format!("unable to load commit {}", root_oid.to_short_oid()))?;

    let resolver = SnapshotResolver::new(
        |tree_oid: &ObjectId| repository.database().parse_object_as_tree(tree_oid),
        &cli.paths,
    );
    let root_snapshot = resolver.resolve_root(&root.tree_oid)?;

    let version_prefix = if cli.cat {
        VersionPrefixBuilder::new(|blob_oid: &ObjectId| {
            repository.database().parse_object_as_blob(blob_oid)
        })
        .build(&root_snapshot)?
    } else {
        String::new()
    };

    let walk = RevList::new(&repository, root.oid.clone()).into_iter()?;
    let finder = DepthFinder::new(|commit: &SlimCommit| resolver.resolve(&commit.tree_oid));
    let report = finder.find_depth(root.oid, &root_snapshot, walk)?;

    Ok(format!("{version_prefix}{}", report.depth))
}
