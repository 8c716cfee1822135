use anyhow::Result;
use clap::Args as ClapArgs;
use std::path::PathBuf;
use vend::{
    check_dependencies,
    git::GitCommand,
    output::{CliOutput, Output, OutputConfig},
    vendor::{fetch_subfolder, FetchRequest},
};

#[derive(ClapArgs)]
#[command(about = "Vendor one subfolder of a remote repository")]
#[command(long_about = r#"
Clones a repository into a temporary directory, optionally applies a
patch, and copies one subfolder into the destination path. The temporary
clone is removed whether the operation succeeds or fails.

When --tag is given the clone is restricted to that tag with a shallow
single-branch clone. Pass --checkout to do a full clone followed by an
explicit `git checkout` instead, which also accepts commit hashes.

The destination must not exist; an existing destination is never merged
or overwritten.
"#)]
pub struct Args {
    #[arg(help = "The repository URL to clone (HTTPS or SSH)")]
    url: String,

    #[arg(help = "Subfolder inside the repository to vendor")]
    subfolder: String,

    #[arg(help = "Destination path for the copied subfolder")]
    dest: PathBuf,

    #[arg(short = 't', long = "tag", help = "Tag or branch to vendor")]
    tag: Option<String>,

    #[arg(
        short = 'p',
        long = "patch",
        help = "Patch file to apply to the clone before copying"
    )]
    patch: Option<PathBuf>,

    #[arg(
        long = "checkout",
        help = "Full clone plus explicit checkout instead of a clone-time tag filter"
    )]
    checkout: bool,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Operate quietly; suppress progress reporting"
    )]
    quiet: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Be verbose; show detailed progress"
    )]
    verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    if args.checkout && args.tag.is_none() {
        anyhow::bail!("--checkout requires --tag.\nUse --tag to name the ref to check out.");
    }

    let config = OutputConfig::new(args.quiet, args.verbose);
    let mut output = CliOutput::new(config);

    run_fetch(&args, &mut output)
}

fn run_fetch(args: &Args, output: &mut dyn Output) -> Result<()> {
    check_dependencies(&["git"])?;

    let request = FetchRequest {
        url: args.url.clone(),
        subfolder: args.subfolder.clone(),
        dest: args.dest.clone(),
        tag: args.tag.clone(),
        patch: args.patch.clone(),
        explicit_checkout: args.checkout,
    };

    let git = GitCommand::new(output.is_quiet());
    fetch_subfolder(&request, &git, output)?;

    output.result(&format!(
        "Vendored '{}' into '{}'",
        args.subfolder,
        args.dest.display()
    ));

    Ok(())
}
