use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use std::path::PathBuf;
use vend::{
    check_dependencies,
    git::GitCommand,
    manifest::{Manifest, MANIFEST_FILE},
    output::{CliOutput, Output, OutputConfig},
    vendor::fetch_subfolder,
};

#[derive(ClapArgs)]
#[command(about = "Fetch every dependency listed in the manifest")]
#[command(long_about = r#"
Reads a vend.toml manifest and runs a vendor-fetch for each listed
dependency, strictly in the order written. The run stops at the first
entry that fails. Entries whose destination already exists fail; remove
the destination first to re-vendor.
"#)]
pub struct Args {
    #[arg(
        short = 'm',
        long = "manifest",
        default_value = MANIFEST_FILE,
        help = "Path to the manifest file"
    )]
    manifest: PathBuf,

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
    let config = OutputConfig::new(args.quiet, args.verbose);
    let mut output = CliOutput::new(config);

    run_sync(&args, &mut output)
}

fn run_sync(args: &Args, output: &mut dyn Output) -> Result<()> {
    check_dependencies(&["git"])?;

    let manifest = Manifest::load(&args.manifest)?;

    if manifest.dependencies.is_empty() {
        output.warning(&format!(
            "no dependencies listed in '{}'",
            args.manifest.display()
        ));
        return Ok(());
    }

    let git = GitCommand::new(output.is_quiet());

    for entry in &manifest.dependencies {
        output.info(&format!("Fetching {}...", entry.label()));
        let request = entry.to_request();
        fetch_subfolder(&request, &git, output)
            .with_context(|| format!("fetching '{}'", entry.label()))?;
    }

    output.result(&format!(
        "Vendored {} dependencies",
        manifest.dependencies.len()
    ));

    Ok(())
}
