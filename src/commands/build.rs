use anyhow::Result;
use clap::Args as ClapArgs;
use std::path::PathBuf;
use vend::{
    output::{CliOutput, Output, OutputConfig},
    pipeline::BuildPipeline,
};

#[derive(ClapArgs)]
#[command(about = "Run a vendored dependency's configure/compile/install build")]
#[command(long_about = r#"
Runs the native build of a vendored source tree as three external stages
executed strictly in sequence: configure, compile, install. The pipeline
halts at the first stage that exits non-zero; later stages are not
started. Each stage's output is streamed to the console as it is
produced.

The defaults drive a cmake/make build. Each stage command can be replaced
with --configure-cmd, --compile-cmd, and --install-cmd; commands run
through `sh -c` with the build directory as working directory.
"#)]
pub struct Args {
    #[arg(help = "Path to the source tree, relative to the build directory")]
    source_dir: PathBuf,

    #[arg(help = "Build directory (created if missing)")]
    build_dir: PathBuf,

    #[arg(
        short = 'j',
        long = "jobs",
        default_value_t = 4,
        help = "Parallel jobs for the compile stage"
    )]
    jobs: usize,

    #[arg(long = "sudo-install", help = "Run the install stage through sudo")]
    sudo_install: bool,

    #[arg(long = "configure-cmd", help = "Replace the configure stage command")]
    configure_cmd: Option<String>,

    #[arg(long = "compile-cmd", help = "Replace the compile stage command")]
    compile_cmd: Option<String>,

    #[arg(long = "install-cmd", help = "Replace the install stage command")]
    install_cmd: Option<String>,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Operate quietly; suppress stage output"
    )]
    quiet: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Be verbose; show stage commands as they run"
    )]
    verbose: bool,
}

pub fn run(args: Args) -> Result<()> {
    let config = OutputConfig::new(args.quiet, args.verbose);
    let mut output = CliOutput::new(config);

    run_build(&args, &mut output)
}

fn run_build(args: &Args, output: &mut dyn Output) -> Result<()> {
    let mut pipeline =
        BuildPipeline::cmake(&args.source_dir, &args.build_dir, args.jobs, args.sudo_install);

    if let Some(cmd) = &args.configure_cmd {
        pipeline.configure = cmd.clone();
    }
    if let Some(cmd) = &args.compile_cmd {
        pipeline.compile = cmd.clone();
    }
    if let Some(cmd) = &args.install_cmd {
        pipeline.install = cmd.clone();
    }

    pipeline.run(output)?;

    output.result(&format!(
        "Build finished in '{}'",
        args.build_dir.display()
    ));

    Ok(())
}
