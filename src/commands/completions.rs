/// Shell completion generation for vend
use anyhow::Result;
use clap::Args as ClapArgs;
use clap_complete::{generate, Shell};
use std::io;

#[derive(ClapArgs)]
#[command(about = "Generate shell completion scripts")]
pub struct Args {
    #[arg(value_enum, help = "Shell to generate completions for")]
    shell: Shell,
}

pub fn run(args: Args, cmd: &mut clap::Command) -> Result<()> {
    generate(args.shell, cmd, "vend", &mut io::stdout());
    Ok(())
}
