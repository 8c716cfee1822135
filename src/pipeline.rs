//! The native build pipeline: configure, compile, install.
//!
//! Three external commands run strictly in sequence inside the build
//! directory; the first non-zero exit halts the pipeline. Each child's
//! stdout and stderr are piped and forwarded to the console line-by-line
//! as the process produces them. Ordering between the two streams is
//! best-effort - the reader threads race.
//!
//! No timeout is enforced; a hung tool blocks the pipeline indefinitely.

use crate::output::Output;
use std::fmt;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// The three stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Configure,
    Compile,
    Install,
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStage::Configure => write!(f, "configure"),
            BuildStage::Compile => write!(f, "compile"),
            BuildStage::Install => write!(f, "install"),
        }
    }
}

/// Why a build run failed.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{stage} stage failed with exit code {code}")]
    StageFailed { stage: BuildStage, code: i32 },

    #[error("could not run {stage} stage: {detail}")]
    Spawn { stage: BuildStage, detail: String },

    #[error("filesystem error: {detail}")]
    Io { detail: String },
}

/// A configured build run against one vendored source tree.
///
/// Stage commands are shell command lines run through `sh -c` with the
/// build directory as working directory, so tests can substitute
/// arbitrary commands for cmake/make.
#[derive(Debug, Clone)]
pub struct BuildPipeline {
    pub build_dir: PathBuf,
    pub configure: String,
    pub compile: String,
    pub install: String,
}

impl BuildPipeline {
    /// Standard cmake/make pipeline for `source_dir`, built in `build_dir`.
    pub fn cmake(source_dir: &Path, build_dir: &Path, jobs: usize, sudo_install: bool) -> Self {
        let install = if sudo_install {
            "sudo make install".to_string()
        } else {
            "make install".to_string()
        };
        Self {
            build_dir: build_dir.to_path_buf(),
            configure: format!("cmake {}", source_dir.display()),
            compile: format!("make -j{jobs}"),
            install,
        }
    }

    fn command_for(&self, stage: BuildStage) -> &str {
        match stage {
            BuildStage::Configure => &self.configure,
            BuildStage::Compile => &self.compile,
            BuildStage::Install => &self.install,
        }
    }

    /// Run configure, compile, and install in order.
    ///
    /// A stage is only spawned if every earlier stage exited zero. There
    /// are no retries and no rollback of completed stages.
    pub fn run(&self, output: &mut dyn Output) -> Result<(), BuildError> {
        std::fs::create_dir_all(&self.build_dir).map_err(|e| BuildError::Io {
            detail: format!(
                "could not create build directory '{}': {e}",
                self.build_dir.display()
            ),
        })?;

        for stage in [BuildStage::Configure, BuildStage::Compile, BuildStage::Install] {
            let cmd = self.command_for(stage);
            output.step(&format!("Running {stage} stage: {cmd}"));
            run_stage(stage, cmd, &self.build_dir, output)?;
            output.step(&format!("{stage} stage succeeded"));
        }

        Ok(())
    }
}

/// Run one stage command, streaming its combined output.
///
/// Scoped-resource discipline: both pipe readers are joined and the exit
/// status collected on every path out of this function.
fn run_stage(
    stage: BuildStage,
    cmd: &str,
    build_dir: &Path,
    output: &mut dyn Output,
) -> Result<(), BuildError> {
    let mut command = Command::new("sh");
    command.args(["-c", cmd]);
    command.current_dir(build_dir);

    // Build tools must not inherit stdin - a child might block waiting
    // for input that will never come.
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|e| BuildError::Spawn {
        stage,
        detail: e.to_string(),
    })?;

    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let (tx, rx) = std::sync::mpsc::channel::<String>();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    // Read stdout and stderr on separate threads so neither pipe can fill
    // and stall the child while the other is being drained.
    let stdout_thread = std::thread::spawn(move || {
        if let Some(stdout) = stdout_handle {
            let reader = BufReader::new(stdout);
            for line in reader.lines().map_while(Result::ok) {
                tx_stdout.send(line).ok();
            }
        }
    });

    let stderr_thread = std::thread::spawn(move || {
        if let Some(stderr) = stderr_handle {
            let reader = BufReader::new(stderr);
            for line in reader.lines().map_while(Result::ok) {
                tx_stderr.send(line).ok();
            }
        }
    });

    // Forward lines as they arrive. The channel closes once both reader
    // threads finish, which happens when the child closes its pipes.
    for line in rx {
        output.info(&line);
    }

    stdout_thread.join().ok();
    stderr_thread.join().ok();

    let status = child.wait().map_err(|e| BuildError::Spawn {
        stage,
        detail: e.to_string(),
    })?;

    if !status.success() {
        return Err(BuildError::StageFailed {
            stage,
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}
