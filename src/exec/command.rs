// src/exec/command.rs

//! Shell-command change processor.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use super::processor::{ChangeProcessor, ProcessFuture};

/// Runs a shell command on every trigger run.
///
/// stdout lines are logged at INFO and stderr lines at DEBUG. A non-zero exit
/// status is reported as an error.
#[derive(Debug, Clone)]
pub struct CommandProcessor {
    cmd: String,
    workdir: Option<PathBuf>,
}

impl CommandProcessor {
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            workdir: None,
        }
    }

    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// Run the command once and wait for it to exit.
    pub async fn run(&self) -> Result<()> {
        info!(cmd = %self.cmd, "starting command");

        // Build a shell command appropriate for the platform.
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.cmd);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.cmd);
            c
        };

        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning command '{}'", self.cmd))?;

        if let Some(stdout) = child.stdout.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    info!("stdout: {}", line);
                }
            });
        }

        // Always consume stderr so buffers don't fill.
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    debug!("stderr: {}", line);
                }
            });
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for command '{}'", self.cmd))?;

        let code = status.code().unwrap_or(-1);
        info!(
            cmd = %self.cmd,
            exit_code = code,
            success = status.success(),
            "command exited"
        );

        if !status.success() {
            bail!("command '{}' failed with exit code {}", self.cmd, code);
        }
        Ok(())
    }
}

impl ChangeProcessor for CommandProcessor {
    fn process(&self) -> ProcessFuture<'_> {
        Box::pin(self.run())
    }
}
