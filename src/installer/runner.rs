use std::fmt;
use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// A program and its arguments, executed without a shell unless built with [`CommandSpec::shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn shell(script: &str) -> Self {
        Self::new("sh", ["-c", script])
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run and stream output to the terminal. `Ok(false)` means a non-zero exit.
    async fn run(&self, command: &CommandSpec) -> io::Result<bool>;

    /// Run silently, only reporting whether it succeeded.
    async fn probe(&self, command: &CommandSpec) -> io::Result<bool>;
}

pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> io::Result<bool> {
        println!("\n┌─ {command}");
        println!("│");

        let mut child = TokioCommand::new(&command.program)
            .args(&command.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("Failed to capture stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| io::Error::other("Failed to capture stderr"))?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let stdout_handle = tokio::spawn(async move {
            while let Ok(Some(line)) = stdout_reader.next_line().await {
                println!("│ {line}");
            }
        });

        let stderr_handle = tokio::spawn(async move {
            while let Ok(Some(line)) = stderr_reader.next_line().await {
                eprintln!("│ {line}");
            }
        });

        let status = child.wait().await?;
        stdout_handle.await.map_err(io::Error::other)?;
        stderr_handle.await.map_err(io::Error::other)?;

        println!("│");
        match status.code() {
            Some(0) => println!("└─ Command completed successfully"),
            Some(code) => println!("└─ Command failed with exit code {code}"),
            None => println!("└─ Command was terminated by signal"),
        }

        Ok(status.success())
    }

    async fn probe(&self, command: &CommandSpec) -> io::Result<bool> {
        let status = TokioCommand::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        debug!(%command, success = status.success(), "probe finished");
        Ok(status.success())
    }
}
