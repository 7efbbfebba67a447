use crate::updater::progress::GLOBAL_MP;
use anyhow::{Context, Result, bail};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// An external program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Display for ToolCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }

        Ok(())
    }
}

/// Runs external commands to completion. Any non-zero exit is an error.
pub trait CommandRunner {
    fn run(&mut self, command: &ToolCommand, cwd: &Path) -> Result<()>;
}

/// Spawns real processes, inheriting stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &ToolCommand, cwd: &Path) -> Result<()> {
        debug!("check_call `{}`", command);

        // Hide the spinners while the child owns the terminal.
        let status = GLOBAL_MP
            .suspend(|| {
                Command::new(&command.program)
                    .args(&command.args)
                    .current_dir(cwd)
                    .status()
            })
            .with_context(|| format!("Failed to execute {}", command.program))?;

        if !status.success() {
            bail!("`{}` exited with {}", command, status);
        }

        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    type Hook = Box<dyn FnMut(&ToolCommand, &Path) -> Result<()>>;

    /// Records every command instead of spawning it. The hook stands in for
    /// whatever the real tool would have done to the working directory.
    pub struct RecordingRunner {
        pub calls: Vec<ToolCommand>,
        hook: Hook,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::with_hook(|_, _| Ok(()))
        }

        pub fn with_hook(hook: impl FnMut(&ToolCommand, &Path) -> Result<()> + 'static) -> Self {
            Self {
                calls: Vec::new(),
                hook: Box::new(hook),
            }
        }

        pub fn command_lines(&self) -> Vec<String> {
            self.calls.iter().map(ToString::to_string).collect()
        }
    }

    impl Default for RecordingRunner {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, command: &ToolCommand, cwd: &Path) -> Result<()> {
            self.calls.push(command.clone());
            (self.hook)(command, cwd)
        }
    }
}
