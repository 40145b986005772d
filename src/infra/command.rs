//! # Command Execution Module / 命令执行模块
//!
//! Runs shell-style command lines as test bodies. The command line is
//! expanded (`~`, `$VAR`) and split into words the way a shell would, then
//! executed with its output captured.
//!
//! 将 shell 风格的命令行作为测试体运行。命令行先被展开（`~`、`$VAR`）
//! 并像 shell 那样拆分为单词，然后执行并捕获其输出。

use anyhow::{Context, Result, anyhow, bail};
use std::panic;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Once;

use crate::core::models::{CaseResult, Fault};

static QUIET_FAULTS: Once = Once::new();

/// Keeps the panic hook from printing panics whose payload is a [`Fault`].
/// Every other panic still reaches the previously installed hook.
///
/// 使 panic 钩子不再打印负载为 [`Fault`] 的 panic。其他 panic 仍交给之前安装的钩子。
pub fn silence_fault_panics() {
    QUIET_FAULTS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if info.payload().downcast_ref::<Fault>().is_none() {
                previous(info);
            }
        }));
    });
}

/// How many trailing output lines a failure message keeps.
const FAILURE_TAIL_LINES: usize = 5;

/// A command line to run as a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// The unexpanded command line / 未展开的命令行
    pub line: String,
    /// Directory to run in; the current directory when `None`.
    /// 运行目录；为 `None` 时使用当前目录。
    pub working_dir: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            working_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Expands and splits the command line into program and arguments.
    pub fn parse(&self) -> Result<(String, Vec<String>)> {
        let expanded = shellexpand::full(&self.line)
            .with_context(|| format!("Failed to expand command: {}", self.line))?
            .to_string();

        let mut parts = shlex::split(&expanded)
            .ok_or_else(|| anyhow!("Failed to parse command: {}", expanded))?
            .into_iter();

        let Some(program) = parts.next() else {
            bail!("Empty command after parsing.");
        };
        Ok((program, parts.collect()))
    }

    /// Spawns the command and waits for it, capturing stdout and stderr.
    pub fn output(&self) -> Result<Output> {
        let (program, args) = self.parse()?;
        let mut cmd = Command::new(&program);
        cmd.args(&args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.output()
            .with_context(|| format!("Failed to spawn '{}'", self.line))
    }

    /// Runs the command as a test body.
    ///
    /// A zero exit status passes and any other status fails with the tail of
    /// the command's output. A command that cannot be parsed or spawned
    /// panics with a [`Fault`] payload, which the classifier reports as an
    /// unexpected fault. That panic is not printed by the panic hook.
    pub fn run(&self) -> CaseResult {
        let output = match self.output() {
            Ok(output) => output,
            Err(e) => {
                silence_fault_panics();
                panic::panic_any(Fault::new(format!("{e:#}")))
            }
        };

        if output.status.success() {
            Ok(())
        } else {
            Err(failure_message(&output))
        }
    }
}

/// Builds the failure message for a command that exited unsuccessfully:
/// its exit status followed by the last lines of stderr, or of stdout when
/// stderr is empty.
pub fn failure_message(output: &Output) -> String {
    let status = match output.status.code() {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    };

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stderr.trim().is_empty() { stdout } else { stderr };

    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let tail = &lines[lines.len().saturating_sub(FAILURE_TAIL_LINES)..];

    if tail.is_empty() {
        status
    } else {
        format!("{status}: {}", tail.join(" | "))
    }
}
