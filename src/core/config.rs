//! # Configuration Module / 配置模块
//!
//! Suite files describe a test tree in TOML, together with the runner
//! settings used to evaluate it. Every test is a shell command; groups nest
//! to any depth and their names become segments of the qualified names.
//!
//! 套件文件以 TOML 描述一棵测试树，以及用于评估它的运行器设置。
//! 每个测试都是一条 shell 命令；分组可以任意嵌套，其名称成为限定名称的片段。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{
    execution::{ExecutionMode, default_jobs},
    flatten::join_name,
    tree::{self, TestTree},
};
use crate::infra::command::ShellCommand;

/// The default suite file name looked up by the CLI.
pub const DEFAULT_SUITE_FILE: &str = "TreeRunner.toml";

/// A single command test.
/// 单个命令测试。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandCase {
    /// The label of the test within its group / 测试在其分组中的标签
    pub name: String,
    /// The command line to run; exit status 0 passes.
    /// 要运行的命令行；退出码 0 表示通过。
    pub command: String,
    /// Directory to run the command in, relative to the suite file.
    /// 运行命令的目录，相对于套件文件。
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

/// A group of tests and nested groups.
/// 测试和嵌套分组的集合。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Optional label; an unnamed group adds no name segment.
    /// 可选标签；未命名的分组不添加名称片段。
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<CommandCase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupConfig>,
}

/// A complete suite file.
/// 完整的套件文件。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Falls back to the system locale if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则回退到系统语言。
    #[serde(default)]
    pub language: Option<String>,
    /// Evaluate leaves concurrently / 并发评估叶子
    #[serde(default)]
    pub parallel: bool,
    /// Worker count for parallel runs; available parallelism when absent.
    /// 并行运行的工作线程数；缺省时使用可用并行度。
    #[serde(default)]
    pub jobs: Option<usize>,
    /// Print a line before each test starts / 在每个测试开始前打印一行
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub suite: GroupConfig,
}

impl SuiteConfig {
    /// The execution mode the file asks for.
    pub fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel {
                jobs: self.jobs.unwrap_or_else(default_jobs),
            }
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Checks names and commands throughout the suite.
    pub fn validate(&self) -> Result<()> {
        validate_group(&self.suite, "")
    }

    /// Builds the test tree. Relative working directories are resolved
    /// against `base_dir`, which is also the default working directory.
    pub fn to_tree(&self, base_dir: &Path) -> TestTree {
        group_to_tree(&self.suite, base_dir)
    }
}

fn validate_group(group: &GroupConfig, path: &str) -> Result<()> {
    let path = match &group.name {
        Some(name) if name.trim().is_empty() => bail!("Group under '{path}' has an empty name."),
        Some(name) => join_name(path, name),
        None => path.to_string(),
    };
    for case in &group.tests {
        if case.name.trim().is_empty() {
            bail!("Test under '{path}' has an empty name.");
        }
        if case.command.trim().is_empty() {
            bail!("Test '{}' has an empty command.", join_name(&path, &case.name));
        }
    }
    group.groups.iter().try_for_each(|child| validate_group(child, &path))
}

fn group_to_tree(group: &GroupConfig, base_dir: &Path) -> TestTree {
    let children = group
        .tests
        .iter()
        .map(|case| {
            let working_dir = match &case.working_dir {
                Some(dir) => base_dir.join(dir),
                None => base_dir.to_path_buf(),
            };
            let command = ShellCommand::new(case.command.clone()).in_dir(working_dir);
            tree::label(case.name.clone(), tree::case(move || command.run()))
        })
        .chain(group.groups.iter().map(|child| group_to_tree(child, base_dir)));

    let list = tree::list(children);
    match &group.name {
        Some(name) => tree::label(name.clone(), list),
        None => list,
    }
}

/// Parses a suite file from TOML text.
pub fn parse_suite_config(content: &str) -> Result<SuiteConfig> {
    let config: SuiteConfig = toml::from_str(content).context("Failed to parse suite file")?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a suite file.
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read suite file: {}", path.display()))?;
    parse_suite_config(&content).with_context(|| format!("Invalid suite file: {}", path.display()))
}

/// Loads a suite file and builds its tree, resolving working directories
/// against the file's own directory.
pub fn load_suite(path: &Path) -> Result<(SuiteConfig, TestTree)> {
    let config = load_suite_config(path)?;
    let base_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let tree = config.to_tree(&base_dir);
    Ok((config, tree))
}
