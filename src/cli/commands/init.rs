//! # Suite Initialization Module / 套件初始化模块
//!
//! This module implements the `init` command, which writes a new suite file.
//! Interactively it offers common command templates through a small wizard;
//! with `--non-interactive` it writes a default suite.
//!
//! 此模块实现 `init` 命令，用于写入新的套件文件。
//! 交互模式下通过一个小向导提供常用命令模板；使用 `--non-interactive` 时写入默认套件。
//!
//! ## Features / 功能特性
//!
//! - **Template Selection**: Pre-defined command tests for common cargo checks
//! - **Crate Detection**: The root group is named after the local crate
//! - **Overwrite Protection**: Confirmation prompts before overwriting an existing file
//!
//! - **模板选择**: 常用 cargo 检查的预定义命令测试
//! - **Crate 检测**: 根分组以本地 crate 命名
//! - **覆盖保护**: 覆盖现有文件前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, MultiSelect, theme::ColorfulTheme};
use serde::Deserialize;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use crate::core::config::{CommandCase, GroupConfig, SuiteConfig};
use crate::infra::{fs::write_file, t};

#[derive(Deserialize)]
struct Package {
    name: String,
}

#[derive(Deserialize)]
struct Manifest {
    package: Package,
}

/// Pre-defined command templates: (key, test name, command).
const TEMPLATES: &[(&str, &str, &str)] = &[
    ("build", "build", "cargo build --all-targets"),
    ("test", "test", "cargo test"),
    ("clippy", "clippy", "cargo clippy --all-targets -- -D warnings"),
    ("fmt", "fmt", "cargo fmt --all -- --check"),
];

fn command_case(name: &str, command: &str) -> CommandCase {
    CommandCase {
        name: name.to_string(),
        command: command.to_string(),
        working_dir: None,
    }
}

/// The suite written by `--non-interactive`.
pub fn default_suite(language: &str, root_name: Option<String>) -> SuiteConfig {
    SuiteConfig {
        language: Some(language.to_string()),
        parallel: false,
        jobs: None,
        verbose: false,
        suite: GroupConfig {
            name: root_name,
            tests: vec![command_case("toolchain", "cargo --version")],
            groups: vec![GroupConfig {
                name: Some("checks".to_string()),
                tests: TEMPLATES[..2]
                    .iter()
                    .map(|(_, name, command)| command_case(name, command))
                    .collect(),
                groups: vec![],
            }],
        },
    }
}

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path of the suite file to create
/// * `force` - Overwrite an existing file without asking
/// * `non_interactive` - Skip the wizard and write the default suite
/// * `language` - Language for prompts and for the `language` key of the new file
pub fn execute(output: &Path, force: bool, non_interactive: bool, language: &str) -> Result<()> {
    let interactive = !non_interactive && io::stdin().is_terminal();
    let theme = ColorfulTheme::default();

    if interactive {
        println!("\n{}", t!("init.wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init.wizard_description", locale = language));
    }

    if output.exists() && !force {
        if !interactive {
            println!(
                "{}",
                t!("init.file_exists", locale = language, path = output.display()).red()
            );
            println!("{}", t!("init.use_force", locale = language).yellow());
            return Ok(());
        }
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", locale = language, path = output.display()))
            .default(false)
            .interact()
            .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let root_name = detect_crate_name().ok();
    if let Some(name) = &root_name {
        println!(
            "{}",
            t!("init.detected_crate_name", locale = language, name = name.green())
        );
    }

    let suite = if interactive {
        run_wizard(&theme, language, root_name)?
    } else {
        default_suite(language, root_name)
    };

    write_suite(output, &suite, language)
}

fn run_wizard(theme: &ColorfulTheme, language: &str, root_name: Option<String>) -> Result<SuiteConfig> {
    let mut items: Vec<String> = TEMPLATES
        .iter()
        .map(|(key, _, command)| format!("{key}: {command}"))
        .collect();
    items.push(t!("init.template_custom_command", locale = language).to_string());

    let selections = MultiSelect::with_theme(theme)
        .with_prompt(t!("init.case_selection_prompt", locale = language))
        .items(&items)
        .interact()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    if selections.is_empty() {
        println!("{}", t!("init.no_cases_selected", locale = language).yellow());
        return Ok(default_suite(language, root_name));
    }

    let mut tests = Vec::with_capacity(selections.len());
    for i in selections {
        match TEMPLATES.get(i) {
            Some((_, name, command)) => tests.push(command_case(name, command)),
            None => {
                let command: String = Input::with_theme(theme)
                    .with_prompt(t!("init.custom_command_prompt", locale = language))
                    .interact_text()
                    .context(t!("init.user_confirmation_failed", locale = language).to_string())?;
                tests.push(command_case("custom-command", &command));
            }
        }
    }

    let parallel = Confirm::with_theme(theme)
        .with_prompt(t!("init.parallel_prompt", locale = language))
        .default(false)
        .interact()
        .context(t!("init.user_confirmation_failed", locale = language).to_string())?;

    Ok(SuiteConfig {
        language: Some(language.to_string()),
        parallel,
        jobs: None,
        verbose: false,
        suite: GroupConfig {
            name: root_name,
            tests,
            groups: vec![],
        },
    })
}

fn write_suite(path: &Path, suite: &SuiteConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(suite)
        .context(t!("init.serialize_failed", locale = language).to_string())?;

    write_file(path, toml_string)?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init.success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init.usage_hint", locale = language));

    Ok(())
}

/// Tries to detect the crate name from the local `Cargo.toml`.
fn detect_crate_name() -> Result<String> {
    let manifest_content =
        fs::read_to_string("Cargo.toml").context("Cargo.toml not found in the current directory")?;
    let manifest: Manifest =
        toml::from_str(&manifest_content).context("Failed to parse Cargo.toml")?;
    Ok(manifest.package.name)
}
