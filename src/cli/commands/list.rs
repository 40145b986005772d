//! # List Command Module / 列表命令模块
//!
//! This module implements the `list` command, which prints the qualified
//! names a run would evaluate without running anything.
//!
//! 此模块实现 `list` 命令，它打印一次运行将要评估的限定名称，而不运行任何内容。

use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    core::{config, flatten::flatten, planner},
    infra::t,
    reporting::console::print_leaf_list,
};

/// Executes the list command.
///
/// # Arguments
/// * `config_path` - Path to the suite file
/// * `filter` - Optional substring a qualified name must contain
/// * `locale` - The language locale to use for messages
pub fn execute(config_path: &Path, filter: Option<&str>, locale: &str) -> Result<()> {
    let (_, tree) = config::load_suite(config_path)
        .with_context(|| t!("config_load_failed", locale = locale, path = config_path.display()).to_string())?;

    let plan = planner::plan_execution(flatten(&tree), filter, None, None)?;
    print_leaf_list(&plan.leaves, locale);
    Ok(())
}
