//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command for the Tree Runner CLI,
//! which loads a suite file, plans and evaluates its tests, and writes the
//! requested reports.
//!
//! 此模块实现了 Tree Runner CLI 的 `run` 命令，
//! 它加载套件文件，计划并评估其中的测试，并写出所需的报告。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;

use crate::{
    core::{
        config,
        execution::{ExecutionMode, default_jobs},
        flatten::flatten,
        planner,
        runner::run_leaves_with_mode,
    },
    infra::t,
    reporting::{
        console::{ConsoleNotifier, print_problem_details, print_verdict},
        html::generate_html_report,
        json::generate_json_report,
    },
};

/// Options collected from the command line for a single run.
/// Flags given here take precedence over the suite file.
///
/// 从命令行收集的单次运行选项。此处给出的标志优先于套件文件。
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to the suite file / 套件文件路径
    pub config: PathBuf,
    /// Optional name substring filter / 可选的名称子串过滤器
    pub filter: Option<String>,
    /// Force parallel evaluation / 强制并行评估
    pub parallel: bool,
    /// Worker count for parallel evaluation / 并行评估的工作线程数
    pub jobs: Option<usize>,
    /// Print a line before each test / 在每个测试前打印一行
    pub verbose: bool,
    /// Color the notification lines / 为通知行着色
    pub color: bool,
    /// Total number of distributed runners (for CI) / 分布式运行器总数（用于 CI）
    pub total_runners: Option<usize>,
    /// Index of this runner (for CI) / 此运行器的索引（用于 CI）
    pub runner_index: Option<usize>,
    /// Optional path for the HTML report / HTML 报告的可选路径
    pub html: Option<PathBuf>,
    /// Optional path for the JSON report / JSON 报告的可选路径
    pub json: Option<PathBuf>,
}

/// Executes the run command with the provided options.
///
/// # Arguments
/// * `options` - The parsed command line options
/// * `explicit_language` - The `--lang` value, if one was given
/// * `fallback_language` - The language to use when neither `--lang` nor the suite file sets one
///
/// # Returns
/// The process exit status computed from the aggregate counts.
pub async fn execute(
    options: RunOptions,
    explicit_language: Option<&str>,
    fallback_language: &str,
) -> Result<i32> {
    let (suite, tree) = config::load_suite(&options.config).with_context(|| {
        t!("config_load_failed", locale = fallback_language, path = options.config.display()).to_string()
    })?;

    let locale = explicit_language
        .or(suite.language.as_deref())
        .unwrap_or(fallback_language)
        .to_string();
    rust_i18n::set_locale(&locale);

    println!(
        "{}",
        t!("loading_suite", locale = locale, path = options.config.display())
    );

    let plan = planner::plan_execution(
        flatten(&tree),
        options.filter.as_deref(),
        options.total_runners,
        options.runner_index,
    )?;

    if plan.filtered_count > 0 {
        println!(
            "{}",
            t!(
                "filtered_tests",
                locale = locale,
                filtered = plan.filtered_count,
                total = plan.leaves.len()
            )
            .cyan()
        );
    }

    if let (true, Some(total), Some(index)) =
        (plan.is_distributed, options.total_runners, options.runner_index)
    {
        println!(
            "{}",
            t!(
                "running_as_split_runner",
                locale = locale,
                index = index + 1,
                total = total,
                count = plan.leaves.len()
            )
            .bold()
        );
    }

    let mode = match suite.mode() {
        _ if options.parallel => ExecutionMode::Parallel {
            jobs: options.jobs.or(suite.jobs).unwrap_or_else(default_jobs),
        },
        ExecutionMode::Parallel { jobs } => ExecutionMode::Parallel {
            jobs: options.jobs.unwrap_or(jobs),
        },
        ExecutionMode::Sequential => ExecutionMode::Sequential,
    };

    match mode {
        ExecutionMode::Sequential => {
            println!("{}", t!("running_sequential", locale = locale).bold())
        }
        ExecutionMode::Parallel { jobs } => {
            println!("{}", t!("running_parallel", locale = locale, jobs = jobs).bold())
        }
    }

    if plan.leaves.is_empty() {
        println!("{}", t!("no_tests_to_run", locale = locale).green());
    }

    let notifier = ConsoleNotifier::stdout()
        .with_color(options.color)
        .with_verbose(options.verbose || suite.verbose);
    let run = run_leaves_with_mode(plan.leaves, notifier, mode).await?;

    print_problem_details(&run, &locale);

    if let Some(report_path) = &options.html {
        println!(
            "\n{}",
            t!("generating_html_report", locale = locale, path = report_path.display())
        );
        if let Err(e) = generate_html_report(&run, report_path, &locale) {
            eprintln!("{} {:#}", t!("report_failed", locale = locale).red(), e);
        }
    }

    if let Some(report_path) = &options.json {
        println!(
            "\n{}",
            t!("generating_json_report", locale = locale, path = report_path.display())
        );
        if let Err(e) = generate_json_report(&run, report_path) {
            eprintln!("{} {:#}", t!("report_failed", locale = locale).red(), e);
        }
    }

    print_verdict(&run.counts, &locale);
    Ok(run.exit_code())
}
