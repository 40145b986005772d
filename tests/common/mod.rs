// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::{Result, bail};
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};
use tree_runner::core::check::{ensure_eq, fail};
use tree_runner::core::models::Fault;
use tree_runner::core::notify::Notifier;
use tree_runner::core::summary::Counts;
use tree_runner::core::tree::{TestTree, case, label, list};

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    BeforeRun(String),
    Passed(String),
    Failed(String, String),
    Exception(String, String),
    Summary(Counts),
}

impl Event {
    pub fn name(&self) -> Option<&str> {
        match self {
            Event::BeforeRun(name)
            | Event::Passed(name)
            | Event::Failed(name, _)
            | Event::Exception(name, _) => Some(name),
            Event::Summary(_) => None,
        }
    }
}

/// A notifier that records every event, optionally refusing to start a
/// test with a given name.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    pub reject: Option<String>,
}

impl Recorder {
    pub fn rejecting(name: &str) -> Self {
        Self {
            events: Vec::new(),
            reject: Some(name.to_string()),
        }
    }

    /// Events other than `BeforeRun` and `Summary`.
    pub fn results(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| !matches!(e, Event::BeforeRun(_) | Event::Summary(_)))
            .collect()
    }
}

impl Notifier for Recorder {
    fn before_run(&mut self, name: &str) -> Result<()> {
        if self.reject.as_deref() == Some(name) {
            bail!("refusing to start {name}");
        }
        self.events.push(Event::BeforeRun(name.to_string()));
        Ok(())
    }

    fn on_passed(&mut self, name: &str) {
        self.events.push(Event::Passed(name.to_string()));
    }

    fn on_failed(&mut self, name: &str, message: &str) {
        self.events
            .push(Event::Failed(name.to_string(), message.to_string()));
    }

    fn on_exception(&mut self, name: &str, cause: &Fault) {
        self.events
            .push(Event::Exception(name.to_string(), cause.to_string()));
    }

    fn on_summary(&mut self, counts: &Counts) {
        self.events.push(Event::Summary(*counts));
    }
}

/// `List[Case(success), Case(failure "x≠y")]`
pub fn scenario_a() -> TestTree {
    list([case(|| Ok(())), case(|| fail("x≠y"))])
}

/// `Label("Suite", List[Label("t1", Case(panics)), Label("t2", Case(success))])`
pub fn scenario_b() -> TestTree {
    label(
        "Suite",
        list([
            label("t1", case(|| panic!("boom"))),
            label("t2", case(|| Ok(()))),
        ]),
    )
}

/// `count` labeled leaves; even indices pass, odd indices fail.
pub fn half_failing(count: usize) -> TestTree {
    list((0..count).map(|i| {
        label(
            format!("t{i}"),
            case(move || if i % 2 == 0 { Ok(()) } else { ensure_eq(0, i % 2) }),
        )
    }))
}

/// Writes a suite file into a fresh temporary directory.
pub fn write_suite(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("TreeRunner.toml");
    fs::write(&path, content).expect("Failed to write suite file");
    (temp_dir, path)
}
