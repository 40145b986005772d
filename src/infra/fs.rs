//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for writing generated files such as
//! reports and suite templates.
//!
//! 此模块提供写入生成文件（如报告和套件模板）的实用功能。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `contents` to `path`, creating missing parent directories first.
///
/// # Arguments
/// * `path` - Destination file path
/// * `contents` - Bytes to write
///
/// # Returns
/// A `Result` indicating success or failure
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
}
