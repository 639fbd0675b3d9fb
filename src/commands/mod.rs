//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `rewriter/`, `utils/`
//! - 子模块: scan, rewrite

pub mod rewrite;
pub mod scan;

use crate::batch::FileCollector;
use crate::cli::{Commands, SelectionArgs};
use crate::error::Result;

use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Scan(args) => scan::execute(args),
        Commands::Rewrite(args) => rewrite::execute(args),
    }
}

/// 按选择参数收集文件
fn collect_files(selection: &SelectionArgs) -> Result<Vec<PathBuf>> {
    FileCollector::new(selection.input.clone())
        .with_pattern(&selection.pattern)
        .recursive(selection.recursive)
        .collect()
}
