//! # rewrite 子命令 CLI 定义
//!
//! 补全 `import { ... } from '<path>';` 中模块路径的扩展名
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rewrite.rs`

use super::SelectionArgs;
use crate::rewriter::rule::{DEFAULT_CLOSING, DEFAULT_SUFFIX};
use clap::Args;

/// rewrite 子命令参数
#[derive(Args, Debug)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Extension every imported module path must end with
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Text appended after the suffix when a path is fixed
    #[arg(long, default_value = DEFAULT_CLOSING)]
    pub closing: String,

    /// Number of parallel jobs (1 = sequential, 0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Do not write files whose content did not change
    #[arg(long, default_value_t = false)]
    pub skip_unchanged: bool,

    /// Report files that would change without writing anything
    #[arg(long, default_value_t = false, conflicts_with = "skip_unchanged")]
    pub dry_run: bool,
}
