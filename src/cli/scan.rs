//! # scan 子命令 CLI 定义
//!
//! 列出内容包含探测子串的文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use super::SelectionArgs;
use crate::rewriter::probe::DEFAULT_PROBE;
use clap::Args;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Substring a file must contain to be listed
    #[arg(long, default_value = DEFAULT_PROBE)]
    pub probe: String,
}
