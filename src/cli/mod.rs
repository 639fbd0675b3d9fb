//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `scan`: 列出内容包含探测子串的文件（只读）
//! - `rewrite`: 补全 import 路径的扩展名（原地写回）
//!
//! 两个命令相互独立，典型用法是先 `scan` 检查，再 `rewrite`。
//! 不带任何参数运行时，使用 vexflow 目录的默认值。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scan, rewrite

pub mod rewrite;
pub mod scan;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 默认处理目录
pub const DEFAULT_INPUT: &str = "src/lib/third_party/vexflow";

/// 默认文件名模式
pub const DEFAULT_PATTERN: &str = "*.js";

/// vendorfix - 第三方 JavaScript 源码一次性维护工具
#[derive(Parser)]
#[command(name = "vendorfix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "One-off maintenance for vendored JavaScript sources", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List files whose content contains a probe string
    Scan(scan::ScanArgs),

    /// Rewrite named imports so module paths end with an explicit extension
    Rewrite(rewrite::RewriteArgs),
}

/// 文件选择参数（两个子命令共用）
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Directory (or single file) to process
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Glob pattern for file names (comma-separated for several)
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
