//! # vendorfix - 第三方 JavaScript 源码维护工具
//!
//! 针对 vendored 的第三方库（默认 `src/lib/third_party/vexflow`）
//! 一次性运行的两个维护操作，统一成单一可执行文件。
//!
//! ## 子命令
//! - `scan`    - 列出内容包含探测子串的文件（只读）
//! - `rewrite` - 补全 import 语句中模块路径的扩展名（原地写回）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与批量执行)
//!   │     └── rewriter/  (探测、改写规则)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod rewriter;
mod utils;

use clap::Parser;
use cli::Cli;
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format_error(&e));
        std::process::exit(1);
    }
}

/// 展开错误链，I/O 错误的具体原因放在 source 中
fn format_error(e: &error::VendorfixError) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    msg
}
