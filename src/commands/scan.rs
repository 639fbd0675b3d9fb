//! # scan 命令实现
//!
//! 只读扫描文件，逐行输出内容包含探测子串的路径。
//!
//! ## 功能
//! - 收集匹配模式的文件
//! - 路径写到 stdout（每行一个），统计信息写到 stderr
//! - 任一文件读取失败或 stdout 写入失败即中止，不输出完成统计
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `rewriter/scan.rs`, `utils/output.rs`

use crate::cli::scan::ScanArgs;
use crate::error::{Result, VendorfixError};
use crate::rewriter::{self, ContentProbe};
use crate::utils::output;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header(&format!("Scanning for '{}'", args.probe));

    let probe = ContentProbe::new(&args.probe)?;
    let files = super::collect_files(&args.selection)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.selection.pattern,
            args.selection.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Checking {} files", files.len()));

    let total = files.len();
    let stdout = io::stdout();
    let matched = write_matches(&mut stdout.lock(), files, &probe)?;

    output::print_done(&format!(
        "{} of {} files contain '{}'",
        matched,
        total,
        probe.needle()
    ));

    Ok(())
}

/// 逐行写出命中的路径，返回命中数量
///
/// 输出失败（例如管道另一端已关闭）视为写入错误，不会报告部分结果为成功。
fn write_matches<W: Write>(
    out: &mut W,
    files: Vec<PathBuf>,
    probe: &ContentProbe,
) -> Result<usize> {
    let mut matched = 0;

    for path in rewriter::scan(files, probe) {
        let path = path?;
        writeln!(out, "{}", path.display())
            .and_then(|_| out.flush())
            .map_err(|e| VendorfixError::write(Path::new("<stdout>"), e))?;
        matched += 1;
    }

    Ok(matched)
}
