//! # rewrite 命令实现
//!
//! 补全 import 路径的扩展名并原地写回。
//!
//! ## 功能
//! - 收集匹配模式的文件
//! - 顺序（默认）或并行改写
//! - 支持跳过无变化写回与 dry-run
//! - 输出每个改动文件和汇总统计
//!
//! ## 依赖关系
//! - 使用 `cli/rewrite.rs` 定义的参数
//! - 使用 `batch/`, `rewriter/`
//! - 使用 `utils/output.rs`

use crate::batch::BatchRunner;
use crate::cli::rewrite::RewriteArgs;
use crate::error::Result;
use crate::rewriter::{self, FileOutcome, ImportRule, RewriteSummary, WritePolicy};
use crate::utils::output;

/// 执行 rewrite 命令
pub fn execute(args: RewriteArgs) -> Result<()> {
    let rule = ImportRule::new(&args.suffix, &args.closing)?;
    output::print_header(&format!("Rewriting imports to end with '{}'", rule.suffix()));

    let policy = write_policy(&args);
    let files = super::collect_files(&args.selection)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.selection.pattern,
            args.selection.input.display()
        ));
        return Ok(());
    }

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Found {} files, using {} worker(s)",
        files.len(),
        runner.jobs()
    ));
    if policy == WritePolicy::DryRun {
        output::print_info("Dry run: no files will be written");
    }

    let reports = rewriter::rewrite_all(&files, &rule, policy, &runner)?;

    for report in &reports {
        let path = report.path.display().to_string();
        match report.outcome {
            FileOutcome::Rewritten { fixed } => {
                output::print_rewrite(&path, &format!("{} import(s) fixed", fixed));
            }
            FileOutcome::WouldChange { fixed } => {
                output::print_skip(&format!("{} ({} import(s) to fix)", path, fixed));
            }
            FileOutcome::Unchanged { .. } => {}
        }
    }

    let summary = RewriteSummary::from_reports(&reports);
    output::print_separator();

    if policy == WritePolicy::DryRun {
        output::print_success(&format!(
            "Dry run complete: {} of {} files would change ({} imports)",
            summary.would_change,
            summary.total(),
            summary.fixed_imports
        ));
    } else {
        output::print_success(&format!(
            "Rewrite complete: {} rewritten, {} unchanged ({} imports fixed, {} files written)",
            summary.rewritten, summary.unchanged, summary.fixed_imports, summary.written
        ));
    }

    Ok(())
}

fn write_policy(args: &RewriteArgs) -> WritePolicy {
    if args.dry_run {
        WritePolicy::DryRun
    } else if args.skip_unchanged {
        WritePolicy::SkipUnchanged
    } else {
        WritePolicy::Always
    }
}
