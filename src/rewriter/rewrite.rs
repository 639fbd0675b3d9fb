//! # 原地改写
//!
//! 读取文件、应用 `ImportRule`、按写回策略写回。
//!
//! ## 行为
//! - 单个文件：先完整读取并在内存中替换，再一次性写回
//! - 替换或读取失败时该文件不会被写入
//! - 不做跨文件事务：失败前已写回的文件保留新内容
//!
//! ## 依赖关系
//! - 被 `commands/rewrite.rs` 调用
//! - 使用 `batch/runner.rs` 执行
//! - 使用 `rewriter/rule.rs`

use super::rule::ImportRule;
use crate::batch::BatchRunner;
use crate::error::{Result, VendorfixError};

use std::fs;
use std::path::{Path, PathBuf};

/// 写回策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// 无论内容是否变化都写回
    #[default]
    Always,
    /// 内容未变化时跳过写回
    SkipUnchanged,
    /// 只报告，不写回
    DryRun,
}

/// 单个文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 已改写并写回
    Rewritten { fixed: usize },
    /// 内容无变化（`written` 表示是否仍然写回了）
    Unchanged { written: bool },
    /// dry-run 下需要改写
    WouldChange { fixed: usize },
}

/// 单个文件报告
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// 改写统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// 已改写文件数
    pub rewritten: usize,
    /// 无变化文件数
    pub unchanged: usize,
    /// dry-run 下需要改写的文件数
    pub would_change: usize,
    /// 补全的 import 总数
    pub fixed_imports: usize,
    /// 实际写回磁盘的文件数
    pub written: usize,
}

impl RewriteSummary {
    /// 合并单个文件结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Rewritten { fixed } => {
                self.rewritten += 1;
                self.written += 1;
                self.fixed_imports += fixed;
            }
            FileOutcome::Unchanged { written } => {
                self.unchanged += 1;
                if written {
                    self.written += 1;
                }
            }
            FileOutcome::WouldChange { fixed } => {
                self.would_change += 1;
                self.fixed_imports += fixed;
            }
        }
    }

    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            summary.merge(report.outcome);
        }
        summary
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.rewritten + self.unchanged + self.would_change
    }
}

/// 改写单个文件
pub fn rewrite_file(path: &Path, rule: &ImportRule, policy: WritePolicy) -> Result<FileReport> {
    let contents = fs::read_to_string(path).map_err(|e| VendorfixError::read(path, e))?;
    let rewritten = rule.apply(&contents);

    let outcome = match (policy, rewritten.changed()) {
        (WritePolicy::DryRun, true) => FileOutcome::WouldChange {
            fixed: rewritten.fixed,
        },
        (WritePolicy::DryRun, false) | (WritePolicy::SkipUnchanged, false) => {
            FileOutcome::Unchanged { written: false }
        }
        (WritePolicy::Always, false) => {
            write_back(path, &rewritten.text)?;
            FileOutcome::Unchanged { written: true }
        }
        (WritePolicy::Always, true) | (WritePolicy::SkipUnchanged, true) => {
            write_back(path, &rewritten.text)?;
            FileOutcome::Rewritten {
                fixed: rewritten.fixed,
            }
        }
    };

    Ok(FileReport {
        path: path.to_path_buf(),
        outcome,
    })
}

/// 改写文件集合，遇到第一个错误即中止
pub fn rewrite_all(
    files: &[PathBuf],
    rule: &ImportRule,
    policy: WritePolicy,
    runner: &BatchRunner,
) -> Result<Vec<FileReport>> {
    runner.try_run(files, |path| rewrite_file(path, rule, policy))
}

fn write_back(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| VendorfixError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewriter::rule::{DEFAULT_CLOSING, DEFAULT_SUFFIX};
    use filetime::FileTime;
    use tempfile::TempDir;

    const BARE: &str = "import { Font } from '../common/font';\nimport { Glyph } from './glyph';\n";
    const FIXED: &str =
        "import { Font } from '../common/font.js';\nimport { Glyph } from './glyph.js';\n";
    const PLAIN: &str = "export const VERSION = '4.0.0';\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn rule() -> ImportRule {
        ImportRule::new(DEFAULT_SUFFIX, DEFAULT_CLOSING).unwrap()
    }

    fn runner() -> BatchRunner {
        BatchRunner::new(1).with_progress(false)
    }

    #[test]
    fn test_rewrite_file_fixes_imports() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "stave.js", BARE);

        let report = rewrite_file(&path, &rule(), WritePolicy::Always).unwrap();
        assert_eq!(report.outcome, FileOutcome::Rewritten { fixed: 2 });
        assert_eq!(fs::read_to_string(&path).unwrap(), FIXED);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "stave.js", FIXED);

        let report = rewrite_file(&path, &rule(), WritePolicy::Always).unwrap();
        assert_eq!(report.outcome, FileOutcome::Unchanged { written: true });
        assert_eq!(fs::read(&path).unwrap(), FIXED.as_bytes());
    }

    #[test]
    fn test_rewrite_all_non_interference() {
        let dir = TempDir::new().unwrap();
        let matching = write(&dir, "a.js", BARE);
        let plain = write(&dir, "b.js", PLAIN);

        let reports = rewrite_all(
            &[matching.clone(), plain.clone()],
            &rule(),
            WritePolicy::Always,
            &runner(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&matching).unwrap(), FIXED);
        assert_eq!(fs::read_to_string(&plain).unwrap(), PLAIN);

        let summary = RewriteSummary::from_reports(&reports);
        assert_eq!(summary.rewritten, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.fixed_imports, 2);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.js", BARE);

        let reports = rewrite_all(
            &[path.clone()],
            &rule(),
            WritePolicy::DryRun,
            &runner(),
        )
        .unwrap();

        assert_eq!(reports[0].outcome, FileOutcome::WouldChange { fixed: 2 });
        assert_eq!(RewriteSummary::from_reports(&reports).written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), BARE);
    }

    #[test]
    fn test_skip_unchanged_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "plain.js", PLAIN);

        // 把 mtime 拨回过去，任何写入都会刷新它
        let old = FileTime::from_unix_time(1_000_000_000, 0);
        filetime::set_file_mtime(&path, old).unwrap();

        let report = rewrite_file(&path, &rule(), WritePolicy::SkipUnchanged).unwrap();
        assert_eq!(report.outcome, FileOutcome::Unchanged { written: false });
        let mtime = FileTime::from_last_modification_time(&fs::metadata(&path).unwrap());
        assert_eq!(mtime, old);

        let report = rewrite_file(&path, &rule(), WritePolicy::Always).unwrap();
        assert_eq!(report.outcome, FileOutcome::Unchanged { written: true });
        let mtime = FileTime::from_last_modification_time(&fs::metadata(&path).unwrap());
        assert_ne!(mtime, old);
    }

    #[test]
    fn test_error_aborts_remaining_files() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.js", BARE);
        let deleted = write(&dir, "b.js", BARE);
        let last = write(&dir, "c.js", BARE);
        let files = vec![first.clone(), deleted.clone(), last.clone()];

        // 枚举之后、读取之前删除
        fs::remove_file(&deleted).unwrap();

        let err = rewrite_all(&files, &rule(), WritePolicy::Always, &runner())
            .unwrap_err();

        assert!(matches!(err, VendorfixError::FileReadError { .. }));
        assert_eq!(fs::read_to_string(&first).unwrap(), FIXED);
        assert_eq!(fs::read_to_string(&last).unwrap(), BARE);
    }

    #[test]
    fn test_parallel_rewrite_matches_sequential() {
        let dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..16)
            .map(|i| write(&dir, &format!("{:02}.js", i), if i % 2 == 0 { BARE } else { PLAIN }))
            .collect();

        let parallel = BatchRunner::new(4).with_progress(false);
        let reports =
            rewrite_all(&files, &rule(), WritePolicy::Always, &parallel).unwrap();

        let summary = RewriteSummary::from_reports(&reports);
        assert_eq!(summary.rewritten, 8);
        assert_eq!(summary.unchanged, 8);
        for (i, path) in files.iter().enumerate() {
            let expected = if i % 2 == 0 { FIXED } else { PLAIN };
            assert_eq!(fs::read_to_string(path).unwrap(), expected);
        }
    }
}
