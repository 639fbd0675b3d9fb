//! # 只读扫描
//!
//! 逐个读取文件，产出内容命中探测器的路径。
//!
//! ## 行为
//! - 惰性：每次 `next()` 才读取下一个文件
//! - 读取失败时产出错误并终止，之后不再读取任何文件
//! - 不修改任何文件
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `rewriter/probe.rs`

use super::probe::ContentProbe;
use crate::error::{Result, VendorfixError};

use std::fs;
use std::iter::FusedIterator;
use std::path::PathBuf;

/// 扫描迭代器
pub struct Scan<'p, I> {
    files: I,
    probe: &'p ContentProbe,
    failed: bool,
}

/// 扫描文件集合
pub fn scan<I>(files: I, probe: &ContentProbe) -> Scan<'_, I::IntoIter>
where
    I: IntoIterator<Item = PathBuf>,
{
    Scan {
        files: files.into_iter(),
        probe,
        failed: false,
    }
}

impl<I> Iterator for Scan<'_, I>
where
    I: Iterator<Item = PathBuf>,
{
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for path in self.files.by_ref() {
            match fs::read_to_string(&path) {
                Ok(content) if self.probe.matches(&content) => return Some(Ok(path)),
                Ok(_) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(VendorfixError::read(&path, e)));
                }
            }
        }

        None
    }
}

impl<I> FusedIterator for Scan<'_, I> where I: Iterator<Item = PathBuf> {}
