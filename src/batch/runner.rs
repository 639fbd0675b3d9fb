//! # 批量执行器
//!
//! 顺序或并行执行逐文件任务，遇到第一个错误即中止。
//!
//! ## 功能
//! - `jobs == 1`：严格按文件顺序执行，失败文件之后的文件不会被处理
//! - `jobs != 1`：基于 rayon 的并行迭代，返回遇到的第一个错误并停止派发
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `rewriter/rewrite.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{Result, VendorfixError};
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 每个 CPU 一个线程）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 处理文件列表，返回与输入顺序一致的结果
    pub fn try_run<T, F>(&self, files: &[PathBuf], processor: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Path) -> Result<T> + Sync + Send,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(files.len() as u64, "Processing")
        } else {
            ProgressBar::hidden()
        };

        let results = if self.jobs <= 1 {
            files
                .iter()
                .map(|file| {
                    let result = processor(file.as_path());
                    pb.inc(1);
                    result
                })
                .collect::<Result<Vec<T>>>()
        } else {
            // 配置 rayon 线程池
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .map_err(|e| {
                    VendorfixError::InvalidArgument(format!("Failed to build thread pool: {}", e))
                })?;

            pool.install(|| {
                files
                    .par_iter()
                    .map(|file| {
                        let result = processor(file.as_path());
                        pb.inc(1);
                        result
                    })
                    .collect::<Result<Vec<T>>>()
            })
        };

        pb.finish_and_clear();
        results
    }
}
