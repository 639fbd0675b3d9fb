//! # 批量文本改写核心模块
//!
//! 对一组文件做只读探测 (scan) 或基于正则的 import 改写 (rewrite)。
//!
//! ## 功能
//! - `ContentProbe`: 子串探测，判断文件是否需要关注
//! - `ImportRule`: import 路径补全扩展名的替换规则
//! - `scan`: 惰性扫描，逐个产出命中的文件路径
//! - `rewrite_all`: 逐文件读取、替换、写回
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `batch/` 执行批量任务
//! - 使用 `regex`

pub mod probe;
pub mod rewrite;
pub mod rule;
pub mod scan;

pub use probe::ContentProbe;
pub use rewrite::{rewrite_all, FileOutcome, RewriteSummary, WritePolicy};
pub use rule::ImportRule;
pub use scan::scan;
