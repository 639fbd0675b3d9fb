//! # 统一错误处理模块
//!
//! 定义 vendorfix 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// vendorfix 统一错误类型
#[derive(Error, Debug)]
pub enum VendorfixError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to walk directory: {path}\nReason: {reason}")]
    Walk { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl VendorfixError {
    /// 读取失败
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        VendorfixError::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 写入失败
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        VendorfixError::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, VendorfixError>;
