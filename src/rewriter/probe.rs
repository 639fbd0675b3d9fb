//! # 内容探测
//!
//! 只读判断文件内容是否包含某个子串。

use crate::error::{Result, VendorfixError};

/// 默认探测子串
pub const DEFAULT_PROBE: &str = "import { Font }";

/// 子串探测器
#[derive(Debug, Clone)]
pub struct ContentProbe {
    needle: String,
}

impl ContentProbe {
    /// 创建探测器，空子串会匹配所有文件，视为参数错误
    pub fn new(needle: &str) -> Result<Self> {
        if needle.is_empty() {
            return Err(VendorfixError::InvalidArgument(
                "probe must not be empty".to_string(),
            ));
        }
        Ok(Self {
            needle: needle.to_string(),
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// 内容是否命中
    pub fn matches(&self, content: &str) -> bool {
        content.contains(&self.needle)
    }
}
