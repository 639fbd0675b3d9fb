//! # import 改写规则
//!
//! 将 `import { ... } from '<path>';` 中的模块路径补全为以指定后缀结尾。
//!
//! ## 规则
//! - 搜索模式必须包含一个捕获组，即模块路径
//! - 路径已以后缀结尾：保持原文不变
//! - 否则：保留到路径末尾的原文，追加 `后缀 + 结束文本`
//!
//! ## 依赖关系
//! - 被 `rewriter/rewrite.rs` 使用
//! - 使用 `regex`

use crate::error::{Result, VendorfixError};

use regex::{Captures, Regex};
use std::borrow::Cow;

/// 默认搜索模式：具名导入语句，结尾分号可选
pub const DEFAULT_IMPORT_PATTERN: &str = r"import \{[^}]+\} from '([^']+)';?";

/// 默认目标后缀
pub const DEFAULT_SUFFIX: &str = ".js";

/// 默认结束文本
pub const DEFAULT_CLOSING: &str = "';";

/// 单次改写结果
#[derive(Debug)]
pub struct Rewritten<'a> {
    /// 改写后的文本（无改动时借用原文）
    pub text: Cow<'a, str>,
    /// 被补全的 import 数量
    pub fixed: usize,
}

impl Rewritten<'_> {
    /// 是否有改动
    pub fn changed(&self) -> bool {
        self.fixed > 0
    }
}

/// import 路径补全规则
#[derive(Debug, Clone)]
pub struct ImportRule {
    regex: Regex,
    suffix: String,
    closing: String,
}

impl ImportRule {
    /// 使用默认搜索模式创建规则
    pub fn new(suffix: &str, closing: &str) -> Result<Self> {
        Self::with_pattern(DEFAULT_IMPORT_PATTERN, suffix, closing)
    }

    /// 使用自定义搜索模式创建规则
    pub fn with_pattern(pattern: &str, suffix: &str, closing: &str) -> Result<Self> {
        if suffix.is_empty() {
            return Err(VendorfixError::InvalidArgument(
                "suffix must not be empty".to_string(),
            ));
        }

        let regex = Regex::new(pattern).map_err(|e| VendorfixError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        // captures_len 包含整体匹配 (组 0)
        if regex.captures_len() < 2 {
            return Err(VendorfixError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern needs a capture group for the module path".to_string(),
            });
        }

        Ok(Self {
            regex,
            suffix: suffix.to_string(),
            closing: closing.to_string(),
        })
    }

    /// 目标后缀
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// 对整段文本应用规则，从左到右处理所有不重叠的匹配
    pub fn apply<'a>(&self, text: &'a str) -> Rewritten<'a> {
        let mut fixed = 0;

        let rewritten = self.regex.replace_all(text, |caps: &Captures| {
            let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
                return caps[0].to_string();
            };

            if path.as_str().ends_with(&self.suffix) {
                return whole.as_str().to_string();
            }

            fixed += 1;
            format!(
                "{}{}{}",
                &text[whole.start()..path.end()],
                self.suffix,
                self.closing
            )
        });

        // 所有匹配都已带后缀时 replace_all 仍会分配，这里退回借用原文
        let text = if fixed == 0 {
            Cow::Borrowed(text)
        } else {
            rewritten
        };

        Rewritten { text, fixed }
    }
}
