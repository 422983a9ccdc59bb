//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum BrowserCheckError {
    // 规则定义相关错误
    #[error("规则解析失败：{0}")]
    RuleParseError(String),
    #[error("规则库为空，至少需要一条应用定义")]
    EmptyCatalog,

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),
    #[error("应用 [{name}] 的安全版本号无效：{version}")]
    VersionParseError { name: String, version: String },
    #[error("应用 [{name}] 的正则分组数({groups})与安全版本分段数({components})不一致")]
    CaptureArityMismatch {
        name: String,
        groups: usize,
        components: usize,
    },

    // 检测器相关错误
    #[error("检测器初始化失败：{0}")]
    CheckerInitError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type BcResult<T> = Result<T, BrowserCheckError>;
