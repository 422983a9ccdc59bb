//! 规则数据模型定义
//! 仅存储规则数据与检测结果，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::BcResult;

/// 单条应用定义（原始规则，未编译）
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApplicationRule {
    #[serde(rename = "readable-name")]
    pub readable_name: String,
    #[serde(rename = "regex")]
    pub string_regex: String,
    #[serde(rename = "last-secure-version")]
    pub last_secure_version: String,
    #[serde(rename = "update-url", default)]
    pub update_url: String,
}

/// 完整规则定义（顺序即检测结果顺序）
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub applications: Vec<ApplicationRule>,
}

/// 过期应用检测结果（完整版本）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutdatedApplication {
    pub name: String,
    pub update_url: String,
    pub secure_version: Vec<u64>,
    pub detected_version: Vec<u64>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub pattern: String,
}

// ======== 为 OutdatedApplication 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for OutdatedApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (< {})",
            self.name,
            join_version(&self.detected_version),
            join_version(&self.secure_version)
        )
    }
}

/// 过期应用检测结果（精简版本，仅名称与更新地址）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutdatedApplicationLite {
    pub name: String,
    pub update_url: String,
}

impl fmt::Display for OutdatedApplicationLite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.update_url)
    }
}

// ======== 类型转换 ========
impl From<OutdatedApplication> for OutdatedApplicationLite {
    fn from(full: OutdatedApplication) -> Self {
        Self {
            name: full.name,
            update_url: full.update_url,
        }
    }
}

/// 版本向量转点分字符串
pub fn join_version(version: &[u64]) -> String {
    version
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// 紧凑JSON数组，空结果输出 `[]` 而非 `null`
pub fn to_compact_json<T: Serialize>(items: &[T]) -> BcResult<String> {
    Ok(serde_json::to_string(items)?)
}

/// 格式化JSON数组
pub fn to_pretty_json<T: Serialize>(items: &[T]) -> BcResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// 结果转字符串列表
pub fn to_string_list<T: fmt::Display>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
