//! 版本比较工具
//! 将提取出的版本向量与安全版本向量比较，判断是否过期

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// 版本比较策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComparisonPolicy {
    /// 逐段比较，但仅以最后一个分段的结果为准
    /// 例：安全版本 32.0.1700.68，检测到 31.0.1650.100 时判定为安全
    #[default]
    FinalComponent,
    /// 常规字典序比较：第一个不相等的分段决定结果
    Lexicographic,
}

impl ComparisonPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonPolicy::FinalComponent => "final-component",
            ComparisonPolicy::Lexicographic => "lexicographic",
        }
    }
}

impl fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "final-component" | "final" => Ok(ComparisonPolicy::FinalComponent),
            "lexicographic" | "lex" => Ok(ComparisonPolicy::Lexicographic),
            other => Err(format!(
                "未知比较策略：{}（可选：final-component, lexicographic）",
                other
            )),
        }
    }
}

/// 版本比较工具类
pub struct VersionComparator;

impl VersionComparator {
    /// 判断检测到的版本是否低于安全版本
    pub fn is_outdated(found: &[u64], secure: &[u64], policy: ComparisonPolicy) -> bool {
        match policy {
            ComparisonPolicy::FinalComponent => Self::final_component_outdated(found, secure),
            ComparisonPolicy::Lexicographic => Self::lexicographic_outdated(found, secure),
        }
    }

    fn final_component_outdated(found: &[u64], secure: &[u64]) -> bool {
        let last = match secure.len().checked_sub(1) {
            Some(last) => last,
            None => return false,
        };

        for (i, secure_part) in secure.iter().enumerate() {
            let found_part = found.get(i).copied().unwrap_or(0);
            // 每个分段的结论都会被下一个分段覆盖
            let secure_so_far = found_part >= *secure_part;
            if !secure_so_far && i == last {
                return true;
            }
        }

        false
    }

    fn lexicographic_outdated(found: &[u64], secure: &[u64]) -> bool {
        let max_len = found.len().max(secure.len());

        for i in 0..max_len {
            let found_part = found.get(i).copied().unwrap_or(0);
            let secure_part = secure.get(i).copied().unwrap_or(0);

            match found_part.cmp(&secure_part) {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => continue,
            }
        }

        false
    }
}
