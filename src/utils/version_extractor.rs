//! 版本提取工具模块
//! 负责从正则捕获结果中按分组位置提取数值版本向量
//! 缺失或非数字的分组统一按 0 处理，并保留异常信息供日志输出

use regex::Captures;

/// 单个版本分段的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentValue {
    /// 正常解析的数值
    Parsed(u64),
    /// 分组未参与匹配或匹配为空
    Missing,
    /// 分组内容不是合法的非负整数（保留原文）
    Malformed(String),
}

impl ComponentValue {
    /// 解析单个分组文本
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => ComponentValue::Missing,
            Some(text) => text
                .parse::<u64>()
                .map(ComponentValue::Parsed)
                .unwrap_or_else(|_| ComponentValue::Malformed(text.to_string())),
        }
    }

    /// 参与比较的数值，异常分段取 0
    pub fn value(&self) -> u64 {
        match self {
            ComponentValue::Parsed(v) => *v,
            ComponentValue::Missing | ComponentValue::Malformed(_) => 0,
        }
    }

    pub fn is_anomaly(&self) -> bool {
        !matches!(self, ComponentValue::Parsed(_))
    }
}

/// 提取出的版本向量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVersion {
    components: Vec<ComponentValue>,
}

impl ExtractedVersion {
    pub fn components(&self) -> &[ComponentValue] {
        &self.components
    }

    /// 数值版本向量（异常分段为 0）
    pub fn values(&self) -> Vec<u64> {
        self.components.iter().map(ComponentValue::value).collect()
    }

    /// 发生回退的分段（位置，解析结果）
    pub fn anomalies(&self) -> Vec<(usize, &ComponentValue)> {
        self.components
            .iter()
            .enumerate()
            .filter(|(_, component)| component.is_anomaly())
            .collect()
    }

    pub fn has_anomaly(&self) -> bool {
        self.components.iter().any(ComponentValue::is_anomaly)
    }
}

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 从正则捕获结果中提取 `arity` 个版本分段
    ///
    /// 分组与版本分段按尾部对齐：最后一个分组对应最后一个版本分段。
    /// 规则编译时已校验分组数等于分段数，此时即为分组 1..=arity 依次对应。
    /// 分组数不足时，靠前的分段记为 `Missing`。
    pub fn extract(captures: &Captures, arity: usize) -> ExtractedVersion {
        let groups = captures.len().saturating_sub(1);

        let components = (0..arity)
            .map(|position| {
                let offset = arity - position;
                if offset > groups {
                    return ComponentValue::Missing;
                }
                let group_index = captures.len() - offset;
                ComponentValue::parse(captures.get(group_index).map(|m| m.as_str()))
            })
            .collect();

        ExtractedVersion { components }
    }
}
