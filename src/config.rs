//! 全局配置管理,存储所有可配置项

pub use crate::utils::ComparisonPolicy;

/// 规则来源
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// 内置规则（编译期 include_str!）
    #[default]
    Embedded,
    /// 调用方提供的JSON规则文本（格式与内置规则一致）
    Inline(String),
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 规则来源
    pub origin: CatalogOrigin,
    // 版本比较策略
    pub comparison_policy: ComparisonPolicy,
    // 版本号捕获异常（缺失/非数字）时是否输出日志
    pub log_anomalies: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            origin: CatalogOrigin::Embedded,
            comparison_policy: ComparisonPolicy::FinalComponent,
            log_anomalies: true,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn origin(mut self, origin: CatalogOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    /// 使用自定义JSON规则文本
    pub fn inline_definitions(mut self, json: impl Into<String>) -> Self {
        self.config.origin = CatalogOrigin::Inline(json.into());
        self
    }

    pub fn comparison_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.config.comparison_policy = policy;
        self
    }

    pub fn log_anomalies(mut self, enabled: bool) -> Self {
        self.config.log_anomalies = enabled;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
