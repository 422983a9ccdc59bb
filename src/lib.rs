//! browsercheck - 基于User-Agent的过期浏览器/系统/插件检测

// 导出全局错误类型
pub use self::error::{BrowserCheckError, BcResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, CatalogOrigin};

// 导出规则模块核心接口
pub use self::rule::{
    ApplicationRule, CatalogDefinition, CatalogLoader, OutdatedApplication, OutdatedApplicationLite,
    to_compact_json, to_pretty_json,
};

// 导出工具模块核心接口
pub use self::utils::{
    ComparisonPolicy, VersionComparator, VersionExtractor, InputComposer
};

// 导出编译模块核心接口
pub use self::compiler::{CompiledCatalog, CompiledSignature, CatalogCompiler};

// 导出检测模块核心接口
pub use self::detector::{
    BrowserChecker,
    init_browsercheck,
    init_browsercheck_with_config,
    try_global_checker,
    check,
    check_lite,
    check_request,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod detector;
