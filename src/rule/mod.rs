//! 规则模块：负责规则定义的加载与数据模型定义
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{
    ApplicationRule, CatalogDefinition, OutdatedApplication, OutdatedApplicationLite,
    join_version, to_compact_json, to_pretty_json, to_string_list,
};
pub use self::loader::{CatalogLoader, EMBEDDED_DEFINITIONS};
