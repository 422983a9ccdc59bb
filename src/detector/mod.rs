//! 检测模块：过期应用检测核心逻辑
pub mod global;
pub mod detector;

// 导出核心接口
pub use self::global::{init_browsercheck, init_browsercheck_with_config, try_global_checker};
pub use self::detector::{BrowserChecker, check, check_lite, check_request};
