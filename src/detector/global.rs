//! 全局检测器单例管理
//! 进程内仅构建一次，构建完成后只读，多线程并发检测无需加锁
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::detector::BrowserChecker;
use crate::error::{BcResult, BrowserCheckError};
use crate::config::{ConfigManager, GlobalConfig};

/// 全局检测器实例
static GLOBAL_CHECKER: OnceCell<BrowserChecker> = OnceCell::new();

/// 初始化全局检测器（默认配置）
pub fn init_browsercheck() -> BcResult<()> {
    init_browsercheck_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器
/// 已初始化时直接返回 Ok(())，不会替换已有实例
pub fn init_browsercheck_with_config(config: GlobalConfig) -> BcResult<()> {
    if GLOBAL_CHECKER.get().is_some() {
        debug!("全局检测器已初始化，跳过");
        return Ok(());
    }

    let checker = BrowserChecker::new(config)?;
    let signatures = checker.catalog().len();

    if GLOBAL_CHECKER.set(checker).is_err() {
        // 并发初始化时由先完成的线程写入
        debug!("全局检测器已由其他线程初始化");
        return Ok(());
    }

    info!("全局检测器初始化完成，签名数：{}", signatures);
    Ok(())
}

/// 获取全局检测器，未初始化时使用默认配置构建
/// 内置规则无效属于编程错误，直接终止
pub(crate) fn get_global_checker() -> &'static BrowserChecker {
    GLOBAL_CHECKER.get_or_init(|| {
        BrowserChecker::new(ConfigManager::get_default()).unwrap_or_else(|e| {
            panic!("内置规则库构建失败：{}", e);
        })
    })
}

/// 获取全局检测器（不自动初始化）
pub fn try_global_checker() -> BcResult<&'static BrowserChecker> {
    GLOBAL_CHECKER.get().ok_or_else(|| {
        BrowserCheckError::CheckerInitError("全局检测器未初始化，请先调用 init_browsercheck".to_string())
    })
}
