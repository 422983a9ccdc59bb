//! 检测器核心：遍历编译后的签名，输出过期应用列表
use std::sync::Arc;

use tracing::{debug, warn};

use crate::compiler::{CatalogCompiler, CompiledCatalog, CompiledSignature};
use crate::config::GlobalConfig;
use crate::error::BcResult;
use crate::rule::{CatalogLoader, OutdatedApplication, OutdatedApplicationLite};
use crate::utils::{InputComposer, VersionComparator, VersionExtractor};

/// 过期应用检测器
/// 构建后只读，可在多线程间共享
#[derive(Debug, Clone)]
pub struct BrowserChecker {
    catalog: Arc<CompiledCatalog>,
    config: GlobalConfig,
}

impl BrowserChecker {
    /// 创建检测器
    pub fn new(config: GlobalConfig) -> BcResult<Self> {
        // 1. 加载原始规则定义
        let definition = CatalogLoader::load(&config)?;

        // 2. 编译规则库
        let catalog = CatalogCompiler::compile(&definition)?;

        Ok(Self::with_catalog(catalog, config))
    }

    /// 使用已编译的规则库创建检测器
    pub fn with_catalog(catalog: CompiledCatalog, config: GlobalConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    pub fn catalog(&self) -> &CompiledCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 核心检测接口：返回输入中所有低于安全版本的应用（按规则顺序）
    pub fn check(&self, input: &str) -> Vec<OutdatedApplication> {
        let mut outdated = Vec::new();

        for signature in self.catalog.iter() {
            if let Some(app) = self.check_signature(signature, input) {
                outdated.push(app);
            }
        }

        debug!("检测完成，过期应用{}个", outdated.len());
        outdated
    }

    /// 精简版检测接口
    pub fn check_lite(&self, input: &str) -> Vec<OutdatedApplicationLite> {
        self.check(input)
            .into_iter()
            .map(OutdatedApplicationLite::from)
            .collect()
    }

    /// 请求级检测接口：User-Agent 与插件版本串拼接后检测
    pub fn check_request(&self, user_agent: &str, plugins: Option<&str>) -> Vec<OutdatedApplication> {
        let input = InputComposer::compose(user_agent, plugins);
        self.check(&input)
    }

    /// 单条签名检测，未匹配或版本安全时返回 None
    fn check_signature(&self, signature: &CompiledSignature, input: &str) -> Option<OutdatedApplication> {
        let captures = signature.regex.captures(input)?;
        let extracted = VersionExtractor::extract(&captures, signature.components());

        if self.config.log_anomalies && extracted.has_anomaly() {
            for (position, component) in extracted.anomalies() {
                warn!(
                    "应用 [{}] 第{}个版本分段无法解析（{:?}），按 0 处理",
                    signature.name, position, component
                );
            }
        }

        let found = extracted.values();
        if !VersionComparator::is_outdated(&found, &signature.secure_version, self.config.comparison_policy) {
            return None;
        }

        debug!("命中过期应用 [{}]，检测版本：{:?}", signature.name, found);
        Some(OutdatedApplication {
            name: signature.name.clone(),
            update_url: signature.update_url.clone(),
            secure_version: signature.secure_version.clone(),
            detected_version: found,
            pattern: signature.pattern().to_string(),
        })
    }
}

// 对外暴露的简化接口（使用全局检测器）
pub fn check(input: &str) -> Vec<OutdatedApplication> {
    super::global::get_global_checker().check(input)
}

pub fn check_lite(input: &str) -> Vec<OutdatedApplicationLite> {
    super::global::get_global_checker().check_lite(input)
}

pub fn check_request(user_agent: &str, plugins: Option<&str>) -> Vec<OutdatedApplication> {
    super::global::get_global_checker().check_request(user_agent, plugins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComparisonPolicy, ConfigManager};
    use crate::rule::to_compact_json;

    const WIN81_IE11: &str = "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko";
    const XP_IE7: &str = "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1; .NET CLR 1.1.4322)";
    const OSX_CHROME: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.68 Safari/537.36";
    const OSX_CHROME_FLASH: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.68 Safari/537.36 Shockwave Flash 10.1 r100";

    fn checker() -> BrowserChecker {
        BrowserChecker::new(ConfigManager::get_default()).unwrap()
    }

    fn names(apps: &[OutdatedApplication]) -> Vec<&str> {
        apps.iter().map(|app| app.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = checker().check("");
        assert!(result.is_empty());
        assert_eq!(to_compact_json(&result).unwrap(), "[]");
    }

    #[test]
    fn test_current_windows_with_ie11() {
        assert!(checker().check(WIN81_IE11).is_empty());
    }

    #[test]
    fn test_outdated_windows_xp() {
        let result = checker().check(XP_IE7);
        assert_eq!(names(&result), vec!["Windows"]);
        assert_eq!(result[0].detected_version, vec![5, 1]);
    }

    #[test]
    fn test_old_osx_with_current_chrome() {
        let result = checker().check(OSX_CHROME);
        assert_eq!(names(&result), vec!["Mac OS X 10.9"]);
        assert_eq!(result[0].detected_version, vec![10, 9, 0]);
    }

    #[test]
    fn test_old_osx_with_outdated_flash() {
        let result = checker().check(OSX_CHROME_FLASH);
        assert_eq!(names(&result), vec!["Mac OS X 10.9", "Adobe Flash"]);
        assert_eq!(result[1].update_url, "https://get.adobe.com/de/flashplayer/");
    }

    #[test]
    fn test_flash_plugin_token_alone() {
        let result = checker().check("Shockwave Flash 10.1 r100");
        assert_eq!(names(&result), vec!["Adobe Flash"]);
    }

    #[test]
    fn test_older_osx_release() {
        let result = checker().check("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_8_5) AppleWebKit/537.36");
        assert_eq!(names(&result), vec!["Mac OS X"]);
        assert!(checker().check("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/600.1.25").is_empty());
        assert!(checker().check("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_5)").is_empty());
    }

    #[test]
    fn test_silverlight_plugin() {
        assert_eq!(
            names(&checker().check("Silverlight Plug-In5.1.10411")),
            vec!["Microsoft Silverlight"]
        );
        assert!(checker().check("Silverlight Plug-In5.1.20913").is_empty());
    }

    #[test]
    fn test_final_component_tie_break() {
        let checker = checker();
        // 仅最后一段决定结果
        assert!(checker.check("Chrome/31.0.1650.100").is_empty());
        assert_eq!(names(&checker.check("Chrome/40.0.2214.1")), vec!["Google Chrome"]);
        assert_eq!(names(&checker.check("Chromium/32.0.1700.67")), vec!["Google Chrome"]);
    }

    #[test]
    fn test_lexicographic_policy() {
        let config = ConfigManager::custom()
            .comparison_policy(ComparisonPolicy::Lexicographic)
            .build();
        let checker = BrowserChecker::new(config).unwrap();

        assert_eq!(names(&checker.check("Chrome/31.0.1650.100")), vec!["Google Chrome"]);
        assert!(checker.check("Chrome/40.0.2214.1").is_empty());
        // 场景结果与默认策略一致
        assert_eq!(checker.check(OSX_CHROME_FLASH).len(), 2);
    }

    #[test]
    fn test_check_is_deterministic() {
        let checker = checker();
        assert_eq!(checker.check(OSX_CHROME_FLASH), checker.check(OSX_CHROME_FLASH));
    }

    #[test]
    fn test_results_only_for_matching_signatures() {
        let checker = checker();
        for input in [WIN81_IE11, XP_IE7, OSX_CHROME, OSX_CHROME_FLASH] {
            for app in checker.check(input) {
                let signature = checker.catalog().get(&app.name).unwrap();
                assert!(signature.regex.is_match(input));
            }
        }
    }

    #[test]
    fn test_check_request_concatenates_plugins() {
        let result = checker().check_request(OSX_CHROME, Some(" Shockwave Flash 10.1 r100"));
        assert_eq!(names(&result), vec!["Mac OS X 10.9", "Adobe Flash"]);
    }

    #[test]
    fn test_check_lite() {
        let result = checker().check_lite(XP_IE7);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Windows");
        assert_eq!(
            result[0].update_url,
            "https://www.microsoft.com/en-us/windows/enterprise/endofsupport.aspx"
        );
    }

    #[test]
    fn test_missing_capture_treated_as_zero() {
        let config = ConfigManager::custom()
            .inline_definitions(
                r#"{"applications":[{"readable-name":"Foo","regex":"Foo(?:/(\\d+))?","last-secure-version":"1","update-url":"https://foo.example/"}]}"#,
            )
            .build();
        let checker = BrowserChecker::new(config).unwrap();

        let result = checker.check("Foo");
        assert_eq!(names(&result), vec!["Foo"]);
        assert_eq!(result[0].detected_version, vec![0]);
        assert!(checker.check("Foo/2").is_empty());
    }

    #[test]
    fn test_global_check_matches_instance() {
        assert_eq!(check(OSX_CHROME_FLASH), checker().check(OSX_CHROME_FLASH));
        assert!(check("").is_empty());
        assert_eq!(check_lite(XP_IE7).len(), 1);
        assert_eq!(check_request(XP_IE7, None).len(), 1);
    }
}
