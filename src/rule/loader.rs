//! 规则加载管理器
//! 负责从内置规则或调用方提供的规则文本解析规则定义（不访问网络/文件系统）

use tracing::debug;

use super::model::CatalogDefinition;
use crate::config::{CatalogOrigin, GlobalConfig};
use crate::error::{BcResult, BrowserCheckError};

/// 内置规则定义
/// 仅收录带安全更新的版本，功能更新不计入
pub const EMBEDDED_DEFINITIONS: &str = include_str!("../../data/browsercheck_definitions.json");

/// 规则加载管理器
pub struct CatalogLoader;

impl CatalogLoader {
    /// 按配置的规则来源加载规则定义
    pub fn load(config: &GlobalConfig) -> BcResult<CatalogDefinition> {
        match &config.origin {
            CatalogOrigin::Embedded => {
                debug!("加载内置规则定义");
                Self::from_json(EMBEDDED_DEFINITIONS)
            }
            CatalogOrigin::Inline(json) => {
                debug!("加载自定义规则定义，长度：{} 字节", json.len());
                Self::from_json(json)
            }
        }
    }

    /// 解析JSON格式规则定义
    pub fn from_json(json: &str) -> BcResult<CatalogDefinition> {
        let definition: CatalogDefinition = serde_json::from_str(json)
            .map_err(|e| BrowserCheckError::RuleParseError(e.to_string()))?;

        if definition.applications.is_empty() {
            return Err(BrowserCheckError::EmptyCatalog);
        }

        debug!("规则定义解析成功，应用规则数：{}", definition.applications.len());
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    #[test]
    fn test_embedded_definitions_keep_order() {
        let definition = CatalogLoader::load(&ConfigManager::get_default()).unwrap();
        let names: Vec<&str> = definition
            .applications
            .iter()
            .map(|app| app.readable_name.as_str())
            .collect();

        assert_eq!(
            names,
            vec![
                "Mac OS X 10.9",
                "Mac OS X",
                "Windows",
                "Google Chrome",
                "Adobe Flash",
                "Microsoft Silverlight",
                "Internet Explorer",
            ]
        );
    }

    #[test]
    fn test_inline_definitions() {
        let config = ConfigManager::custom()
            .inline_definitions(
                r#"{"applications":[{"readable-name":"Foo","regex":"Foo/(\\d+)","last-secure-version":"3","update-url":"https://foo.example/"}]}"#,
            )
            .build();

        let definition = CatalogLoader::load(&config).unwrap();
        assert_eq!(definition.applications.len(), 1);
        assert_eq!(definition.applications[0].update_url, "https://foo.example/");
    }

    #[test]
    fn test_empty_definitions_rejected() {
        let result = CatalogLoader::from_json(r#"{"applications": []}"#);
        assert!(matches!(result, Err(BrowserCheckError::EmptyCatalog)));
    }

    #[test]
    fn test_malformed_definitions_rejected() {
        let result = CatalogLoader::from_json("<data></data>");
        assert!(matches!(result, Err(BrowserCheckError::RuleParseError(_))));
    }
}
