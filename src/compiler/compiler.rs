//! 规则编译器核心
//! 负责将原始规则定义编译为可执行的签名：编译正则、解析安全版本、校验分组数

use std::time::Instant;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledCatalog, CompiledSignature};
use crate::rule::{ApplicationRule, CatalogDefinition};
use crate::error::{BcResult, BrowserCheckError};

/// 规则编译器
pub struct CatalogCompiler;

impl CatalogCompiler {
    /// 编译规则库（保持定义顺序），任一规则无效即整体失败
    pub fn compile(definition: &CatalogDefinition) -> BcResult<CompiledCatalog> {
        let start = Instant::now();
        let mut signatures = Vec::with_capacity(definition.applications.len());
        let mut total_components = 0;

        for app in &definition.applications {
            let signature = Self::compile_application(app)?;
            total_components += signature.components();
            signatures.push(signature);
        }

        debug!("✅ 规则编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：签名{}条、版本分段{}个",
            signatures.len(),
            total_components
        );

        Ok(CompiledCatalog { signatures })
    }

    /// 编译单条应用规则
    fn compile_application(app: &ApplicationRule) -> BcResult<CompiledSignature> {
        let regex = Regex::new(&app.string_regex)?;
        let secure_version = Self::parse_secure_version(&app.readable_name, &app.last_secure_version)?;

        // 分组 i 对应版本分段 i，数量必须一致
        let groups = regex.captures_len() - 1;
        if groups != secure_version.len() {
            return Err(BrowserCheckError::CaptureArityMismatch {
                name: app.readable_name.clone(),
                groups,
                components: secure_version.len(),
            });
        }

        Ok(CompiledSignature {
            name: app.readable_name.clone(),
            regex,
            secure_version,
            update_url: app.update_url.clone(),
        })
    }

    /// 按 `.` 拆分安全版本并解析为整数
    pub fn parse_secure_version(name: &str, raw: &str) -> BcResult<Vec<u64>> {
        raw.split('.')
            .map(|segment| {
                segment.parse::<u64>().map_err(|_| BrowserCheckError::VersionParseError {
                    name: name.to_string(),
                    version: raw.to_string(),
                })
            })
            .collect()
    }
}
