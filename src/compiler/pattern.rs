//! 编译后模式模型
//! 正则编译、安全版本预解析后的结构

use std::slice::Iter;
use regex::Regex;

/// 编译后的应用签名
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub name: String,
    pub regex: Regex,
    pub secure_version: Vec<u64>,
    pub update_url: String,
}

impl CompiledSignature {
    /// 版本分段数（等于正则的捕获分组数）
    pub fn components(&self) -> usize {
        self.secure_version.len()
    }

    /// 原始正则文本
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// 编译后的规则库，构建后只读
#[derive(Debug, Clone, Default)]
pub struct CompiledCatalog {
    pub signatures: Vec<CompiledSignature>,
}

impl CompiledCatalog {
    pub fn iter(&self) -> Iter<'_, CompiledSignature> {
        self.signatures.iter()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// 按名称查找签名
    pub fn get(&self, name: &str) -> Option<&CompiledSignature> {
        self.signatures.iter().find(|sig| sig.name == name)
    }
}

impl<'a> IntoIterator for &'a CompiledCatalog {
    type Item = &'a CompiledSignature;
    type IntoIter = Iter<'a, CompiledSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
