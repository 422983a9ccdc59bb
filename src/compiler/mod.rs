//! 编译模块：将原始规则编译为可执行的签名
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledCatalog, CompiledSignature};
pub use self::compiler::CatalogCompiler;
