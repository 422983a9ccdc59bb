//! 工具模块：版本提取、版本比较、输入拼接
pub mod version_extractor;
pub mod version_comparator;
pub mod input_composer;

pub use self::version_extractor::{ComponentValue, ExtractedVersion, VersionExtractor};
pub use self::version_comparator::{ComparisonPolicy, VersionComparator};
pub use self::input_composer::InputComposer;
