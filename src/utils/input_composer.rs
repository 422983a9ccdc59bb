//! 检测输入拼接工具
//! 将请求头中的 User-Agent 与前端上报的插件版本串拼接为检测输入

/// 检测输入拼接工具
pub struct InputComposer;

impl InputComposer {
    /// 直接拼接 User-Agent 与插件串（不插入分隔符）
    pub fn compose(user_agent: &str, plugins: Option<&str>) -> String {
        let plugins = plugins.unwrap_or("");
        let mut input = String::with_capacity(user_agent.len() + plugins.len());
        input.push_str(user_agent);
        input.push_str(plugins);
        input
    }
}
