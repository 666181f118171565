//! Task Commands

/// 提交翻译任务命令
///
/// 创建 pending 状态记录并立即返回，实际翻译由后台异步执行
#[derive(Debug, Clone)]
pub struct SubmitTranslation {
    pub text: String,
    pub languages: Vec<String>,
}
