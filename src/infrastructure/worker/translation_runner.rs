//! Translation Runner - Background Translation Orchestrator
//!
//! 把目标语言列表转换为完整的结果 map，按语言隔离失败，
//! 最后对 Task Store 执行恰好一次终态更新

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    TaskRepositoryPort, TranslateRequest, TranslatorPort,
};
use crate::domain::task::TaskId;

/// Runner 配置
#[derive(Debug, Clone)]
pub struct TranslationRunnerConfig {
    /// 相邻两次翻译调用之间的间隔（毫秒），用于缓解外部服务限流。
    /// 0 表示不间隔
    pub pacing_ms: u64,
}

impl Default for TranslationRunnerConfig {
    fn default() -> Self {
        Self { pacing_ms: 1000 }
    }
}

/// 翻译编排器
///
/// 每个任务由 HTTP 层通过 tokio::spawn 派发一次 run 调用，
/// 与创建任务的请求并发执行、互不阻塞。run 没有返回值，
/// 唯一可观测的效果是最终那次 Task Store 更新
pub struct TranslationRunner {
    config: TranslationRunnerConfig,
    translator: Arc<dyn TranslatorPort>,
    task_repo: Arc<dyn TaskRepositoryPort>,
}

impl TranslationRunner {
    pub fn new(
        config: TranslationRunnerConfig,
        translator: Arc<dyn TranslatorPort>,
        task_repo: Arc<dyn TaskRepositoryPort>,
    ) -> Self {
        Self {
            config,
            translator,
            task_repo,
        }
    }

    /// 执行一个任务的全部翻译
    ///
    /// 按给定顺序逐个语言调用翻译服务:
    /// - 成功: 译文写入对应语言槽位
    /// - 失败: 写入 "Error: ..." 标记，继续处理剩余语言（不重试）
    ///
    /// 全部语言尝试完毕后恰好调用一次 complete。重复语言各自处理一遍，
    /// map 按 key 保留最后一次写入
    pub async fn run(self: Arc<Self>, task_id: TaskId, text: String, languages: Vec<String>) {
        let mut translations: HashMap<String, String> = HashMap::new();

        for lang in &languages {
            let request = TranslateRequest {
                text: text.clone(),
                target_language: lang.clone(),
            };

            match self.translator.translate(request).await {
                Ok(response) => {
                    tracing::debug!(
                        task_id = %task_id,
                        language = %lang,
                        translated_len = response.translated_text.len(),
                        "Language translated"
                    );
                    translations.insert(lang.clone(), response.translated_text);
                }
                Err(e) => {
                    // 失败按语言隔离: 记录为数据而不是向上传播
                    tracing::error!(
                        task_id = %task_id,
                        language = %lang,
                        error = %e,
                        "Translation failed for language"
                    );
                    translations.insert(lang.clone(), format!("Error: {}", e));
                }
            }

            if self.config.pacing_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.pacing_ms)).await;
            }
        }

        // 终态更新: 整体写入结果 map。这里失败意味着本次结果丢失，
        // 任务停留在 pending（不重试存储写入）
        match self.task_repo.complete(task_id, translations).await {
            Ok(task) => {
                tracing::info!(
                    task_id = %task_id,
                    languages = languages.len(),
                    results = task.translations().len(),
                    "Task completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    task_id = %task_id,
                    error = %e,
                    "Failed to store translation results, task stays pending"
                );
            }
        }
    }
}
