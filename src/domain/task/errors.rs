//! Task Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("翻译文本不能为空")]
    EmptyText,

    #[error("目标语言列表不能为空")]
    NoLanguages,
}
