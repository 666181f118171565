//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod translator;

pub use repositories::{RepositoryError, TaskRepositoryPort};
pub use translator::{TranslateRequest, TranslateResponse, TranslatorError, TranslatorPort};
