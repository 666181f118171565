//! Translator Adapters - 翻译引擎适配器

mod fake_translator;
mod http_translator;

pub use fake_translator::{FakeTranslatorClient, FakeTranslatorConfig};
pub use http_translator::{HttpTranslatorClient, HttpTranslatorClientConfig};
