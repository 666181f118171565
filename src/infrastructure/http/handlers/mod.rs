//! HTTP Handlers

mod page;
mod ping;
mod translate;

pub use page::*;
pub use ping::*;
pub use translate::*;
