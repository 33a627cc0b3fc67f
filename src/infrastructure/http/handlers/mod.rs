//! HTTP Handlers

mod generate;
mod ping;

pub use generate::*;
pub use ping::*;
