//! Query Handlers

mod description_handlers;

pub use description_handlers::*;
