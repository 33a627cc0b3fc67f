//! Command Handlers

mod generate_handlers;

pub use generate_handlers::*;
