//! 应用层 - 命令
//!
//! CQRS 命令侧：每个生成接口对应一个命令及处理器

mod generate_commands;

pub mod handlers;

pub use generate_commands::*;
