//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod catalog;
pub mod completion;

#[cfg(test)]
pub(crate) mod stub;

pub use catalog::*;
pub use completion::*;
