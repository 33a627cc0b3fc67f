//! Catalog Adapter - Google Books 客户端实现

mod google_books_client;

pub use google_books_client::*;
