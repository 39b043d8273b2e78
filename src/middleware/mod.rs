//! 中间件

pub mod cors;

pub use cors::Cors;
