//! HTTP 层模型
//!
//! 请求/响应对象以及错误类型，数据库模型在 handler 里转换为这里的类型

pub mod cart;
pub mod common;
pub mod err;
pub mod projects;
