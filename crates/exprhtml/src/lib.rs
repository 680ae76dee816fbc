//! exprhtml 业务逻辑
//!
//! HTML 模板中 [% ... %] 表达式占位符的编辑与求值:
//! 模板编辑控制器 + 外部 replaceExpressionText 服务的契约类型和客户端.

pub mod error;
pub mod models;
pub mod services;
pub mod traits;

pub use error::*;
