//! 占位符转义
//!
//! 提供 [% ... %] 表达式占位符与 HTML 实体表示的互相转换

mod escape;

pub use escape::{decode_from_html, encode_for_html};
