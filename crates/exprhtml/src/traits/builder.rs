//! 表达式来源

use crate::error::*;

/// 表达式来源
///
/// 提供待插入模板的表达式文本 (不含占位符分隔符).
/// 返回 None 表示用户放弃输入.
pub trait ExpressionBuilder {
    /// 字段控件当前的表达式
    fn field_expression(&mut self) -> Result<Option<String>>;

    /// 打开交互构建器获取表达式
    fn build_expression(&mut self) -> Result<Option<String>>;
}
