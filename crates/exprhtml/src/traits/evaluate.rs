//! 表达式求值服务

use crate::{
    error::*,
    models::{ReplaceRequest, ReplaceResponse},
};

/// replaceExpressionText 服务接口
///
/// 求值引擎位于外部服务, 本库只消费该契约.
pub trait ReplaceExpressionText {
    /// 替换字符串中的占位符表达式
    fn replace_expression_text(&self, request: &ReplaceRequest) -> Result<ReplaceResponse>;
}
