//! replaceExpressionText 响应

use std::collections::BTreeMap;

use serde::Deserialize;

/// 响应状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 求值结果
///
/// 每个要素对应一组键值 (未携带要素时只有一组);
/// 键为请求给定的键或匿名下标, 值为求值后的字符串.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplaceResponse {
    pub status: ResponseStatus,
    pub results: Vec<BTreeMap<String, String>>,
}
