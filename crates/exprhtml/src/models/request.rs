//! replaceExpressionText 请求参数

use std::collections::BTreeMap;

use derive_builder::Builder;

use crate::{error::*, models::feature::Feature};

/// SERVICE 参数取值
pub const EXPRESSION_SERVICE: &str = "EXPRESSION";

/// REQUEST 参数取值
pub const REPLACE_EXPRESSION_TEXT: &str = "replaceExpressionText";

/// 待求值字符串集
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strings {
    /// 单条, 以 STRING 发送, 结果键为 "0"
    Single(String),

    /// 数组, 以 STRINGS 发送, 结果键为十进制下标
    List(Vec<String>),

    /// 键值对, 以 STRINGS 发送, 结果键为给定键
    Map(BTreeMap<String, String>),
}

/// 求值上下文要素集
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Features {
    /// 不携带要素
    #[default]
    None,

    /// 单个要素, 以 FEATURE 发送
    Single(Feature),

    /// 要素数组, 以 FEATURES 发送, 每个要素产生一组结果
    List(Vec<Feature>),
}

/// replaceExpressionText 请求
///
/// 服务端对每条字符串做占位符替换, 以要素属性为求值上下文.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct ReplaceRequest {
    /// 项目文件 (MAP)
    pub project: String,

    /// 图层名 (LAYER)
    pub layer: String,

    /// 待求值字符串 (STRING / STRINGS)
    pub strings: Strings,

    /// 求值上下文 (FEATURE / FEATURES)
    #[builder(default)]
    pub features: Features,

    /// 表单作用域 (FORM_SCOPE)
    ///
    /// 关闭时 current_value 等表单函数求值为空串.
    #[builder(default)]
    pub form_scope: bool,
}

impl ReplaceRequest {
    /// 生成查询参数
    ///
    /// FORM_SCOPE 仅在开启时发送, 缺省即 false.
    pub fn query_pairs(&self) -> Result<Vec<(&'static str, String)>> {
        let mut pairs = vec![
            ("SERVICE", EXPRESSION_SERVICE.to_string()),
            ("REQUEST", REPLACE_EXPRESSION_TEXT.to_string()),
            ("MAP", self.project.clone()),
            ("LAYER", self.layer.clone()),
        ];

        match &self.strings {
            Strings::Single(s) => pairs.push(("STRING", s.clone())),
            Strings::List(l) => pairs.push(("STRINGS", serde_json::to_string(l)?)),
            Strings::Map(m) => pairs.push(("STRINGS", serde_json::to_string(m)?)),
        }

        match &self.features {
            Features::None => {}
            Features::Single(f) => pairs.push(("FEATURE", serde_json::to_string(f)?)),
            Features::List(l) => pairs.push(("FEATURES", serde_json::to_string(l)?)),
        }

        if self.form_scope {
            pairs.push(("FORM_SCOPE", "true".to_string()));
        }

        Ok(pairs)
    }
}
