//! 表达式服务客户端

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;

use crate::{
    error::*,
    models::{ReplaceRequest, ReplaceResponse},
    traits::evaluate::ReplaceExpressionText,
};

/// 表达式服务客户端
///
/// 以阻塞 GET 消费外部 replaceExpressionText 服务.
pub struct ExpressionService {
    client: Client,
    base_url: String,
}

impl ExpressionService {
    /// 创建客户端
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Self::with_headers(base_url, HeaderMap::new())
    }

    /// 从请求头创建客户端
    pub fn with_headers(base_url: impl Into<String>, headers: HeaderMap) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder().default_headers(headers).build()?,
            base_url: base_url.into(),
        })
    }
}

impl ReplaceExpressionText for ExpressionService {
    fn replace_expression_text(&self, request: &ReplaceRequest) -> Result<ReplaceResponse> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&request.query_pairs()?)
            .send()?;

        // 契约: 参数错误返回 400 + JSON 错误体
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Service {
                status: status.as_u16(),
                body: response.text()?,
            });
        }

        Ok(response.json()?)
    }
}
