//! exprhtml 错误处理

use thiserror::Error;

/// exprhtml 标准返回类型
pub type Result<T> = std::result::Result<T, Error>;

/// exprhtml 标准错误类型
#[derive(Debug, Error)]
pub enum Error {
    #[error("serde_json failed: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("reqwest failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("editor surface failed: {0}")]
    Surface(String),

    #[error("expression builder failed: {0}")]
    Builder(String),

    /// 服务返回非成功状态 (参数错误时为 400 + JSON 错误体)
    #[error("service replied {status}: {body}")]
    Service { status: u16, body: String },
}
