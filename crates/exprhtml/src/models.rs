//! exprhtml 数据模型

pub mod feature;
pub mod request;
pub mod response;

pub use feature::*;
pub use request::*;
pub use response::*;
