//! exprhtml 接口抽象

pub mod builder;
pub mod editor;
pub mod evaluate;
