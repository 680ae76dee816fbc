//! exprhtml 服务实现

pub mod client;
pub mod editor;

pub use client::*;
pub use editor::*;
