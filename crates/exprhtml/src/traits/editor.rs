//! 编辑表面

use crate::error::*;

/// HTML 编辑表面
///
/// 对实际渲染控件 (通常是一个脚本桥) 的能力抽象,
/// 控制器只通过该接口访问控件.
pub trait EditorSurface {
    /// 读取全部 HTML 内容
    fn content(&self) -> Result<String>;

    /// 覆盖全部 HTML 内容
    fn set_content(&mut self, html: &str) -> Result<()>;

    /// 在光标处插入文本
    fn insert_text(&mut self, text: &str) -> Result<()>;

    /// 读取当前选中文本
    fn selection(&self) -> Result<String>;
}
