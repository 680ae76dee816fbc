//! HTML 模板编辑控制器

use strum_macros::Display;

use expr_escape::{decode_from_html, encode_for_html};

use crate::{
    error::*,
    traits::{builder::ExpressionBuilder, editor::EditorSurface},
};

/// 编辑器命令
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EditorCommand {
    /// 插入字段控件当前的表达式
    InsertFieldExpression,

    /// 打开构建器并插入结果
    InsertBuiltExpression,

    /// 确认, 携带还原后的模板返回
    Accept,

    /// 放弃编辑
    Cancel,
}

/// 命令处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// 继续编辑
    Pending,

    /// 确认并携带原始模板
    Accepted(String),

    /// 放弃
    Cancelled,
}

/// HTML 模板编辑控制器
///
/// 持有注入的编辑表面与表达式来源, 以命令分发取代控件间回调.
/// 模板载入表面前转义占位符片段, 读出时还原.
pub struct HtmlTemplateEditor<S, B> {
    surface: S,
    builder: B,
}

impl<S: EditorSurface, B: ExpressionBuilder> HtmlTemplateEditor<S, B> {
    /// 创建控制器
    pub fn new(surface: S, builder: B) -> Self {
        Self { surface, builder }
    }

    /// 编辑表面
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// 载入原始模板
    pub fn set_template(&mut self, raw: &str) -> Result<()> {
        self.surface.set_content(&encode_for_html(raw))
    }

    /// 读出原始模板
    pub fn template(&self) -> Result<String> {
        Ok(decode_from_html(&self.surface.content()?).into_owned())
    }

    /// 当前选中文本
    pub fn selected_text(&self) -> Result<String> {
        self.surface.selection()
    }

    /// 在光标处插入占位符表达式
    pub fn insert_expression(&mut self, expression: &str) -> Result<()> {
        self.surface.insert_text(&format!("[% {expression} %]"))
    }

    /// 分发编辑器命令
    pub fn dispatch(&mut self, command: EditorCommand) -> Result<EditorOutcome> {
        match command {
            EditorCommand::InsertFieldExpression => {
                let expression = self.builder.field_expression()?;
                self.insert_optional(expression)
            }

            EditorCommand::InsertBuiltExpression => {
                let expression = self.builder.build_expression()?;
                self.insert_optional(expression)
            }

            EditorCommand::Accept => Ok(EditorOutcome::Accepted(self.template()?)),

            EditorCommand::Cancel => Ok(EditorOutcome::Cancelled),
        }
    }

    /// 用户放弃时不做修改
    fn insert_optional(&mut self, expression: Option<String>) -> Result<EditorOutcome> {
        if let Some(expression) = expression {
            self.insert_expression(&expression)?;
        }

        Ok(EditorOutcome::Pending)
    }
}
