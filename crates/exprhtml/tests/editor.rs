//! 测试模板编辑控制器

use exprhtml::{
    Error, Result,
    services::{EditorCommand, EditorOutcome, HtmlTemplateEditor},
    traits::{builder::ExpressionBuilder, editor::EditorSurface},
};

/// 内存编辑表面, 光标固定在末尾
#[derive(Default)]
struct MemorySurface {
    html: String,
    selection: String,
}

impl EditorSurface for MemorySurface {
    fn content(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    fn set_content(&mut self, html: &str) -> Result<()> {
        self.html = html.to_string();
        Ok(())
    }

    fn insert_text(&mut self, text: &str) -> Result<()> {
        self.html.push_str(text);
        Ok(())
    }

    fn selection(&self) -> Result<String> {
        Ok(self.selection.clone())
    }
}

/// 任何访问都失败的表面
struct BrokenSurface;

impl EditorSurface for BrokenSurface {
    fn content(&self) -> Result<String> {
        Err(Error::Surface("bridge down".to_string()))
    }

    fn set_content(&mut self, _: &str) -> Result<()> {
        Err(Error::Surface("bridge down".to_string()))
    }

    fn insert_text(&mut self, _: &str) -> Result<()> {
        Err(Error::Surface("bridge down".to_string()))
    }

    fn selection(&self) -> Result<String> {
        Err(Error::Surface("bridge down".to_string()))
    }
}

/// 预置应答的表达式来源, 每个应答只给一次
#[derive(Default)]
struct ScriptedBuilder {
    field: Option<String>,
    built: Option<String>,
}

impl ExpressionBuilder for ScriptedBuilder {
    fn field_expression(&mut self) -> Result<Option<String>> {
        Ok(self.field.take())
    }

    fn build_expression(&mut self) -> Result<Option<String>> {
        Ok(self.built.take())
    }
}

fn new_editor(builder: ScriptedBuilder) -> HtmlTemplateEditor<MemorySurface, ScriptedBuilder> {
    HtmlTemplateEditor::new(MemorySurface::default(), builder)
}

//////////////// test ////////////////

/// 载入时转义占位符片段, 片段外不动
#[test]
fn test_set_template_encodes() {
    let mut editor = new_editor(ScriptedBuilder::default());

    editor.set_template("<p>x [%1<2%] y [%3>4%] z</p>").unwrap();
    assert_eq!(editor.surface().html, "<p>x [%1&lt;2%] y [%3&gt;4%] z</p>");
}

/// 读出时还原片段
#[test]
fn test_template_decodes() {
    let mut editor = new_editor(ScriptedBuilder::default());

    editor.set_template("<div>[% \"a\" & 'b' %]</div>").unwrap();
    assert_eq!(editor.template().unwrap(), "<div>[% \"a\" & 'b' %]</div>");
}

#[test]
fn test_insert_field_expression() {
    let mut editor = new_editor(ScriptedBuilder {
        field: Some("concat(prop0, ' ')".to_string()),
        built: None,
    });

    let outcome = editor.dispatch(EditorCommand::InsertFieldExpression).unwrap();
    assert_eq!(outcome, EditorOutcome::Pending);
    assert_eq!(editor.surface().html, "[% concat(prop0, ' ') %]");

    // 应答已耗尽, 再次分发不做修改
    let outcome = editor.dispatch(EditorCommand::InsertFieldExpression).unwrap();
    assert_eq!(outcome, EditorOutcome::Pending);
    assert_eq!(editor.surface().html, "[% concat(prop0, ' ') %]");
}

#[test]
fn test_insert_built_expression() {
    let mut editor = new_editor(ScriptedBuilder {
        field: None,
        built: Some("1 + 1".to_string()),
    });

    editor.dispatch(EditorCommand::InsertBuiltExpression).unwrap();
    assert_eq!(editor.surface().html, "[% 1 + 1 %]");
}

/// 构建器放弃时不做修改
#[test]
fn test_builder_declined() {
    let mut editor = new_editor(ScriptedBuilder::default());
    editor.set_template("<p>keep</p>").unwrap();

    editor.dispatch(EditorCommand::InsertBuiltExpression).unwrap();
    assert_eq!(editor.surface().html, "<p>keep</p>");
}

/// 确认返回还原后的模板
#[test]
fn test_accept() {
    let mut editor = new_editor(ScriptedBuilder {
        field: Some("prop0 < 2".to_string()),
        built: None,
    });

    editor.set_template("<p>").unwrap();
    editor.dispatch(EditorCommand::InsertFieldExpression).unwrap();

    match editor.dispatch(EditorCommand::Accept).unwrap() {
        EditorOutcome::Accepted(template) => assert_eq!(template, "<p>[% prop0 < 2 %]"),
        outcome => panic!("unexpected outcome: {outcome:?}"),
    }
}

/// 放弃不访问表面
#[test]
fn test_cancel() {
    let mut editor = HtmlTemplateEditor::new(BrokenSurface, ScriptedBuilder::default());

    let outcome = editor.dispatch(EditorCommand::Cancel).unwrap();
    assert_eq!(outcome, EditorOutcome::Cancelled);
}

/// 表面错误原样上抛
#[test]
fn test_surface_error() {
    let mut editor = HtmlTemplateEditor::new(BrokenSurface, ScriptedBuilder::default());

    assert!(matches!(
        editor.dispatch(EditorCommand::Accept),
        Err(Error::Surface(_))
    ));
    assert!(matches!(editor.set_template("x"), Err(Error::Surface(_))));
}

#[test]
fn test_selected_text() {
    let editor = HtmlTemplateEditor::new(
        MemorySurface {
            html: String::new(),
            selection: "chosen".to_string(),
        },
        ScriptedBuilder::default(),
    );

    assert_eq!(editor.selected_text().unwrap(), "chosen");
}
