//! 占位符片段的 HTML 转义

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// 捕获 [% ... %] 的正则
///
/// 非贪婪匹配, (?s) 允许跨行; 片段从左到右依次捕获, 互不重叠.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\[%.*?%\]").unwrap());

/// 解码时识别的实体表
///
/// &amp; 须置于末位, 避免二次解码.
const ENTITIES: [(&str, char); 6] = [
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#x27;", '\''),
    ("&#39;", '\''),
    ("&amp;", '&'),
];

/// 将占位符片段转义为 HTML 实体表示
///
/// 对每个 [% ... %] 片段整体 (含分隔符) 做实体替换, 片段外的文本原样保留.
/// 无片段时借用输入.
pub fn encode_for_html(text: &str) -> Cow<'_, str> {
    PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| escape_html(&caps[0]))
}

/// 将 HTML 实体表示的占位符片段还原
///
/// encode_for_html 的逆操作. 单遍扫描, 不二次解码.
///
/// 固有限制: 片段内的字面实体文本与编码产物无法区分,
/// 先还原再转义不保证复原输入 (不做修复).
pub fn decode_from_html(text: &str) -> Cow<'_, str> {
    PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| unescape_html(&caps[0]))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }

    out
}

fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }

            // 不成实体的 & 原样通过
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
