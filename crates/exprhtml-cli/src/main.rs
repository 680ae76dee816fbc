//! exprhtml 命令行终端
//!
//! 对模板文件运行占位符转义: encode 将 [% ... %] 片段转义为
//! HTML 实体表示, decode 还原.

mod utils;

use std::fs;

use anyhow::{Result, bail};
use expr_escape::{decode_from_html, encode_for_html};

const GIT_REPOSITORY: &str = "https://github.com/fltLi/exprhtml";

/// 单次工作
fn run() -> Result<()> {
    println!();

    let mode = readln! {"mode (encode / decode)"};
    let input = readln! {"input"};
    let output = readln! {"output"};

    let text = fs::read_to_string(&input)?;

    let result = match mode.trim() {
        "encode" => encode_for_html(&text),
        "decode" => decode_from_html(&text),
        mode => bail!("unknown mode: `{mode}`"),
    };

    fs::write(&output, result.as_bytes())?;

    println!("done: {input} -> {output}");
    flush! {};

    Ok(())
}

fn main() {
    println!("exprhtml-cli\n{GIT_REPOSITORY}");
    flush! {};

    loop {
        if let Err(e) = run() {
            println!("failed: {e}");
            flush! {};
        }

        pause! {};
    }
}
