//! 対話ループ
//!
//! 1 行読む → シェル風に分割 → `CommandHandler` へ渡す → 結果を書き出す。
//! 1 コマンドを処理し終えるまで次の行は読まない。

use crate::application::{CommandHandler, Control};
use crate::domain::dict::DictRepository;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "Dictionary App - type 'help' for commands.";
pub const PROMPT: &str = "> ";

/// 行の分割に失敗した（引用符の対応が取れない）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unbalanced quotes")]
pub struct ParseError;

/// POSIX シェル風の分割。引用符で囲めば空白を含む定義も 1 トークンになる
///
/// `#` はコメントとして扱わず、普通の文字として残す。
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    shlex::split(&escape_hashes(line)).ok_or(ParseError)
}

/// 引用符の外にある `#` を `\#` にする（shlex は語頭の `#` 以降を捨てるため）
fn escape_hashes(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for ch in line.chars() {
        if escaped {
            escaped = false;
        } else {
            match (quote, ch) {
                (None, '#') => {
                    out.push_str("\\#");
                    continue;
                }
                (None, '\\') | (Some('"'), '\\') => escaped = true,
                (None, '\'' | '"') => quote = Some(ch),
                (Some(q), c) if c == q => quote = None,
                _ => {}
            }
        }
        out.push(ch);
    }
    out
}

/// `input` が尽きるか exit/quit まで処理を続ける
pub fn run<R, I, W>(handler: &mut CommandHandler<R>, input: I, output: &mut W) -> io::Result<()>
where
    R: DictRepository,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output, "\nBye!")?;
            return Ok(());
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(output, "Parse error: {e}")?;
                continue;
            }
        };

        let reply = handler.dispatch(&tokens);
        for text in &reply.lines {
            writeln!(output, "{text}")?;
        }
        if reply.control == Control::Exit {
            return Ok(());
        }
    }
}
