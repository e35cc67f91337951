//! 対話コマンドハンドラー
//!
//! # 責任
//! - トークン列をコマンドへ変換（引数の個数チェックのみ）
//! - 辞書サービスへの委譲
//! - 結果の表示用メッセージ生成
//!
//! 業務ルールの検証は `DictService` 側で行う。

use crate::application::dict_service::{DictService, Lookup};
use crate::domain::dict::DictRepository;
use crate::error::{DictError, ErrorSeverity};

pub const HELP_TEXT: &str = "\
Commands:
  help                     Show commands
  lookup WORD              Show definition of WORD
  add WORD DEFINITION...   Add WORD with DEFINITION (fails if exists)
  edit WORD DEFINITION...  Replace definition of WORD
  remove WORD              Delete WORD
  list [PREFIX]            List words, optionally filtered by PREFIX
  save                     Force save to disk
  exit | quit              Exit the app";

pub const INVALID_COMMAND: &str = "Unknown or invalid command. Type 'help'.";

/// 解析済みコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Lookup(String),
    Add { word: String, definition: String },
    Edit { word: String, definition: String },
    Remove(String),
    List(Option<String>),
    Save,
    Exit,
    /// 未知のコマンド、または引数不足
    Invalid,
}

impl Command {
    /// 先頭トークンをコマンド名（大文字小文字を区別しない）、残りを引数として解釈
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let Some((name, args)) = tokens.split_first() else {
            return Command::Invalid;
        };
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        match (name.as_ref().to_lowercase().as_str(), args.as_slice()) {
            ("exit" | "quit", _) => Command::Exit,
            ("help", _) => Command::Help,
            ("lookup", [word, ..]) => Command::Lookup(word.to_string()),
            ("add", [word, rest @ ..]) if !rest.is_empty() => Command::Add {
                word: word.to_string(),
                definition: rest.join(" "),
            },
            ("edit", [word, rest @ ..]) if !rest.is_empty() => Command::Edit {
                word: word.to_string(),
                definition: rest.join(" "),
            },
            ("remove", [word, ..]) => Command::Remove(word.to_string()),
            ("list", rest) => Command::List(rest.first().map(|p| p.to_string())),
            ("save", _) => Command::Save,
            _ => Command::Invalid,
        }
    }
}

/// ループ継続 / 終了
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// 1 コマンドの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub control: Control,
    /// 未知のコマンドや保存失敗など、終了コードに反映すべき失敗
    pub failed: bool,
}

impl Reply {
    fn ok(lines: Vec<String>) -> Self {
        Self {
            lines,
            control: Control::Continue,
            failed: false,
        }
    }

    fn line(text: impl Into<String>) -> Self {
        Self::ok(vec![text.into()])
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            failed: true,
            ..Self::line(text)
        }
    }
}

/// コマンドハンドラー
pub struct CommandHandler<R: DictRepository> {
    service: DictService<R>,
}

impl<R: DictRepository> CommandHandler<R> {
    pub fn new(service: DictService<R>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &DictService<R> {
        &self.service
    }

    /// トークン列を解釈して処理
    pub fn dispatch<S: AsRef<str>>(&mut self, tokens: &[S]) -> Reply {
        self.handle(Command::parse(tokens))
    }

    pub fn handle(&mut self, cmd: Command) -> Reply {
        tracing::debug!(?cmd, "dispatching command");
        match cmd {
            Command::Help => Reply::line(HELP_TEXT),
            Command::Lookup(word) => self.handle_lookup(&word),
            Command::Add { word, definition } => {
                render(self.service.add(&word, &definition), Mutation::Add)
            }
            Command::Edit { word, definition } => {
                render(self.service.edit(&word, &definition), Mutation::Edit)
            }
            Command::Remove(word) => render(self.service.remove(&word), Mutation::Remove),
            Command::List(prefix) => self.handle_list(prefix.as_deref()),
            Command::Save => match self.service.save() {
                Ok(()) => Reply::line("Saved."),
                Err(e) => Reply::failure(format!("Error: {e}")),
            },
            Command::Exit => Reply {
                control: Control::Exit,
                ..Reply::line("Bye!")
            },
            Command::Invalid => Reply::failure(INVALID_COMMAND),
        }
    }

    fn handle_lookup(&self, word: &str) -> Reply {
        match self.service.lookup(word) {
            Ok(Lookup::Found(definition)) => Reply::line(format!("{}: {}", word.trim(), definition)),
            Ok(Lookup::Missing { suggestions }) => {
                let mut lines = vec![format!("'{}' not found.", word.trim())];
                if !suggestions.is_empty() {
                    lines.push("Did you mean:".to_string());
                    lines.extend(suggestions.iter().map(|s| format!("  - {s}")));
                }
                Reply::ok(lines)
            }
            Err(_) => Reply::line("Please provide a word to lookup."),
        }
    }

    fn handle_list(&self, prefix: Option<&str>) -> Reply {
        let words = self.service.list(prefix);
        if words.is_empty() {
            return Reply::line("No entries.");
        }
        Reply::ok(words)
    }
}

/// 変更系コマンドの種類（表示文言の切り替え用）
#[derive(Debug, Clone, Copy)]
enum Mutation {
    Add,
    Edit,
    Remove,
}

impl Mutation {
    fn usage(self) -> &'static str {
        match self {
            Mutation::Add => "Usage: add WORD DEFINITION...",
            Mutation::Edit => "Usage: edit WORD DEFINITION...",
            Mutation::Remove => "Usage: remove WORD",
        }
    }

    fn done(self, word: &str) -> String {
        match self {
            Mutation::Add => format!("Added '{word}'."),
            Mutation::Edit => format!("Updated '{word}'."),
            Mutation::Remove => format!("Removed '{word}'."),
        }
    }
}

/// 変更系コマンドの結果を表示用に変換
fn render(result: Result<String, DictError>, op: Mutation) -> Reply {
    if let Err(e) = &result {
        if e.severity() == ErrorSeverity::Info {
            tracing::debug!("{op:?} rejected: {e}");
        }
    }
    match result {
        Ok(word) => Reply::line(op.done(&word)),
        Err(DictError::EmptyWord | DictError::EmptyDefinition) => Reply::line(op.usage()),
        Err(DictError::AlreadyExists(w)) => {
            Reply::line(format!("'{w}' already exists. Use 'edit' to change it."))
        }
        Err(DictError::NotFound(w)) => match op {
            Mutation::Edit => Reply::line(format!("'{w}' does not exist. Use 'add' to create it.")),
            _ => Reply::line(format!("'{w}' not found.")),
        },
        Err(e) => Reply::failure(format!("Error: {e}")),
    }
}
