use crate::utils::logging::DEFAULT_LOG_LEVEL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Word dictionary (interactive lookup / add / edit / remove)")]
pub struct Cli {
    /// 辞書ファイルのパス（設定より優先）
    #[arg(long, global = true)]
    pub dict: Option<PathBuf>,

    /// ログレベル（RUST_LOG が優先）
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// 対話モード（既定）
    Repl,
    /// 対話コマンドを 1 つだけ実行
    Run {
        /// 例: `run add cat "a small feline"`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// 各種設定操作
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// `dict-path` 設定
    Set {
        #[command(subcommand)]
        field: ConfigField,
    },
    /// 現在の辞書ファイルの場所を表示
    Show,
}

#[derive(Subcommand)]
pub enum ConfigField {
    /// 辞書ファイルの保存先を指定
    #[command(name = "dict-path")]
    DictPath { path: String },
}
