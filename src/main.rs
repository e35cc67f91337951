//! word_dict CLI: 単語辞書の対話ツール。
//! 引数なしで対話モード、`run` で 1 コマンドだけ実行、`config` で設定操作。
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use word_dict::{
    CommandHandler, DictService, JsonFileDictRepo,
    cli::{Cli, Cmd, ConfigCmd, ConfigField},
    infrastructure::config::{AppConfig, config_path, resolve_dict_path},
    repl::{self, BANNER},
    utils::{config::EnvConfig, env::load_env, logging},
};

fn open_handler(
    dict: Option<&Path>,
    env: &EnvConfig,
) -> Result<CommandHandler<JsonFileDictRepo>, Box<dyn std::error::Error>> {
    let path = resolve_dict_path(dict, env)?;
    tracing::debug!("using dictionary file {:?}", path);
    let service = DictService::open(JsonFileDictRepo::new(path));
    Ok(CommandHandler::new(service))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 読み込み（EnvConfig より先）
    load_env();
    EnvConfig::init();

    let cli = Cli::parse();
    logging::init(&cli.log_level);
    let env = EnvConfig::get();

    match cli.cmd.unwrap_or(Cmd::Repl) {
        Cmd::Repl => {
            let mut handler = open_handler(cli.dict.as_deref(), &env)?;
            println!("{BANNER}");
            repl::run(&mut handler, io::stdin().lock(), &mut io::stdout().lock())?;
        }
        Cmd::Run { args } => {
            let mut handler = open_handler(cli.dict.as_deref(), &env)?;
            let reply = handler.dispatch(&args);
            for line in &reply.lines {
                println!("{line}");
            }
            if reply.failed {
                std::process::exit(1);
            }
        }
        Cmd::Config { action } => match action {
            ConfigCmd::Set {
                field: ConfigField::DictPath { path },
            } => {
                let mut cfg = AppConfig::load(&config_path(&env)?);
                cfg.set_dict_path(&env, PathBuf::from(&path))?;
                println!("dict-path set to {path}");
            }
            ConfigCmd::Show => {
                let path = resolve_dict_path(cli.dict.as_deref(), &env)?;
                println!("{}", path.display());
            }
        },
    }
    Ok(())
}
