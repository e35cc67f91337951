//! 辞書ファイルを読み直して正規形（テキスト値・キー順・空エントリ除去）で書き出す
use std::path::PathBuf;
use word_dict::{
    JsonFileDictRepo,
    domain::dict::{DictRepository, LoadOutcome},
    infrastructure::config::resolve_dict_path,
    utils::{config::EnvConfig, env::load_env, logging},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env();
    EnvConfig::init();
    logging::init(logging::DEFAULT_LOG_LEVEL);

    // `migrate_dict [PATH]`
    let cli_path = std::env::args().nth(1).map(PathBuf::from);
    let path = resolve_dict_path(cli_path.as_deref(), &EnvConfig::get())?;
    let repo = JsonFileDictRepo::new(&path);

    let dict = match repo.load() {
        LoadOutcome::Loaded(dict) => dict,
        LoadOutcome::Missing => {
            println!("no dictionary at {}", path.display());
            return Ok(());
        }
        LoadOutcome::Corrupt { reason } => {
            return Err(format!("cannot migrate {}: {}", path.display(), reason).into());
        }
    };

    repo.save(&dict)?;
    println!("✅ dictionary migrated ({} entries)", dict.len());
    Ok(())
}
