use crate::utils::config::EnvConfig;
use std::path::PathBuf;

/// Environment loading helpers.
///
/// Loads environment variables from `.env` if present, or from the file
/// specified by the `WORD_DICT_ENV_PATH` environment variable. Any errors
/// during loading are ignored.
pub fn load_env() {
    // 環境変数ファイルを読み込む（EnvConfigの初期化前に実行される）
    load_env_with(&EnvConfig::from_env());
}

/// `env_path` があればそのファイルを、なければ `.env` を読み込む。
/// 読み込めたファイルのパスを返す。
pub fn load_env_with(config: &EnvConfig) -> Option<PathBuf> {
    match &config.env_path {
        Some(path) => dotenvy::from_path(path).ok().map(|()| PathBuf::from(path)),
        None => dotenvy::dotenv().ok(),
    }
}
