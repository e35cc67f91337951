//! グローバル環境変数設定
//!
//! アプリケーション全体で使用する環境変数を一元管理。
//! プロセス起動時に一度だけ初期化し、以降はどこからでもアクセス可能。

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// グローバル環境変数設定
static ENV_CONFIG: OnceCell<Arc<EnvConfig>> = OnceCell::new();

/// 環境変数設定
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// XDG Data Home ディレクトリ
    pub xdg_data_home: Option<String>,
    /// 辞書ファイルのパス（設定ファイルより優先）
    pub dict_path: Option<String>,
    /// 環境変数ファイルのパス
    pub env_path: Option<String>,
}

impl EnvConfig {
    /// 現在のプロセス環境から読み取る
    pub fn from_env() -> Self {
        EnvConfig {
            xdg_data_home: non_empty_var("XDG_DATA_HOME"),
            dict_path: non_empty_var("WORD_DICT_PATH"),
            env_path: non_empty_var("WORD_DICT_ENV_PATH"),
        }
    }

    /// 環境変数から設定を初期化
    ///
    /// アプリケーション起動時に呼び出す。
    /// 既に初期化済みの場合は何もしない（冪等）。
    pub fn init() {
        if ENV_CONFIG.get().is_some() {
            return;
        }
        let _ = ENV_CONFIG.set(Arc::new(Self::from_env()));
    }

    /// 設定を取得（未初期化なら現在の環境から初期化する）
    pub fn get() -> Arc<EnvConfig> {
        ENV_CONFIG
            .get_or_init(|| Arc::new(Self::from_env()))
            .clone()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        EnvConfig::init();
        let first = EnvConfig::get();
        EnvConfig::init();
        let second = EnvConfig::get();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn default_has_no_overrides() {
        let config = EnvConfig::default();
        assert!(config.dict_path.is_none());
        assert!(config.xdg_data_home.is_none());
    }
}
