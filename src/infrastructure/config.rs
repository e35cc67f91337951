use crate::error::{DictError, Result};
use crate::utils::config::EnvConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

const APP_NAME: &str = "word_dict";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub dict_path: Option<String>,
}

/// データディレクトリ（無ければ作成）
pub fn data_dir(env: &EnvConfig) -> Result<PathBuf> {
    let dir = if let Some(xdg_data_home) = &env.xdg_data_home {
        PathBuf::from(xdg_data_home).join(APP_NAME)
    } else {
        let proj = ProjectDirs::from("com", "user", APP_NAME)
            .ok_or_else(|| DictError::Config("cannot resolve platform dirs".into()))?;
        proj.data_local_dir().to_path_buf()
    };
    fs::create_dir_all(&dir)
        .map_err(|e| DictError::Config(format!("create data dir {:?}: {}", dir, e)))?;
    Ok(dir)
}

pub fn config_path(env: &EnvConfig) -> Result<PathBuf> {
    Ok(data_dir(env)?.join("config.json"))
}

pub fn default_dict_path(env: &EnvConfig) -> Result<PathBuf> {
    Ok(data_dir(env)?.join("dictionary.json"))
}

/// 辞書ファイルの場所を決定する
///
/// 優先順位: CLI 引数 > `WORD_DICT_PATH` > config.json > データディレクトリ既定値
pub fn resolve_dict_path(cli_override: Option<&Path>, env: &EnvConfig) -> Result<PathBuf> {
    if let Some(p) = cli_override {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = &env.dict_path {
        return Ok(PathBuf::from(p));
    }
    AppConfig::load(&config_path(env)?).dict_path(env)
}

impl AppConfig {
    /// 読めない・壊れている場合は既定値
    pub fn load(path: &Path) -> Self {
        if let Ok(f) = fs::File::open(path) {
            if let Ok(cfg) = serde_json::from_reader(f) {
                return cfg;
            }
            tracing::warn!("ignoring malformed config file {:?}", path);
        }
        AppConfig::default()
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        {
            let f = fs::File::create(&tmp)?;
            serde_json::to_writer_pretty(&f, self)?;
            f.sync_all()?;
        }
        fs::rename(tmp, path)?;
        Ok(())
    }

    pub fn dict_path(&self, env: &EnvConfig) -> Result<PathBuf> {
        if let Some(p) = &self.dict_path {
            Ok(PathBuf::from(p))
        } else {
            default_dict_path(env)
        }
    }

    /// 辞書の保存先を変更し、既存の辞書ファイルがあれば移動する
    ///
    /// 旧ファイルは `.bak` として残す。
    pub fn set_dict_path(&mut self, env: &EnvConfig, new_path: PathBuf) -> Result<()> {
        let old = self.dict_path(env)?;
        if old != new_path {
            move_dictionary(&old, &new_path)
                .map_err(|e| DictError::Config(format!("move dictionary: {}", e)))?;
            self.dict_path = Some(new_path.to_string_lossy().to_string());
            self.save(&config_path(env)?)
                .map_err(|e| DictError::Config(format!("save config: {}", e)))?;
            tracing::info!("dictionary path set to {:?}", new_path);
        }
        Ok(())
    }
}

fn move_dictionary(old: &Path, new_path: &Path) -> io::Result<()> {
    if let Some(parent) = new_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if old.exists() && !new_path.exists() {
        let bak = old.with_extension("bak");
        if bak.exists() {
            fs::remove_file(&bak)?;
        }
        fs::rename(old, &bak)?;
        fs::copy(&bak, new_path)?;
    }
    Ok(())
}
