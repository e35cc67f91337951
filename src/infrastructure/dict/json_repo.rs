//! JSON ファイル版 DictRepository 実装
use crate::domain::dict::{DictRepository, Dictionary, LoadOutcome, parse_entries};
use serde_json::Value;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct JsonFileDictRepo {
    path: PathBuf,
}

impl JsonFileDictRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 書き込み途中の一時ファイル (`<file>.tmp`)
    pub fn tmp_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".tmp")
    }

    /// 破損ファイルの退避先 (`<file>.corrupt`)
    pub fn corrupt_backup_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".corrupt")
    }

    fn read(&self) -> Result<Dictionary, String> {
        let content = fs::read_to_string(&self.path).map_err(|e| e.to_string())?;
        let value: Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        let parsed = parse_entries(value)?;
        for key in &parsed.dropped {
            tracing::warn!(key = %key, "dropping dictionary entry that is empty or duplicates a trimmed word");
        }
        Ok(parsed.dict)
    }

    /// 次回保存で上書きされる前に破損ファイルを残しておく
    fn backup_corrupt(&self) {
        let backup = self.corrupt_backup_path();
        match fs::copy(&self.path, &backup) {
            Ok(_) => tracing::warn!("corrupt dictionary copied to {:?}", backup),
            Err(e) => tracing::warn!("could not back up corrupt dictionary: {}", e),
        }
    }
}

impl DictRepository for JsonFileDictRepo {
    fn load(&self) -> LoadOutcome {
        tracing::debug!("loading dictionary from {:?}", self.path);

        if !self.path.exists() {
            tracing::debug!("no dictionary file found, starting with empty store");
            return LoadOutcome::Missing;
        }

        match self.read() {
            Ok(dict) => {
                tracing::info!("loaded {} dictionary entries", dict.len());
                LoadOutcome::Loaded(dict)
            }
            Err(reason) => {
                tracing::warn!(
                    "dictionary file {:?} is unreadable ({}); starting empty",
                    self.path,
                    reason
                );
                self.backup_corrupt();
                LoadOutcome::Corrupt { reason }
            }
        }
    }

    fn save(&self, dict: &Dictionary) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(dict)?;
        let tmp = self.tmp_path();

        let written = (|| -> io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(content.as_bytes())?;
            f.sync_all()?;
            Ok(())
        })();

        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        tracing::debug!("persisted {} entries to {:?}", dict.len(), self.path);
        Ok(())
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
