//! 辞書サービス
//!
//! # 責任
//! - オンメモリ辞書の保持と不変条件の維持（キー一意・定義は空でない）
//! - 変更操作のたびに全体を永続化（成功を返すのは書き込み完了後）
//! - 完全一致で見つからなかった場合の類似語提案

use crate::domain::dict::{DictRepository, Dictionary};
use crate::domain::fuzzy::{self, DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_SIMILARITY};
use crate::error::{DictError, Result};

/// 検索結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// 完全一致した定義
    Found(String),
    /// 見つからなかった（提案は空のこともある）
    Missing { suggestions: Vec<String> },
}

/// 辞書サービス
pub struct DictService<R: DictRepository> {
    entries: Dictionary,
    repo: R,
}

impl<R: DictRepository> DictService<R> {
    /// リポジトリから読み込んで作成（読めなければ空で開始）
    pub fn open(repo: R) -> Self {
        let entries = repo.load().into_dictionary();
        Self { entries, repo }
    }

    pub fn entries(&self) -> &Dictionary {
        &self.entries
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 完全一致検索。見つからない場合は類似語を提案する（副作用なし）
    pub fn lookup(&self, word: &str) -> Result<Lookup> {
        let word = require_word(word)?;
        if let Some(definition) = self.entries.get(word) {
            return Ok(Lookup::Found(definition.clone()));
        }
        let suggestions = fuzzy::suggest(
            word,
            self.entries.keys().map(String::as_str),
            DEFAULT_MAX_SUGGESTIONS,
            DEFAULT_MIN_SIMILARITY,
        );
        Ok(Lookup::Missing { suggestions })
    }

    /// 新規登録。既に存在する場合は失敗。戻り値は保存した単語
    pub fn add(&mut self, word: &str, definition: &str) -> Result<String> {
        let word = require_word(word)?;
        let definition = require_definition(definition)?;
        if self.entries.contains_key(word) {
            return Err(DictError::AlreadyExists(word.to_string()));
        }

        self.entries.insert(word.to_string(), definition.to_string());
        if let Err(e) = self.persist() {
            self.entries.remove(word);
            return Err(e);
        }
        tracing::info!(word, "entry added");
        Ok(word.to_string())
    }

    /// 定義の置換。存在しない場合は失敗
    pub fn edit(&mut self, word: &str, definition: &str) -> Result<String> {
        let word = require_word(word)?;
        let definition = require_definition(definition)?;
        let Some(slot) = self.entries.get_mut(word) else {
            return Err(DictError::NotFound(word.to_string()));
        };

        let previous = std::mem::replace(slot, definition.to_string());
        if let Err(e) = self.persist() {
            self.entries.insert(word.to_string(), previous);
            return Err(e);
        }
        tracing::info!(word, "entry updated");
        Ok(word.to_string())
    }

    /// 削除。存在しない場合は失敗
    pub fn remove(&mut self, word: &str) -> Result<String> {
        let word = require_word(word)?;
        let Some(previous) = self.entries.remove(word) else {
            return Err(DictError::NotFound(word.to_string()));
        };

        if let Err(e) = self.persist() {
            self.entries.insert(word.to_string(), previous);
            return Err(e);
        }
        tracing::info!(word, "entry removed");
        Ok(word.to_string())
    }

    /// 単語一覧（辞書順）。`prefix` は大文字小文字を区別しない前方一致
    pub fn list(&self, prefix: Option<&str>) -> Vec<String> {
        let prefix = prefix.map(str::to_lowercase).unwrap_or_default();
        self.entries
            .keys()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }

    /// 強制保存（変更がなくても全体を書き直す）
    pub fn save(&self) -> Result<()> {
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.repo.save(&self.entries).map_err(|e| {
            tracing::error!("failed to persist dictionary: {}", e);
            DictError::Persistence(e.to_string())
        })
    }
}

fn require_word(word: &str) -> Result<&str> {
    let word = word.trim();
    if word.is_empty() {
        return Err(DictError::EmptyWord);
    }
    Ok(word)
}

fn require_definition(definition: &str) -> Result<&str> {
    let definition = definition.trim();
    if definition.is_empty() {
        return Err(DictError::EmptyDefinition);
    }
    Ok(definition)
}
