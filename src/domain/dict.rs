//! 単語辞書エンティティとリポジトリ抽象 – ドメイン層

use serde_json::Value;
use std::collections::BTreeMap;
use std::io;

/// 単語 → 定義 のマッピング。キー順（辞書順）で保持する。
pub type Dictionary = BTreeMap<String, String>;

/// 辞書ファイル読み込みの結果
///
/// 「ファイルなし」「破損」はどちらも致命的ではなく、空の辞書として扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 正常に読み込めた
    Loaded(Dictionary),
    /// ファイルが存在しない
    Missing,
    /// 読み込み・パースに失敗した
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// 結果を辞書に変換（Missing / Corrupt は空）
    pub fn into_dictionary(self) -> Dictionary {
        match self {
            LoadOutcome::Loaded(dict) => dict,
            LoadOutcome::Missing | LoadOutcome::Corrupt { .. } => Dictionary::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }
}

/// 辞書永続化 I/F
pub trait DictRepository: Send + Sync {
    /// 永続化先から辞書を読み込む。失敗はエラーではなく `LoadOutcome` で表す。
    fn load(&self) -> LoadOutcome;

    /// 辞書全体を書き出して置き換える（部分書き込みはしない）
    fn save(&self, dict: &Dictionary) -> io::Result<()>;
}

/// パース結果（採用したエントリと、捨てたキー）
#[derive(Debug, Default)]
pub struct ParsedEntries {
    pub dict: Dictionary,
    pub dropped: Vec<String>,
}

/// JSON 値を辞書に変換します。
///
/// トップレベルがオブジェクトでなければ `Err`。
/// 文字列以外の値はテキストへ変換し、キーと値は前後の空白を落とす。
/// 空白のみのエントリは捨てる。前後の空白を落とすと同じキーになる場合は
/// もともと空白のないキーを優先し、それもなければキー順で先のものを残す。
pub fn parse_entries(value: Value) -> Result<ParsedEntries, String> {
    let map = match value {
        Value::Object(map) => map,
        other => return Err(format!("expected a JSON object, found {}", kind_of(&other))),
    };

    let mut parsed = ParsedEntries::default();
    let mut padded = Vec::new();
    for (key, value) in map {
        let text = coerce_to_text(value).trim().to_string();
        if key.trim().is_empty() || text.is_empty() {
            parsed.dropped.push(key);
        } else if key.trim() == key {
            parsed.dict.insert(key, text);
        } else {
            padded.push((key, text));
        }
    }

    for (key, text) in padded {
        let word = key.trim();
        if parsed.dict.contains_key(word) {
            parsed.dropped.push(key);
        } else {
            parsed.dict.insert(word.to_string(), text);
        }
    }
    Ok(parsed)
}

/// 値をテキストへ変換（文字列はそのまま、それ以外は JSON 表記）
pub fn coerce_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
