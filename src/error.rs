//! 統一エラーハンドリング
//!
//! このモジュールは word_dict 全体で使用する統一エラー型を定義します。
//! 検証エラーはコマンド層でメッセージに変換され、プロセスを止めることはありません。

use thiserror::Error;

/// word_dict 全体で使用する統一エラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    // ========================================
    // 入力検証エラー
    // ========================================
    #[error("word must not be empty")]
    EmptyWord,

    #[error("definition must not be empty")]
    EmptyDefinition,

    #[error("'{0}' already exists")]
    AlreadyExists(String),

    #[error("'{0}' not found")]
    NotFound(String),

    // ========================================
    // 永続化エラー
    // ========================================
    #[error("failed to save dictionary: {0}")]
    Persistence(String),

    // ========================================
    // 設定関連エラー
    // ========================================
    #[error("configuration error: {0}")]
    Config(String),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, DictError>;

impl From<std::io::Error> for DictError {
    fn from(error: std::io::Error) -> Self {
        DictError::Persistence(error.to_string())
    }
}

// ========================================
// ヘルパー関数
// ========================================

impl DictError {
    /// 入力検証で弾かれたエラーかどうか（副作用なし）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DictError::EmptyWord
                | DictError::EmptyDefinition
                | DictError::AlreadyExists(_)
                | DictError::NotFound(_)
        )
    }

    /// エラーの重要度レベルを取得
    pub fn severity(&self) -> ErrorSeverity {
        if self.is_validation() {
            ErrorSeverity::Info
        } else {
            ErrorSeverity::Error
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 利用者の入力ミス。処理は継続
    Info,
    /// 環境起因の失敗
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert!(DictError::EmptyWord.is_validation());
        assert!(DictError::AlreadyExists("cat".into()).is_validation());
        assert!(!DictError::Persistence("disk full".into()).is_validation());
    }

    #[test]
    fn io_error_maps_to_persistence() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DictError = io.into();
        assert!(matches!(err, DictError::Persistence(_)));
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(err.to_string().starts_with("failed to save dictionary"));
    }
}
