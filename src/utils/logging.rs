//! tracing の初期化
//!
//! 出力は stderr。コマンド結果 (stdout) と混ざらないようにする。

use tracing_subscriber::EnvFilter;

/// 既定のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// `RUST_LOG` を優先し、無ければ `level` を使う。二重初期化は無視する。
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
