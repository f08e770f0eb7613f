//! 形容詞モデルの周辺ツール
//!
//! バイナリ:
//! - `generate_words`: 生成語を標準出力に並べる（温度スイープ対応）
//! - `future_is`: 端末でのタイプライター表示

pub mod typewriter;

/// ログ初期化（`RUST_LOG` 未指定時は `level`）
pub fn init_logger(level: &str) {
    use std::io::Write;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();
}
