//! adjgen-core: 小規模全結合ネットワークの推論カーネルと文字列サンプラー
//!
//! # 構成
//!
//! ```text
//! SequenceSampler ──▶ NetworkRunner ──▶ DenseLayer × k ──▶ Softmax
//!        ▲                                                   │
//!        └──────────── 確率分布（温度補正 → カテゴリカルサンプリング）
//! ```
//!
//! - [`mlp`]: 全結合層・Softmax・ネットワーク実行器
//! - [`model`]: 組み込みの形容詞生成モデル（語彙・トポロジ・重み）
//! - [`sampler`]: 自己回帰的な1文字ずつのデコードループ
//! - [`config`]: 生成パラメータ（TOML から読み込み可能）
//!
//! 重みは起動時に一度だけ構築され、以降は読み取り専用。
//! 中間バッファは [`mlp::NetworkRunner`] がセッションごとに保持する。

pub mod config;
pub mod mlp;
pub mod model;
pub mod sampler;
pub mod stats;

pub use config::{ConfigError, GenerationConfig};
pub use mlp::{Activation, DenseLayer, LayerSpec, Network, NetworkError, NetworkRunner};
pub use model::{Vocabulary, adjective_network};
pub use sampler::{GeneratedSequence, SequenceSampler, Termination, WordGenerator, seeded_rng};
