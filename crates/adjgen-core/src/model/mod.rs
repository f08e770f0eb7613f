//! 組み込みの形容詞生成モデル
//!
//! ```text
//! input [29] = one-hot(28) ++ [位置]
//!    ↓  Dense 29→256 ReLU
//!    ↓  Dense 256→256 ReLU × 3
//!    ↓  Dense 256→28
//!    ↓  Softmax
//! output [28]
//! ```
//!
//! 重みはプロセス内で一度だけ構築され（[`adjective_network`]）、以降は読み取り専用。
mod constants;
mod corpus;
mod vocab;
mod weights;

pub use constants::*;
pub use corpus::ADJECTIVES;
pub use vocab::{END_CHAR, START_CHAR, Vocabulary};
pub use weights::{bake_bigram_network, bigram_log_probs, mlp_topology};

use crate::mlp::{LayerSpec, Network};
use std::sync::LazyLock;

/// 組み込みネットワーク（初回アクセス時に構築）
static ADJECTIVE_NETWORK: LazyLock<Network> = LazyLock::new(|| {
    let vocab = Vocabulary::lowercase_ascii();
    match bake_bigram_network(&vocab, ADJECTIVES, HIDDEN_DIM, HIDDEN_LAYERS) {
        Ok(network) => network,
        // 定数から組み立てるので失敗はビルド設定の誤り
        Err(e) => panic!("built-in adjective network is inconsistent: {e}"),
    }
});

/// 組み込みの形容詞ネットワーク
pub fn adjective_network() -> &'static Network {
    &ADJECTIVE_NETWORK
}

/// 組み込みネットワークの層記述子（29-256-256-256-256-28）
pub fn adjective_topology() -> Vec<LayerSpec> {
    mlp_topology(INPUT_DIM, HIDDEN_DIM, HIDDEN_LAYERS, OUTPUT_DIM)
}
