//! 組み込みモデルの重み構築
//!
//! 学習済み定数の代わりに、コーパスのバイグラム統計から決定的に重みを組み立てる。
//! 外部ファイルは読まない。
//!
//! # 構成
//!
//! ```text
//! input [V+1] = one-hot(記号) ++ [位置]
//!    ↓  L0 (V+1 → H) ReLU : 先頭 V+1 ユニットへ恒等コピー
//!    ↓  L1..L{n-1} (H → H) ReLU : 先頭 V+1 ユニットを恒等で通過
//!    ↓  Out (H → V) : logit[n] = ln P(n | 記号) + [n == 終端] * (GAIN * 位置 + BIAS)
//!    ↓  Softmax（NetworkRunner 側）
//! ```
//!
//! 入力は全て非負（one-hot と位置 ∈ [0, 1)）なので、途中の ReLU で値は変わらない。

use crate::mlp::{Activation, DenseLayer, LayerSpec, Network, NetworkResult};

use super::constants::{BIGRAM_SMOOTHING, END_BIAS, END_POSITION_GAIN};
use super::vocab::Vocabulary;

/// 層記述子の並びを生成
///
/// `input_dim → hidden_dim × hidden_layers → output_dim`（隠れ層は ReLU、出力は恒等）
pub fn mlp_topology(
    input_dim: usize,
    hidden_dim: usize,
    hidden_layers: usize,
    output_dim: usize,
) -> Vec<LayerSpec> {
    let mut specs = Vec::with_capacity(hidden_layers + 1);
    let mut prev = input_dim;
    for _ in 0..hidden_layers {
        specs.push(LayerSpec::new(prev, hidden_dim, Activation::ReLU));
        prev = hidden_dim;
    }
    specs.push(LayerSpec::new(prev, output_dim, Activation::None));
    specs
}

/// バイグラムの対数確率表 `log_probs[prev][next]`
///
/// 加算スムージング付き。語彙外の文字を含む語は読み飛ばす。
pub fn bigram_log_probs(vocab: &Vocabulary, words: &[&str]) -> Vec<Vec<f32>> {
    let size = vocab.size();
    let mut counts = vec![vec![0u32; size]; size];

    for (i, word) in words.iter().enumerate() {
        let Some(encoded) = vocab.encode_word(word) else {
            log::warn!("Skipping word {}: {word:?} is not in the vocabulary", i + 1);
            continue;
        };
        for pair in encoded.windows(2) {
            counts[pair[0]][pair[1]] += 1;
        }
    }

    counts
        .iter()
        .map(|row| {
            let total: u32 = row.iter().sum();
            let denom = total as f32 + BIGRAM_SMOOTHING * size as f32;
            row.iter().map(|&c| ((c as f32 + BIGRAM_SMOOTHING) / denom).ln()).collect()
        })
        .collect()
}

/// コーパスから重みを組み立ててネットワークを構築
///
/// `hidden_dim` は入力次元（語彙サイズ + 1）以上であること。
pub fn bake_bigram_network(
    vocab: &Vocabulary,
    words: &[&str],
    hidden_dim: usize,
    hidden_layers: usize,
) -> NetworkResult<Network> {
    let size = vocab.size();
    let input_dim = size + 1;
    let position = size;
    assert!(hidden_dim >= input_dim, "hidden layer too narrow to carry the input");

    let specs = mlp_topology(input_dim, hidden_dim, hidden_layers, size);
    let log_probs = bigram_log_probs(vocab, words);
    let mut layers = Vec::with_capacity(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        let mut weights = vec![0.0f32; spec.weight_count()];
        let mut biases = vec![0.0f32; spec.output_dim];
        let carry = spec.input_dim.min(input_dim);

        if index + 1 < specs.len() {
            // 隠れ層: 先頭 input_dim ユニットへ恒等コピー
            for k in 0..carry {
                weights[k * spec.input_dim + k] = 1.0;
            }
        } else {
            // 出力層: 前の記号ごとの対数確率 + 位置に応じた終端バイアス
            for (prev, row) in log_probs.iter().enumerate() {
                for (next, &lp) in row.iter().enumerate() {
                    weights[next * spec.input_dim + prev] = lp;
                }
            }
            if carry > position {
                weights[vocab.end_symbol() * spec.input_dim + position] = END_POSITION_GAIN;
            }
            biases[vocab.end_symbol()] = END_BIAS;
        }

        layers.push(DenseLayer::new(index, *spec, weights, biases)?);
    }

    Network::new(layers)
}
