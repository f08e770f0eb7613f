//! 自己回帰デコードループ
//!
//! # 状態遷移
//!
//! ```text
//! Start ──▶ DecodeStep ──┬─▶ (終端記号) ───────▶ Done(EndSymbol)
//!              ▲          ├─▶ (開始記号) ─ skip ─┐
//!              │          └─▶ (可視文字) ─ push ─┤
//!              └─────────────────────────────────┘
//!                    ステップ上限到達 ──────────▶ Done(StepBudget)
//! ```
//!
//! 各ステップ:
//! 1. 入力エンコーディングを組み立てる（one-hot + 位置）
//! 2. ネットワークで確率分布を得る
//! 3. 温度補正（T ≠ 1.0 のとき）
//! 4. カテゴリカルサンプリング
//! 5. 記号に応じて遷移
//!
//! 直前にサンプルした記号が次の入力になる（開始記号を読み飛ばした場合も同様）。

use rand::Rng;

use super::categorical::sample;
use super::encoding::encode_input;
use super::temperature::apply_temperature;
use crate::config::GenerationConfig;
use crate::mlp::{Network, NetworkRunner};
use crate::model::Vocabulary;
use crate::stats::{count_dropped_char, count_start_skip, count_termination};

/// 生成の終了理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// 終端記号がサンプルされた
    EndSymbol,
    /// ステップ上限に達した（打ち切り。エラーではない）
    StepBudget,
}

impl Termination {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndSymbol => "end-symbol",
            Self::StepBudget => "step-budget",
        }
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSequence {
    /// 可視文字列（開始・終端記号は含まない。空もあり得る）
    pub text: String,
    /// 終了理由
    pub termination: Termination,
    /// 実行したデコードステップ数（= 推論回数）
    pub steps: usize,
}

impl GeneratedSequence {
    /// 文字列を取り出す
    pub fn into_string(self) -> String {
        self.text
    }

    /// 文字数
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// 空文字列か
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for GeneratedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// シーケンスサンプラー
///
/// `NetworkRunner` と入力・確率の作業バッファを所有する。
/// 1インスタンス = 1セッション（同時に使う場合はインスタンスを分ける）。
pub struct SequenceSampler<'a> {
    runner: NetworkRunner<'a>,
    vocab: Vocabulary,
    config: GenerationConfig,
    /// 入力エンコーディング（vocab_size + 1）
    input: Box<[f32]>,
    /// 確率分布（vocab_size）
    probs: Box<[f32]>,
}

impl<'a> SequenceSampler<'a> {
    /// 新しいサンプラーを作成
    ///
    /// # Panics
    ///
    /// ネットワークの入出力次元が語彙と合わない場合（構築時の設定ミス）。
    pub fn new(network: &'a Network, vocab: Vocabulary, config: GenerationConfig) -> Self {
        assert_eq!(
            network.input_dim(),
            vocab.size() + 1,
            "network input must be one-hot vocabulary plus position"
        );
        assert_eq!(network.output_dim(), vocab.size(), "network output must cover the vocabulary");
        Self {
            runner: NetworkRunner::new(network),
            input: vec![0.0; vocab.size() + 1].into_boxed_slice(),
            probs: vec![0.0; vocab.size()].into_boxed_slice(),
            vocab,
            config,
        }
    }

    /// 語彙
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// 生成設定
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// 生成設定を変更
    pub fn set_config(&mut self, config: GenerationConfig) {
        self.config = config;
    }

    /// 1ステップ分の確率分布を計算（温度補正込み）
    ///
    /// 戻り値のスライスは次の呼び出しまで有効。
    pub fn step_distribution(&mut self, symbol: usize, step: usize) -> &[f32] {
        encode_input(&mut self.input, symbol, step, self.config.max_steps);
        self.runner.infer(&self.input, &mut self.probs);
        apply_temperature(&mut self.probs, self.config.temperature);
        &self.probs
    }

    /// 設定された容量で1語を生成
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GeneratedSequence {
        let capacity = self.config.capacity;
        self.generate_with_capacity(rng, capacity)
    }

    /// 1語を生成
    ///
    /// `capacity` は終端分を含むバッファ容量で、可視文字は最大 `capacity - 1`。
    /// 容量を超えた文字は捨てるが、ステップは続行する。
    pub fn generate_with_capacity<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        capacity: usize,
    ) -> GeneratedSequence {
        let limit = capacity.saturating_sub(1);
        let mut text = String::with_capacity(limit);
        let mut len = 0usize;
        let mut symbol = self.vocab.start_symbol();
        let mut termination = Termination::StepBudget;
        let mut steps = 0usize;

        for step in 0..self.config.max_steps {
            steps = step + 1;
            let probs = self.step_distribution(symbol, step);
            symbol = sample(probs, rng);
            log::trace!("step {step}: sampled symbol {symbol}");

            if self.vocab.is_end(symbol) {
                termination = Termination::EndSymbol;
                break;
            }
            if self.vocab.is_start(symbol) {
                count_start_skip!();
                continue;
            }
            match self.vocab.symbol_to_char(symbol) {
                Some(c) if len < limit => {
                    text.push(c);
                    len += 1;
                }
                _ => {
                    count_dropped_char!();
                }
            }
        }

        count_termination!(termination);
        log::debug!("generated {text:?} ({termination}, {steps} steps)");
        GeneratedSequence {
            text,
            termination,
            steps,
        }
    }
}
