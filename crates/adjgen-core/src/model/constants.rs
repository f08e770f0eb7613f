//! 組み込みモデルの定数定義
//!
//! 次元定数と生成パラメータの既定値。

// =============================================================================
// 語彙
// =============================================================================

/// 語彙サイズ（開始記号 + a-z + 終端記号）
pub const VOCAB_SIZE: usize = 28;

/// 開始記号 `^` のインデックス
pub const START_SYMBOL: usize = 0;

/// 終端記号 `$` のインデックス
pub const END_SYMBOL: usize = VOCAB_SIZE - 1; // 27

/// 入力次元（one-hot 28 + 位置スカラー 1）
pub const INPUT_DIM: usize = VOCAB_SIZE + 1; // 29

/// 位置スカラーの入力インデックス（末尾）
pub const POSITION_INPUT: usize = INPUT_DIM - 1; // 28

// =============================================================================
// トポロジ
// =============================================================================

/// 隠れ層の幅
pub const HIDDEN_DIM: usize = 256;

/// 隠れ層（ReLU）の数
pub const HIDDEN_LAYERS: usize = 4;

/// 出力次元（確率分布）
pub const OUTPUT_DIM: usize = VOCAB_SIZE;

// =============================================================================
// 生成パラメータ
// =============================================================================

/// 1語の最大文字数（= デコードのステップ上限）
pub const MAX_WORD_LEN: usize = 9;

/// 位置スカラーの分母（開始記号を含む系列長）
pub const SEQ_LEN: usize = MAX_WORD_LEN + 1; // 10

/// 既定の温度
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// 温度補正で log(0) を避けるための加算定数
pub const LOG_EPSILON: f32 = 1e-10;

// =============================================================================
// 重み構築
// =============================================================================

/// バイグラム頻度の加算スムージング
pub const BIGRAM_SMOOTHING: f32 = 0.05;

/// 終端記号 logit に加える位置依存の重み（位置スカラー 1.0 あたり）
pub const END_POSITION_GAIN: f32 = 8.0;

/// 終端記号 logit の定数バイアス
///
/// 語頭付近での早すぎる終端を抑える。`END_POSITION_GAIN` と合わせて
/// 位置 0.5 で打ち消し合う。
pub const END_BIAS: f32 = -4.0;
