//! 温度補正
//!
//! ネットワークの Softmax 出力（確率）に対して適用する:
//!
//! ```text
//! p'[i] = softmax( ln(p[i] + ε) / T )
//! ```
//!
//! logit ではなく正規化済みの確率から対数を取り直す。最終 Softmax の前に
//! 温度を掛ける方式とは浮動小数点の丸めが異なるが、組み込み実機の出力分布に
//! 合わせてこの順序を保つ。

use crate::mlp::softmax_in_place;
use crate::model::LOG_EPSILON;

/// 温度補正を in-place で適用
///
/// `temperature == 1.0` の場合は何もしない（分布をそのまま返す）。
/// 温度の正値チェックは設定読み込み時（`GenerationConfig::validate`）に行う。
pub fn apply_temperature(probs: &mut [f32], temperature: f32) {
    if temperature == 1.0 {
        return;
    }
    for p in probs.iter_mut() {
        *p = (*p + LOG_EPSILON).ln() / temperature;
    }
    softmax_in_place(probs);
}
