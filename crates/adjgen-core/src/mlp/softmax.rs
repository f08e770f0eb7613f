//! Softmax（正規化層）
//!
//! `output[i] = exp(input[i] - max) / Σ_j exp(input[j] - max)`
//!
//! 最大値を引いてから指数を取る。大きな logit で exp がオーバーフローしないための
//! 唯一の安全策なので省略しない。

/// 入力の最大値（空なら `None`）
#[inline]
fn max_value(data: &[f32]) -> Option<f32> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold(first, |max, &v| if v > max { v } else { max }))
}

/// Softmax（入出力別バッファ版）
///
/// - `input.len() == 0` の場合は何もしない
/// - 指数和が 0 以下の場合は割り算を省略し、正規化前の値を残す
///
/// # Panics
///
/// `input.len() != output.len()` の場合。
pub fn softmax(input: &[f32], output: &mut [f32]) {
    assert_eq!(input.len(), output.len(), "softmax buffers must have the same length");
    let Some(max_val) = max_value(input) else {
        return;
    };

    let mut sum = 0.0f32;
    for (out, &x) in output.iter_mut().zip(input) {
        *out = (x - max_val).exp();
        sum += *out;
    }

    if sum > 0.0 {
        for out in output.iter_mut() {
            *out /= sum;
        }
    }
}

/// Softmax（in-place 版）
///
/// 規則は [`softmax`] と同じ。
pub fn softmax_in_place(data: &mut [f32]) {
    let Some(max_val) = max_value(data) else {
        return;
    };

    let mut sum = 0.0f32;
    for v in data.iter_mut() {
        *v = (*v - max_val).exp();
        sum += *v;
    }

    if sum > 0.0 {
        for v in data.iter_mut() {
            *v /= sum;
        }
    }
}
