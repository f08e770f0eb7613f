//! 入力エンコーディング
//!
//! ```text
//! input[0..V]  = one-hot(現在の記号)
//! input[V]     = step / (max_steps + 1)
//! ```

/// 入力ベクトルを組み立てる
///
/// バッファをゼロクリアしてから記号位置に 1、末尾に正規化した位置を書く。
///
/// # Panics
///
/// `symbol` が one-hot 部分（`buf.len() - 1`）の範囲外の場合。
#[inline]
pub fn encode_input(buf: &mut [f32], symbol: usize, step: usize, max_steps: usize) {
    let position = buf.len() - 1;
    assert!(symbol < position, "symbol {symbol} out of range for input of {}", buf.len());
    buf.fill(0.0);
    buf[symbol] = 1.0;
    buf[position] = step as f32 / (max_steps + 1) as f32;
}
