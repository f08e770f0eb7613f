//! ネットワーク構築時のエラー型
//!
//! 推論中のサイズ不一致はプログラミングエラーとして panic させる。
//! ここで扱うのは構築（重みの組み立て）時に検出できる不整合のみ。

/// ネットワーク構築エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// 層が1つもない
    #[error("network has no layers")]
    EmptyTopology,

    /// 入力または出力次元が 0 の層
    #[error("layer {layer} has a zero dimension ({input_dim} -> {output_dim})")]
    EmptyLayer {
        layer: usize,
        input_dim: usize,
        output_dim: usize,
    },

    /// 前段の出力次元と入力次元が一致しない
    #[error("layer {layer} expects input dim {expected}, previous layer produces {actual}")]
    DimensionMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// 重みの要素数が output_dim × input_dim と一致しない
    #[error("layer {layer} weight count mismatch: expected {expected}, got {actual}")]
    WeightCount {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// バイアスの要素数が output_dim と一致しない
    #[error("layer {layer} bias count mismatch: expected {expected}, got {actual}")]
    BiasCount {
        layer: usize,
        expected: usize,
        actual: usize,
    },
}

/// ネットワーク構築結果
pub type NetworkResult<T> = Result<T, NetworkError>;
