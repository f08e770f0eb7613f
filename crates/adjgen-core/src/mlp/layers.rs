//! 全結合層の実装
//!
//! - `dense_forward`: 1層分のアフィン変換 + 活性化（純粋関数）
//! - `DenseLayer`: 重み・バイアスを所有する層

use super::error::{NetworkError, NetworkResult};
use super::spec::{Activation, LayerSpec};

/// 全結合層の順伝播
///
/// `output[i] = activation(biases[i] + Σ_j input[j] * weights[i * input_dim + j])`
///
/// - `weights` は row-major `[output_dim × input_dim]`
/// - 累積は入力と同じ `f32` で行う
///
/// # Panics
///
/// バッファ長が `input.len() * output.len()` / `output.len()` と一致しない場合。
/// サイズは構築時に決まる契約であり、実行時に回復すべきエラーではない。
#[inline]
pub fn dense_forward(
    input: &[f32],
    weights: &[f32],
    biases: &[f32],
    output: &mut [f32],
    activation: Activation,
) {
    let input_dim = input.len();
    assert_eq!(
        weights.len(),
        input_dim * output.len(),
        "weight tensor does not match {}x{}",
        output.len(),
        input_dim
    );
    assert_eq!(biases.len(), output.len(), "bias vector does not match output size");

    if input_dim == 0 {
        for (out, &bias) in output.iter_mut().zip(biases) {
            *out = activation.apply(bias);
        }
        return;
    }

    // 行ごとに内積を取る（加算順は j の昇順で固定）
    for ((out, &bias), row) in output.iter_mut().zip(biases).zip(weights.chunks_exact(input_dim)) {
        let acc = row.iter().zip(input).fold(bias, |acc, (&w, &x)| acc + x * w);
        *out = activation.apply(acc);
    }
}

/// 全結合層
///
/// 重みとバイアスを所有し、構築後は変更されない。
#[derive(Debug, Clone)]
pub struct DenseLayer {
    spec: LayerSpec,
    /// 重み（row-major `[output_dim × input_dim]`）
    weights: Box<[f32]>,
    /// バイアス `[output_dim]`
    biases: Box<[f32]>,
}

impl DenseLayer {
    /// 重みとバイアスから層を作成
    ///
    /// `index` はエラーメッセージ用の層番号。
    pub fn new(
        index: usize,
        spec: LayerSpec,
        weights: Vec<f32>,
        biases: Vec<f32>,
    ) -> NetworkResult<Self> {
        if spec.input_dim == 0 || spec.output_dim == 0 {
            return Err(NetworkError::EmptyLayer {
                layer: index,
                input_dim: spec.input_dim,
                output_dim: spec.output_dim,
            });
        }
        if weights.len() != spec.weight_count() {
            return Err(NetworkError::WeightCount {
                layer: index,
                expected: spec.weight_count(),
                actual: weights.len(),
            });
        }
        if biases.len() != spec.output_dim {
            return Err(NetworkError::BiasCount {
                layer: index,
                expected: spec.output_dim,
                actual: biases.len(),
            });
        }
        Ok(Self {
            spec,
            weights: weights.into_boxed_slice(),
            biases: biases.into_boxed_slice(),
        })
    }

    /// ゼロ初期化した層を作成
    pub fn zeroed(spec: LayerSpec) -> Self {
        Self {
            spec,
            weights: vec![0.0; spec.weight_count()].into_boxed_slice(),
            biases: vec![0.0; spec.output_dim].into_boxed_slice(),
        }
    }

    /// 層の形状
    #[inline]
    pub fn spec(&self) -> &LayerSpec {
        &self.spec
    }

    /// 重み（row-major）
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// バイアス
    #[inline]
    pub fn biases(&self) -> &[f32] {
        &self.biases
    }

    /// 重み `weights[output][input]` を取得
    #[inline]
    pub fn weight(&self, output: usize, input: usize) -> f32 {
        self.weights[output * self.spec.input_dim + input]
    }

    /// 順伝播
    ///
    /// `input` と `output` は別バッファであること（借用規則で保証される）。
    #[inline]
    pub fn propagate(&self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(input.len(), self.spec.input_dim);
        debug_assert_eq!(output.len(), self.spec.output_dim);
        dense_forward(input, &self.weights, &self.biases, output, self.spec.activation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_forward_small() {
        // 2入力 → 2出力
        // 行0: [1, 2], 行1: [3, 4]
        let weights = [1.0, 2.0, 3.0, 4.0];
        let biases = [10.0, 20.0];
        let input = [1.0, 2.0];
        let mut output = [0.0f32; 2];

        dense_forward(&input, &weights, &biases, &mut output, Activation::None);

        // output[0] = 10 + 1*1 + 2*2 = 15
        // output[1] = 20 + 1*3 + 2*4 = 31
        assert_eq!(output, [15.0, 31.0]);
    }

    #[test]
    fn test_dense_forward_relu_clamps_negative() {
        let weights = [1.0, -1.0, -2.0, 0.5];
        let biases = [0.0, -1.0];
        let input = [1.0, 3.0];
        let mut output = [0.0f32; 2];

        dense_forward(&input, &weights, &biases, &mut output, Activation::ReLU);

        // 行0: 1 - 3 = -2 → 0
        // 行1: -1 - 2 + 1.5 = -1.5 → 0
        assert_eq!(output, [0.0, 0.0]);

        let input = [4.0, 1.0];
        dense_forward(&input, &weights, &biases, &mut output, Activation::ReLU);
        // 行0: 4 - 1 = 3, 行1: -1 - 8 + 0.5 = -8.5 → 0
        assert_eq!(output, [3.0, 0.0]);
    }

    #[test]
    fn test_dense_forward_zero_input_zero_bias() {
        let weights: Vec<f32> = (0..5 * 7).map(|i| i as f32 * 0.37 - 3.0).collect();
        let biases = [0.0f32; 5];
        let input = [0.0f32; 7];
        let mut output = [1.0f32; 5];

        dense_forward(&input, &weights, &biases, &mut output, Activation::None);

        assert!(output.iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic(expected = "weight tensor")]
    fn test_dense_forward_size_mismatch_panics() {
        let weights = [1.0f32; 5];
        let biases = [0.0f32; 2];
        let mut output = [0.0f32; 2];
        dense_forward(&[1.0, 2.0], &weights, &biases, &mut output, Activation::None);
    }

    #[test]
    fn test_dense_layer_new_validates_counts() {
        let spec = LayerSpec::new(3, 2, Activation::ReLU);

        let err = DenseLayer::new(4, spec, vec![0.0; 5], vec![0.0; 2]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::WeightCount {
                layer: 4,
                expected: 6,
                actual: 5
            }
        );

        let err = DenseLayer::new(0, spec, vec![0.0; 6], vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::BiasCount {
                layer: 0,
                expected: 2,
                actual: 3
            }
        );

        let empty = LayerSpec::new(0, 2, Activation::None);
        assert!(matches!(
            DenseLayer::new(1, empty, vec![], vec![0.0; 2]),
            Err(NetworkError::EmptyLayer { layer: 1, .. })
        ));
    }

    #[test]
    fn test_dense_layer_propagate_matches_free_function() {
        let spec = LayerSpec::new(3, 2, Activation::ReLU);
        let weights = vec![0.5, -1.0, 2.0, 1.0, 1.0, 1.0];
        let biases = vec![0.25, -0.5];
        let layer = DenseLayer::new(0, spec, weights.clone(), biases.clone()).unwrap();

        let input = [1.0, 2.0, 0.5];
        let mut a = [0.0f32; 2];
        let mut b = [0.0f32; 2];
        layer.propagate(&input, &mut a);
        dense_forward(&input, &weights, &biases, &mut b, Activation::ReLU);

        assert_eq!(a, b);
        assert_eq!(layer.weight(1, 2), 1.0);
        assert_eq!(layer.weight(0, 1), -1.0);
    }
}
