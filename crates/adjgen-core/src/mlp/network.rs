//! ネットワーク全体の構造と推論実行器
//!
//! - [`Network`]: 層の並び（トポロジ + 重み）。構築後は読み取り専用で、
//!   複数スレッドから共有できる。
//! - [`NetworkRunner`]: 中間バッファを所有する推論実行器。
//!   1セッション = 1 Runner。同時に複数の生成を行う場合は Runner を分ける。

use super::error::{NetworkError, NetworkResult};
use super::layers::DenseLayer;
use super::softmax::softmax;
use super::spec::{LayerSpec, topology_name};
use crate::stats::count_infer;

/// 全結合ネットワーク（最終層の後に Softmax）
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<DenseLayer>,
}

impl Network {
    /// 層の並びからネットワークを作成
    ///
    /// 層 k の出力次元と層 k+1 の入力次元が一致することを検証する。
    pub fn new(layers: Vec<DenseLayer>) -> NetworkResult<Self> {
        if layers.is_empty() {
            return Err(NetworkError::EmptyTopology);
        }
        for (index, pair) in layers.windows(2).enumerate() {
            let produced = pair[0].spec().output_dim;
            let expected = pair[1].spec().input_dim;
            if produced != expected {
                return Err(NetworkError::DimensionMismatch {
                    layer: index + 1,
                    expected,
                    actual: produced,
                });
            }
        }

        let network = Self { layers };
        log::debug!(
            "network built: {} ({} params)",
            network.name(),
            network.param_count()
        );
        Ok(network)
    }

    /// 入力次元
    #[inline]
    pub fn input_dim(&self) -> usize {
        self.layers[0].spec().input_dim
    }

    /// 出力次元（確率分布の長さ）
    #[inline]
    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1].spec().output_dim
    }

    /// 層の一覧
    #[inline]
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// 層記述子の一覧
    pub fn specs(&self) -> Vec<LayerSpec> {
        self.layers.iter().map(|layer| *layer.spec()).collect()
    }

    /// パラメータ総数
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.spec().param_count()).sum()
    }

    /// トポロジ名（例: `"29-256-256-256-256-28"`）
    pub fn name(&self) -> String {
        topology_name(&self.specs())
    }

    /// 推論実行器を作成
    pub fn runner(&self) -> NetworkRunner<'_> {
        NetworkRunner::new(self)
    }
}

/// 推論実行器
///
/// 各層の出力バッファを構築時に一度だけ確保し、呼び出し間で再利用する。
/// 保持するのは作業領域だけなので、同じ入力には常に同じ出力を返す。
#[derive(Debug)]
pub struct NetworkRunner<'a> {
    network: &'a Network,
    /// buffers[k] は層 k の出力（長さ == 層 k の output_dim）
    buffers: Vec<Box<[f32]>>,
}

impl<'a> NetworkRunner<'a> {
    /// 新しい実行器を作成
    pub fn new(network: &'a Network) -> Self {
        let buffers = network
            .layers
            .iter()
            .map(|layer| vec![0.0f32; layer.spec().output_dim].into_boxed_slice())
            .collect();
        Self { network, buffers }
    }

    /// 対象ネットワーク
    #[inline]
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// 推論を1回実行
    ///
    /// `input` は `network.input_dim()`、`output` は `network.output_dim()` の長さ。
    /// `output` には確率分布（Softmax 後）が書き込まれる。
    ///
    /// # Panics
    ///
    /// バッファ長がネットワークの入出力次元と一致しない場合。
    pub fn infer(&mut self, input: &[f32], output: &mut [f32]) {
        assert_eq!(input.len(), self.network.input_dim(), "input size mismatch");
        assert_eq!(output.len(), self.network.output_dim(), "output size mismatch");

        count_infer!();

        let network = self.network;
        for (k, layer) in network.layers.iter().enumerate() {
            // 層 k の入力は buffers[k-1]、出力は buffers[k]（k == 0 のみ外部入力）
            let (done, rest) = self.buffers.split_at_mut(k);
            let out = &mut rest[0];
            match done.last() {
                Some(prev) => layer.propagate(prev, out),
                None => layer.propagate(input, out),
            }
        }

        if let Some(logits) = self.buffers.last() {
            softmax(logits, output);
        }
    }

    /// 直近の推論における層 k の出力（Softmax 前の logit を含む）
    pub fn layer_output(&self, k: usize) -> &[f32] {
        &self.buffers[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mlp::spec::Activation;

    fn identity_layer(index: usize, dim: usize, activation: Activation) -> DenseLayer {
        let mut weights = vec![0.0f32; dim * dim];
        for i in 0..dim {
            weights[i * dim + i] = 1.0;
        }
        DenseLayer::new(index, LayerSpec::new(dim, dim, activation), weights, vec![0.0; dim])
            .unwrap()
    }

    #[test]
    fn test_network_rejects_empty() {
        assert_eq!(Network::new(vec![]).unwrap_err(), NetworkError::EmptyTopology);
    }

    #[test]
    fn test_network_rejects_dimension_mismatch() {
        let l0 = DenseLayer::zeroed(LayerSpec::new(4, 3, Activation::ReLU));
        let l1 = DenseLayer::zeroed(LayerSpec::new(2, 5, Activation::None));
        assert_eq!(
            Network::new(vec![l0, l1]).unwrap_err(),
            NetworkError::DimensionMismatch {
                layer: 1,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_network_dimensions_and_name() {
        let network = Network::new(vec![
            DenseLayer::zeroed(LayerSpec::new(5, 8, Activation::ReLU)),
            DenseLayer::zeroed(LayerSpec::new(8, 3, Activation::None)),
        ])
        .unwrap();
        assert_eq!(network.input_dim(), 5);
        assert_eq!(network.output_dim(), 3);
        assert_eq!(network.param_count(), 5 * 8 + 8 + 8 * 3 + 3);
        assert_eq!(network.name(), "5-8-3");
    }

    #[test]
    fn test_runner_zero_network_gives_uniform() {
        let network = Network::new(vec![
            DenseLayer::zeroed(LayerSpec::new(3, 4, Activation::ReLU)),
            DenseLayer::zeroed(LayerSpec::new(4, 4, Activation::None)),
        ])
        .unwrap();
        let mut runner = network.runner();
        let mut output = [0.0f32; 4];
        runner.infer(&[1.0, -2.0, 0.5], &mut output);
        for &p in &output {
            assert!((p - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_runner_chains_layers() {
        // 恒等 → 恒等(ReLU) → Softmax
        let network = Network::new(vec![
            identity_layer(0, 2, Activation::None),
            identity_layer(1, 2, Activation::ReLU),
        ])
        .unwrap();
        let mut runner = network.runner();
        let mut output = [0.0f32; 2];

        // ReLU で負値が 0 になり、[ln3, 0] → [3/4, 1/4]
        runner.infer(&[3.0f32.ln(), -5.0], &mut output);
        assert!((output[0] - 0.75).abs() < 1e-6);
        assert!((output[1] - 0.25).abs() < 1e-6);
        assert_eq!(runner.layer_output(0)[1], -5.0);
        assert_eq!(runner.layer_output(1)[1], 0.0);
    }

    #[test]
    fn test_runner_is_repeatable() {
        let network = Network::new(vec![
            DenseLayer::new(
                0,
                LayerSpec::new(2, 3, Activation::ReLU),
                vec![0.1, -0.4, 0.7, 0.2, -0.3, 0.9],
                vec![0.05, 0.0, -0.1],
            )
            .unwrap(),
            DenseLayer::new(
                1,
                LayerSpec::new(3, 2, Activation::None),
                vec![1.0, -1.0, 0.5, 0.3, 0.2, -0.7],
                vec![0.0, 0.1],
            )
            .unwrap(),
        ])
        .unwrap();
        let mut runner = network.runner();
        let input = [0.8f32, 0.3];

        let mut first = [0.0f32; 2];
        let mut second = [0.0f32; 2];
        runner.infer(&input, &mut first);
        runner.infer(&[5.0, -5.0], &mut second);
        runner.infer(&input, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "input size mismatch")]
    fn test_runner_rejects_wrong_input_size() {
        let network =
            Network::new(vec![DenseLayer::zeroed(LayerSpec::new(3, 2, Activation::None))]).unwrap();
        let mut output = [0.0f32; 2];
        network.runner().infer(&[1.0, 2.0], &mut output);
    }

    #[test]
    fn test_network_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Network>();
    }
}
