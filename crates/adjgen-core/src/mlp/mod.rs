//! 全結合ネットワーク（MLP）の推論実装
//!
//! # アーキテクチャ
//!
//! ```text
//! input [N0]
//!    ↓  Dense(N0 → N1) + ReLU
//! buffer[0] [N1]
//!    ↓  Dense(N1 → N2) + ReLU
//!   ...
//! buffer[k-1] [Nk]      ← 最終層は活性化なし（logit）
//!    ↓  Softmax
//! output [Nk]
//! ```
//!
//! トポロジは [`Network`] の構築時に固定され、実行時に変化しない。
//! 浮動小数点は全て `f32`（組み込み機器の単精度演算と一致させる）。
mod error;
mod layers;
mod network;
mod softmax;
mod spec;

pub use error::{NetworkError, NetworkResult};
pub use layers::{DenseLayer, dense_forward};
pub use network::{Network, NetworkRunner};
pub use softmax::{softmax, softmax_in_place};
pub use spec::{Activation, LayerSpec, topology_name};
