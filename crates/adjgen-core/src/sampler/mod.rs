//! 文字単位の自己回帰サンプラー
//!
//! ネットワークの出力分布から1記号ずつ引き、終端記号またはステップ上限まで
//! 繰り返して1語を組み立てる。
//!
//! - [`encode_input`]: one-hot + 位置スカラーの入力ベクトル
//! - [`apply_temperature`]: 確率分布への温度補正
//! - [`sample`]: 累積和によるカテゴリカルサンプリング
//! - [`SequenceSampler`]: デコードループ本体
//! - [`WordGenerator`]: 組み込みモデル用のまとめ役
mod categorical;
mod encoding;
mod generator;
mod temperature;
mod word;

pub use categorical::{sample, sample_index};
pub use encoding::encode_input;
pub use generator::{GeneratedSequence, SequenceSampler, Termination};
pub use temperature::apply_temperature;
pub use word::{WordGenerator, seeded_rng};
