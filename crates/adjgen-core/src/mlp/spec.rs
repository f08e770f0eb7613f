//! 層記述子（Layer Descriptor）の型定義
//!
//! ネットワークのトポロジを一意に表すための型を提供する。

/// 活性化関数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// 恒等写像
    #[default]
    None,
    /// ReLU: `y = max(0, x)`
    ReLU,
}

impl Activation {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::ReLU => "ReLU",
        }
    }

    /// スカラーに活性化関数を適用
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::None => x,
            // NaN も 0 になる
            Self::ReLU => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
        }
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 1層分の形状と活性化関数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerSpec {
    /// 入力次元
    pub input_dim: usize,
    /// 出力次元（ニューロン数）
    pub output_dim: usize,
    /// 活性化関数
    pub activation: Activation,
}

impl LayerSpec {
    /// 新しい LayerSpec を作成
    pub const fn new(input_dim: usize, output_dim: usize, activation: Activation) -> Self {
        Self {
            input_dim,
            output_dim,
            activation,
        }
    }

    /// 重みの要素数（row-major `[output_dim × input_dim]`）
    pub const fn weight_count(&self) -> usize {
        self.input_dim * self.output_dim
    }

    /// パラメータ数（重み + バイアス）
    pub const fn param_count(&self) -> usize {
        self.weight_count() + self.output_dim
    }
}

/// トポロジ名を生成
///
/// 例: `"29-256-256-256-256-28"`
pub fn topology_name(specs: &[LayerSpec]) -> String {
    let Some(first) = specs.first() else {
        return String::new();
    };
    let mut name = first.input_dim.to_string();
    for spec in specs {
        name.push('-');
        name.push_str(&spec.output_dim.to_string());
    }
    name
}
