//! 生成パラメータ
//!
//! TOML から読み込める。未指定の項目は既定値（組み込みモデルの学習時設定）になる。
//!
//! ```toml
//! temperature = 0.8
//! max_steps = 9
//! capacity = 10
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{DEFAULT_TEMPERATURE, MAX_WORD_LEN};

/// 設定エラー
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// ファイル読み込みエラー
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// TOML の構文・型エラー
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// 温度が正の有限値でない
    #[error("temperature must be a positive finite number, got {0}")]
    InvalidTemperature(f32),

    /// 出力バッファ容量が 0（終端分の1文字も確保できない）
    #[error("capacity must be at least 1")]
    InvalidCapacity,
}

/// 生成設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// 温度（1.0 で補正なし、<1 で鋭く、>1 で平坦に）
    pub temperature: f32,
    /// デコードのステップ上限（0 なら常に空文字列）
    pub max_steps: usize,
    /// 出力バッファ容量（終端分を含む。可視文字は最大 `capacity - 1`）
    pub capacity: usize,
    /// 乱数シード（`None` ならエントロピーから初期化）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_steps: MAX_WORD_LEN,
            capacity: MAX_WORD_LEN + 1,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// TOML 文字列から読み込み（検証込み）
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML ファイルから読み込み（検証込み）
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// 値の範囲を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }

    /// 温度を設定
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// ステップ上限を設定
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// シードを設定
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_model() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.max_steps, 9);
        assert_eq!(config.capacity, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GenerationConfig::from_toml_str("temperature = 1.3\nseed = 7\n").unwrap();
        assert_eq!(config.temperature, 1.3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_steps, MAX_WORD_LEN);
    }

    #[test]
    fn test_from_toml_rejects_unknown_field() {
        let err = GenerationConfig::from_toml_str("temprature = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = GenerationConfig::from_toml_str("temperature = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTemperature(t) if t == 0.0));

        let err = GenerationConfig::from_toml_str("temperature = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTemperature(_)));

        let err = GenerationConfig::from_toml_str("capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCapacity));

        let config = GenerationConfig::default().with_temperature(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generation.toml");
        std::fs::write(&path, "max_steps = 4\ncapacity = 3\n").unwrap();

        let config = GenerationConfig::load(&path).unwrap();
        assert_eq!(config.max_steps, 4);
        assert_eq!(config.capacity, 3);

        let missing = GenerationConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }

    #[test]
    fn test_toml_round_trip_keeps_seed() {
        let config = GenerationConfig::default().with_seed(Some(99)).with_max_steps(5);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(GenerationConfig::from_toml_str(&text).unwrap(), config);
    }
}
