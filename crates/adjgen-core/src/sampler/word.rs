//! 組み込みモデルによる形容詞生成器

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use super::generator::{GeneratedSequence, SequenceSampler};
use crate::config::GenerationConfig;
use crate::model::{Vocabulary, adjective_network};

/// 乱数生成器を作成
///
/// `seed` 指定時は再現可能、`None` ならシステムの乱数から初期化する。
pub fn seeded_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    }
}

/// 形容詞生成器
///
/// 組み込みネットワーク・英小文字語彙・乱数生成器をまとめたもの。
/// 無限イテレータとして使える。
///
/// ```
/// use adjgen_core::{GenerationConfig, WordGenerator};
///
/// let mut generator = WordGenerator::new(GenerationConfig::default().with_seed(Some(1)));
/// let words: Vec<String> = generator.by_ref().take(3).collect();
/// assert_eq!(words.len(), 3);
/// ```
pub struct WordGenerator {
    sampler: SequenceSampler<'static>,
    rng: Xoshiro256PlusPlus,
}

impl WordGenerator {
    /// 設定から生成器を作成（`config.seed` で乱数を初期化）
    pub fn new(config: GenerationConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self::with_rng(config, rng)
    }

    /// 乱数生成器を指定して作成
    pub fn with_rng(config: GenerationConfig, rng: Xoshiro256PlusPlus) -> Self {
        let sampler = SequenceSampler::new(adjective_network(), Vocabulary::lowercase_ascii(), config);
        Self { sampler, rng }
    }

    /// 生成設定
    pub fn config(&self) -> &GenerationConfig {
        self.sampler.config()
    }

    /// 温度を変更（乱数状態は維持）
    pub fn set_temperature(&mut self, temperature: f32) {
        let config = self.sampler.config().clone().with_temperature(temperature);
        self.sampler.set_config(config);
    }

    /// 1語を生成（終了理由付き）
    pub fn generate_word(&mut self) -> GeneratedSequence {
        self.sampler.generate(&mut self.rng)
    }
}

impl Iterator for WordGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate_word().into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generators_agree() {
        let config = GenerationConfig::default().with_seed(Some(42));
        let a: Vec<String> = WordGenerator::new(config.clone()).take(10).collect();
        let b: Vec<String> = WordGenerator::new(config).take(10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_words_are_lowercase_and_bounded() {
        let mut generator = WordGenerator::new(GenerationConfig::default().with_seed(Some(7)));
        for _ in 0..200 {
            let word = generator.generate_word();
            assert!(word.len() <= 9, "{word:?}");
            assert!(word.text.chars().all(|c| c.is_ascii_lowercase()), "{word:?}");
            assert!(word.steps <= 9);
        }
    }

    #[test]
    fn test_builtin_model_usually_terminates() {
        let mut generator = WordGenerator::new(GenerationConfig::default().with_seed(Some(3)));
        let finished = (0..200)
            .filter(|_| generator.generate_word().termination == super::super::Termination::EndSymbol)
            .count();
        // 位置入力で終端確率が上がるので大半は終端記号で終わる
        assert!(finished > 100, "only {finished} of 200 words terminated");
    }

    #[test]
    fn test_set_temperature_keeps_other_fields() {
        let mut generator = WordGenerator::new(GenerationConfig::default().with_seed(Some(5)));
        generator.set_temperature(1.3);
        assert_eq!(generator.config().temperature, 1.3);
        assert_eq!(generator.config().seed, Some(5));
        assert_eq!(generator.config().max_steps, 9);
    }
}
