//! 生成シナリオテスト

use adjgen_core::mlp::{Activation, DenseLayer, LayerSpec, Network};
use adjgen_core::model::Vocabulary;
use adjgen_core::{GenerationConfig, SequenceSampler, Termination, WordGenerator, seeded_rng};

/// 常に終端記号だけを出すネットワーク（語彙 28）
fn always_end_network() -> Network {
    let spec = LayerSpec::new(29, 28, Activation::None);
    let mut biases = vec![0.0f32; 28];
    biases[27] = 100.0;
    let layer = DenseLayer::new(0, spec, vec![0.0; spec.weight_count()], biases).unwrap();
    Network::new(vec![layer]).unwrap()
}

#[test]
fn test_immediate_end_gives_empty_word() {
    let network = always_end_network();
    let mut sampler =
        SequenceSampler::new(&network, Vocabulary::lowercase_ascii(), GenerationConfig::default());
    let mut rng = seeded_rng(Some(0));

    for _ in 0..20 {
        let word = sampler.generate(&mut rng);
        assert_eq!(word.text, "");
        assert_eq!(word.termination, Termination::EndSymbol);
        assert_eq!(word.steps, 1);
    }
}

#[test]
fn test_uniform_model_at_temperature_one() {
    // 重み・バイアス全て 0 → 一様分布
    let spec = LayerSpec::new(29, 28, Activation::None);
    let network = Network::new(vec![DenseLayer::zeroed(spec)]).unwrap();
    let config = GenerationConfig::default().with_temperature(1.0).with_max_steps(1000);
    let mut sampler = SequenceSampler::new(&network, Vocabulary::lowercase_ascii(), config);
    let mut rng = seeded_rng(Some(11));

    let mut total_steps = 0usize;
    let words = 400;
    for _ in 0..words {
        let word = sampler.generate_with_capacity(&mut rng, 64);
        assert_eq!(word.termination, Termination::EndSymbol, "{word:?}");
        total_steps += word.steps;
    }
    // 終端確率 1/28 の幾何分布: 平均ステップ数 28
    let mean = total_steps as f32 / words as f32;
    assert!((20.0..36.0).contains(&mean), "mean steps {mean}");
}

#[test]
fn test_temperature_sweep_stays_valid() {
    for temperature in [0.5f32, 0.8, 1.0, 1.3] {
        let config = GenerationConfig::default().with_temperature(temperature).with_seed(Some(9));
        for word in WordGenerator::new(config).take(50) {
            assert!(word.len() <= 9);
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}

#[test]
fn test_config_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generation.toml");
    std::fs::write(&path, "temperature = 0.8\nmax_steps = 3\nseed = 17\n").unwrap();

    let config = GenerationConfig::load(&path).unwrap();
    let mut generator = WordGenerator::new(config);
    for _ in 0..50 {
        let word = generator.generate_word();
        assert!(word.steps <= 3);
        assert!(word.len() <= 3);
    }
}
