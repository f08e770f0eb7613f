//! カテゴリカルサンプリング（累積和の逆関数法）

use rand::Rng;

/// 一様乱数 `draw ∈ [0, 1)` に対応する記号インデックスを返す
///
/// 累積確率が初めて `draw` 以上になったインデックスを選ぶ。
/// 丸め誤差で最後まで届かなかった場合は最後のインデックスを返す。
///
/// # Panics
///
/// `probs` が空の場合。
pub fn sample_index(probs: &[f32], draw: f32) -> usize {
    assert!(!probs.is_empty(), "cannot sample from an empty distribution");
    let mut cumulative = 0.0f32;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if draw <= cumulative {
            return i;
        }
    }
    probs.len() - 1
}

/// 乱数生成器から一様乱数を引いてサンプリング
#[inline]
pub fn sample<R: Rng + ?Sized>(probs: &[f32], rng: &mut R) -> usize {
    let draw: f32 = rng.random();
    sample_index(probs, draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_point_mass_always_selected() {
        let mut probs = [0.0f32; 28];
        probs[0] = 1.0;
        for draw in [0.0, 1e-7, 0.25, 0.5, 0.999_999, 1.0 - f32::EPSILON] {
            assert_eq!(sample_index(&probs, draw), 0, "draw = {draw}");
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(sample(&probs, &mut rng), 0);
        }
    }

    #[test]
    fn test_cumulative_boundaries() {
        let probs = [0.25f32, 0.25, 0.5];
        assert_eq!(sample_index(&probs, 0.1), 0);
        assert_eq!(sample_index(&probs, 0.25), 0);
        assert_eq!(sample_index(&probs, 0.3), 1);
        assert_eq!(sample_index(&probs, 0.5), 1);
        assert_eq!(sample_index(&probs, 0.75), 2);
    }

    #[test]
    fn test_rounding_shortfall_falls_back_to_last() {
        // 総和が 1 に届かない分布
        let probs = [0.3f32, 0.3, 0.3];
        assert_eq!(sample_index(&probs, 0.95), 2);
    }

    #[test]
    fn test_empirical_frequencies() {
        let probs = [0.1f32, 0.6, 0.3];
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        let mut counts = [0usize; 3];
        let n = 20_000;
        for _ in 0..n {
            counts[sample(&probs, &mut rng)] += 1;
        }
        for (count, p) in counts.iter().zip(probs) {
            let freq = *count as f32 / n as f32;
            assert!((freq - p).abs() < 0.02, "freq {freq} vs p {p}");
        }
    }
}
