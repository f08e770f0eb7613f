//! 推論・生成の統計カウンタ（デバッグ・チューニング用）
//!
//! 終了理由の内訳（終端記号 / ステップ上限）や開始記号の再出力頻度の測定に使用。
//! `sampler-stats` feature 有効時のみカウントを行う。
//!
//! # 使用方法
//!
//! ```bash
//! cargo run --release -p tools --features sampler-stats --bin generate_words
//! ```

#[cfg(feature = "sampler-stats")]
use std::sync::atomic::{AtomicU64, Ordering};

/// 生成統計
#[cfg(feature = "sampler-stats")]
pub struct SamplerStats {
    /// NetworkRunner::infer 呼び出し回数
    pub infer_count: AtomicU64,
    /// 終端記号で終了した生成の回数
    pub end_symbol_count: AtomicU64,
    /// ステップ上限で打ち切られた生成の回数
    pub step_budget_count: AtomicU64,
    /// 途中で開始記号がサンプルされて読み飛ばした回数
    pub start_skip_count: AtomicU64,
    /// 容量上限により捨てた文字数
    pub dropped_char_count: AtomicU64,
}

#[cfg(feature = "sampler-stats")]
impl SamplerStats {
    /// 新規作成
    pub const fn new() -> Self {
        Self {
            infer_count: AtomicU64::new(0),
            end_symbol_count: AtomicU64::new(0),
            step_budget_count: AtomicU64::new(0),
            start_skip_count: AtomicU64::new(0),
            dropped_char_count: AtomicU64::new(0),
        }
    }

    /// カウンタをリセット
    pub fn reset(&self) {
        self.infer_count.store(0, Ordering::Relaxed);
        self.end_symbol_count.store(0, Ordering::Relaxed);
        self.step_budget_count.store(0, Ordering::Relaxed);
        self.start_skip_count.store(0, Ordering::Relaxed);
        self.dropped_char_count.store(0, Ordering::Relaxed);
    }

    /// 統計情報を取得
    pub fn snapshot(&self) -> SamplerStatsSnapshot {
        SamplerStatsSnapshot {
            infer_count: self.infer_count.load(Ordering::Relaxed),
            end_symbol_count: self.end_symbol_count.load(Ordering::Relaxed),
            step_budget_count: self.step_budget_count.load(Ordering::Relaxed),
            start_skip_count: self.start_skip_count.load(Ordering::Relaxed),
            dropped_char_count: self.dropped_char_count.load(Ordering::Relaxed),
        }
    }
}

/// 統計スナップショット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStatsSnapshot {
    pub infer_count: u64,
    pub end_symbol_count: u64,
    pub step_budget_count: u64,
    pub start_skip_count: u64,
    pub dropped_char_count: u64,
}

impl SamplerStatsSnapshot {
    /// 生成した語の総数
    pub fn total_sequences(&self) -> u64 {
        self.end_symbol_count + self.step_budget_count
    }

    /// ステップ上限で打ち切られた割合（%）
    pub fn truncation_rate(&self) -> f64 {
        let total = self.total_sequences();
        if total == 0 {
            0.0
        } else {
            self.step_budget_count as f64 / total as f64 * 100.0
        }
    }

    /// 1語あたりの平均推論回数
    pub fn infers_per_sequence(&self) -> f64 {
        let total = self.total_sequences();
        if total == 0 {
            0.0
        } else {
            self.infer_count as f64 / total as f64
        }
    }

    /// レポートを出力
    pub fn print_report(&self) {
        eprintln!("=== Sampler Stats ===");
        eprintln!("infer calls:           {:>12}", self.infer_count);
        eprintln!("sequences:             {:>12}", self.total_sequences());
        eprintln!("  end symbol:          {:>12}", self.end_symbol_count);
        eprintln!(
            "  step budget:         {:>12} ({:>5.1}%)",
            self.step_budget_count,
            self.truncation_rate()
        );
        eprintln!("infers / sequence:     {:>12.2}", self.infers_per_sequence());
        eprintln!("start symbol skipped:  {:>12}", self.start_skip_count);
        eprintln!("chars dropped:         {:>12}", self.dropped_char_count);
        eprintln!("=====================");
    }
}

// ============================================================================
// Feature有効時: 実際のカウンタ
// ============================================================================

#[cfg(feature = "sampler-stats")]
pub static SAMPLER_STATS: SamplerStats = SamplerStats::new();

/// 統計カウンタをリセット
#[cfg(feature = "sampler-stats")]
pub fn reset_sampler_stats() {
    SAMPLER_STATS.reset();
}

/// 統計スナップショットを取得
#[cfg(feature = "sampler-stats")]
pub fn get_sampler_stats() -> SamplerStatsSnapshot {
    SAMPLER_STATS.snapshot()
}

// ============================================================================
// Feature無効時: no-op スタブ
// ============================================================================

/// 統計カウンタをリセット（no-op）
#[cfg(not(feature = "sampler-stats"))]
#[inline]
pub fn reset_sampler_stats() {}

/// 統計スナップショットを取得（空のスナップショット）
#[cfg(not(feature = "sampler-stats"))]
#[inline]
pub fn get_sampler_stats() -> SamplerStatsSnapshot {
    SamplerStatsSnapshot::default()
}

// ============================================================================
// インライン統計カウント用マクロ
// ============================================================================

/// infer カウント（feature有効時のみ）
#[cfg(feature = "sampler-stats")]
macro_rules! count_infer {
    () => {
        $crate::stats::SAMPLER_STATS
            .infer_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    };
}

/// infer カウント（no-op）
#[cfg(not(feature = "sampler-stats"))]
macro_rules! count_infer {
    () => {};
}

/// 終了理由カウント（feature有効時のみ）
#[cfg(feature = "sampler-stats")]
macro_rules! count_termination {
    ($termination:expr) => {{
        let counter = match $termination {
            $crate::sampler::Termination::EndSymbol => &$crate::stats::SAMPLER_STATS.end_symbol_count,
            $crate::sampler::Termination::StepBudget => {
                &$crate::stats::SAMPLER_STATS.step_budget_count
            }
        };
        counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    }};
}

/// 終了理由カウント（no-op）
#[cfg(not(feature = "sampler-stats"))]
macro_rules! count_termination {
    ($termination:expr) => {{
        let _ = &$termination;
    }};
}

/// 開始記号スキップのカウント（feature有効時のみ）
#[cfg(feature = "sampler-stats")]
macro_rules! count_start_skip {
    () => {
        $crate::stats::SAMPLER_STATS
            .start_skip_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    };
}

/// 開始記号スキップのカウント（no-op）
#[cfg(not(feature = "sampler-stats"))]
macro_rules! count_start_skip {
    () => {};
}

/// 容量超過で捨てた文字のカウント（feature有効時のみ）
#[cfg(feature = "sampler-stats")]
macro_rules! count_dropped_char {
    () => {
        $crate::stats::SAMPLER_STATS
            .dropped_char_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    };
}

/// 容量超過で捨てた文字のカウント（no-op）
#[cfg(not(feature = "sampler-stats"))]
macro_rules! count_dropped_char {
    () => {};
}

pub(crate) use count_dropped_char;
pub(crate) use count_infer;
pub(crate) use count_start_skip;
pub(crate) use count_termination;
