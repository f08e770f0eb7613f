//! 打鍵・保持・点滅のタイミング

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// タイミング設定（ミリ秒）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// プリセット語を打ち終えてからの保持時間
    pub preset_hold_ms: u64,
    /// 生成語を打ち終えてからの保持時間
    pub generated_hold_ms: u64,
    /// ランダム打鍵間隔の下限
    pub keystroke_min_ms: u64,
    /// ランダム打鍵間隔の上限（含む）
    pub keystroke_max_ms: u64,
    /// プリセット語の固定打鍵間隔
    pub keystroke_preset_ms: u64,
    /// カーソル点滅の半周期
    pub cursor_blink_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            preset_hold_ms: 2400,
            generated_hold_ms: 1200,
            keystroke_min_ms: 60,
            keystroke_max_ms: 180,
            keystroke_preset_ms: 90,
            cursor_blink_ms: 600,
        }
    }
}

impl TypingConfig {
    /// 1打鍵の間隔
    ///
    /// `randomized` なら `[keystroke_min_ms, keystroke_max_ms]` の一様乱数、
    /// そうでなければ `keystroke_preset_ms`。
    pub fn keystroke_delay<R: Rng + ?Sized>(&self, rng: &mut R, randomized: bool) -> Duration {
        let ms = if randomized {
            let hi = self.keystroke_max_ms.max(self.keystroke_min_ms);
            rng.random_range(self.keystroke_min_ms..=hi)
        } else {
            self.keystroke_preset_ms
        };
        Duration::from_millis(ms)
    }

    /// 打ち終えてからの保持時間
    pub fn hold(&self, preset: bool) -> Duration {
        Duration::from_millis(if preset {
            self.preset_hold_ms
        } else {
            self.generated_hold_ms
        })
    }

    /// カーソル点滅の時計
    pub fn blink_clock(&self) -> BlinkClock {
        BlinkClock::new(Duration::from_millis(self.cursor_blink_ms))
    }
}

/// カーソル点滅の時計
///
/// 起点からの経過時間で表示状態が決まる（`(elapsed / period) % 2 == 0` で表示）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkClock {
    period: Duration,
}

impl BlinkClock {
    /// 半周期を指定して作成（0 は 1ms とみなす）
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// 半周期
    pub fn period(&self) -> Duration {
        self.period
    }

    /// カーソルが見えているか
    pub fn cursor_visible(&self, elapsed: Duration) -> bool {
        (elapsed.as_nanos() / self.period.as_nanos()) % 2 == 0
    }

    /// 次に表示が切り替わるまでの時間
    pub fn next_toggle(&self, elapsed: Duration) -> Duration {
        let period = self.period.as_nanos();
        let into = elapsed.as_nanos() % period;
        // period は 1ms 以上なので u64 に収まる
        Duration::from_nanos((period - into) as u64)
    }
}
