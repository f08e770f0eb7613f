//! ショーケースのセッション状態
//!
//! # 進行
//!
//! ```text
//! Presets(0..14) ──▶ Generated(0..14) ──▶ Presets(0..14) ──▶ ...
//!   書体: Serif        書体: Plain
//!   打鍵: 固定間隔     打鍵: ランダム間隔
//!   保持: 長め         保持: 短め
//! ```
//!
//! 1語ごとに、表示中の文字列を共通接頭辞まで消してから新しい語を打つ。
//! 書体が変わるときは接頭辞を残さず全て打ち直す。

use std::io;
use std::path::Path;
use std::time::Duration;

use adjgen_core::{GenerationConfig, WordGenerator};
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::edit::{Keystroke, common_prefix_len, plan_transition};
use super::timing::TypingConfig;

/// プリセット語（この順に表示）
pub const PRESETS: &[&str] = &[
    "bleak",
    "bright",
    "beautiful",
    "scary",
    "ai",
    "ass",
    "a mystery",
    "scary",
    "exciting",
    "amazing",
    "delightful",
    "expensive",
    "sunny",
    "hopeful",
];

/// 書体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// 通常書体（生成語）
    #[default]
    Plain,
    /// 装飾書体（プリセット語）
    Serif,
}

/// 表示フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Presets,
    Generated,
}

impl Phase {
    /// このフェーズの書体
    pub fn style(self) -> Style {
        match self {
            Self::Presets => Style::Serif,
            Self::Generated => Style::Plain,
        }
    }
}

/// 次に表示する語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub text: String,
    pub phase: Phase,
}

/// 語の供給元
pub trait WordSource {
    fn next_word(&mut self) -> String;
}

impl WordSource for WordGenerator {
    fn next_word(&mut self) -> String {
        self.generate_word().into_string()
    }
}

/// 描画先
pub trait Screen {
    /// 語の領域を描き直す（カーソル付き）
    fn render(&mut self, text: &str, style: Style) -> io::Result<()>;
    /// 指定時間待つ（待機中もカーソルの点滅は続ける）
    fn pause(&mut self, duration: Duration) -> io::Result<()>;
}

/// ショーケース全体の設定（TOML）
///
/// ```toml
/// [generation]
/// temperature = 0.5
///
/// [typing]
/// generated_hold_ms = 1200
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub generation: GenerationConfig,
    pub typing: TypingConfig,
}

impl ShowcaseConfig {
    /// TOML ファイルから読み込み
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
        config.generation.validate()?;
        Ok(config)
    }
}

/// ショーケースの進行状態
pub struct Showcase<S> {
    source: S,
    phase: Phase,
    word_index: usize,
    displayed: String,
    style: Style,
}

impl<S: WordSource> Showcase<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Phase::Presets,
            word_index: 0,
            displayed: String::new(),
            style: Style::Plain,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    /// 現在表示中の文字列
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// 現在の書体
    pub fn style(&self) -> Style {
        self.style
    }

    /// 次の語を決めてフェーズを進める
    ///
    /// 各フェーズはプリセット数と同じ語数で切り替わる。
    pub fn next_cue(&mut self) -> Cue {
        let phase = self.phase;
        let text = match phase {
            Phase::Presets => PRESETS[self.word_index].to_string(),
            Phase::Generated => self.source.next_word(),
        };

        self.word_index += 1;
        if self.word_index >= PRESETS.len() {
            self.word_index = 0;
            self.phase = match phase {
                Phase::Presets => Phase::Generated,
                Phase::Generated => Phase::Presets,
            };
        }
        Cue { text, phase }
    }

    /// 次の語を打鍵して保持するまでを再生
    ///
    /// 消去は現在の書体で行い、書体を切り替えてから打鍵する。
    pub fn play_next<D, R>(&mut self, screen: &mut D, timing: &TypingConfig, rng: &mut R) -> io::Result<Cue>
    where
        D: Screen + ?Sized,
        R: Rng + ?Sized,
    {
        let cue = self.next_cue();
        let style = cue.phase.style();
        let randomized = cue.phase == Phase::Generated;
        let keep_prefix = self.style == style;
        let plan = plan_transition(&self.displayed, &cue.text, keep_prefix);
        log::debug!("{:?} {:?}: {} keystrokes", cue.phase, cue.text, plan.len());

        let erase = plan.iter().take_while(|&&k| k == Keystroke::Backspace).count();
        for &key in &plan[..erase] {
            key.apply(&mut self.displayed);
            screen.render(&self.displayed, self.style)?;
            screen.pause(timing.keystroke_delay(rng, randomized))?;
        }

        self.style = style;
        if !self.displayed.is_empty() {
            screen.render(&self.displayed, self.style)?;
        }

        for &key in &plan[erase..] {
            key.apply(&mut self.displayed);
            screen.render(&self.displayed, self.style)?;
            screen.pause(timing.keystroke_delay(rng, randomized))?;
        }

        debug_assert_eq!(common_prefix_len(&self.displayed, &cue.text), cue.text.chars().count());
        screen.pause(timing.hold(cue.phase == Phase::Presets))?;
        Ok(cue)
    }
}
