//! 「the future is...」タイプライター表示
//!
//! プリセット語と生成語を交互に、1文字ずつ打鍵するように表示する。
//!
//! - [`edit`]: 表示中の文字列から次の語へのキー入力列
//! - [`layout`]: カーソル込みの折り返し
//! - [`timing`]: 打鍵間隔・保持時間・カーソル点滅
//! - [`session`]: フェーズと表示状態の進行
//! - [`terminal`]: ANSI 端末への描画
pub mod edit;
pub mod layout;
pub mod session;
pub mod terminal;
pub mod timing;

pub use edit::{Keystroke, common_prefix_len, plan_transition};
pub use layout::{CURSOR, center, wrap_word};
pub use session::{Cue, PRESETS, Phase, Screen, Showcase, ShowcaseConfig, Style, WordSource};
pub use terminal::TerminalDisplay;
pub use timing::{BlinkClock, TypingConfig};
