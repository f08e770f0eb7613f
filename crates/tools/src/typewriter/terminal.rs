//! ANSI 端末への描画
//!
//! ```text
//! row 1 │ the future
//! row 2 │ is...
//! row 3 │
//! row 4 │      bright_        ← 語の領域（中央寄せ・折り返し）
//! row 5 │
//! ```
//!
//! 書体は ANSI 属性で表す（Serif = 斜体、Plain = 太字）。

use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::layout::{CURSOR, center, wrap_word};
use super::session::{Screen, Style};
use super::timing::BlinkClock;

const HEADER: [&str; 2] = ["the future", "is..."];
const WORD_ROW: usize = 4;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CLEAR_BELOW: &str = "\x1b[J";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const RESET: &str = "\x1b[0m";

fn style_code(style: Style) -> &'static str {
    match style {
        Style::Serif => "\x1b[3m",
        Style::Plain => "\x1b[1m",
    }
}

fn move_to(row: usize) -> String {
    format!("\x1b[{row};1H")
}

/// 端末ディスプレイ
pub struct TerminalDisplay<W: Write> {
    out: W,
    width: usize,
    clock: BlinkClock,
    started: Instant,
    text: String,
    style: Style,
}

impl<W: Write> TerminalDisplay<W> {
    /// `width` 桁の表示領域で作成
    pub fn new(out: W, width: usize, clock: BlinkClock) -> Self {
        Self {
            out,
            width: width.max(1),
            clock,
            started: Instant::now(),
            text: String::new(),
            style: Style::default(),
        }
    }

    /// 画面を消してヘッダを描く
    pub fn draw_header(&mut self) -> io::Result<()> {
        write!(self.out, "{HIDE_CURSOR}{CLEAR_SCREEN}")?;
        for (i, line) in HEADER.iter().enumerate() {
            write!(self.out, "{}{line}", move_to(i + 1))?;
        }
        self.out.flush()
    }

    /// 出力先
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn cursor_visible(&self) -> bool {
        self.clock.cursor_visible(self.started.elapsed())
    }

    /// 語の領域を現在の状態で描き直す
    fn redraw(&mut self) -> io::Result<()> {
        let lines = wrap_word(&self.text, true, self.width);
        let visible = self.cursor_visible();
        let last = lines.len().saturating_sub(1);

        write!(self.out, "{}{CLEAR_BELOW}{}", move_to(WORD_ROW), style_code(self.style))?;
        for (i, line) in lines.iter().enumerate() {
            // カーソルが消えている間も同じ幅を確保して位置をずらさない
            let line = if i == last && !visible {
                line.replace(CURSOR, " ")
            } else {
                line.clone()
            };
            write!(self.out, "{}{}", move_to(WORD_ROW + i), center(&line, self.width))?;
        }
        write!(self.out, "{RESET}")?;
        self.out.flush()
    }
}

impl<W: Write> Screen for TerminalDisplay<W> {
    fn render(&mut self, text: &str, style: Style) -> io::Result<()> {
        self.text.clear();
        self.text.push_str(text);
        self.style = style;
        self.redraw()
    }

    /// 点滅の切り替え時刻まで眠り、切り替わったら描き直す
    fn pause(&mut self, duration: Duration) -> io::Result<()> {
        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            let toggle = now + self.clock.next_toggle(now - self.started);
            if toggle >= deadline {
                std::thread::sleep(deadline - now);
                return Ok(());
            }
            std::thread::sleep(toggle - now);
            self.redraw()?;
        }
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "{RESET}{SHOW_CURSOR}");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(width: usize) -> TerminalDisplay<Vec<u8>> {
        TerminalDisplay::new(Vec::new(), width, BlinkClock::new(Duration::from_secs(3600)))
    }

    fn output(display: &TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8_lossy(display.get_ref()).into_owned()
    }

    #[test]
    fn test_header() {
        let mut display = display(20);
        display.draw_header().unwrap();
        let out = output(&display);
        assert!(out.contains("\x1b[1;1Hthe future"));
        assert!(out.contains("\x1b[2;1His..."));
    }

    #[test]
    fn test_render_centers_word_with_cursor() {
        let mut display = display(20);
        display.render("sunny", Style::Plain).unwrap();
        let out = output(&display);
        // "sunny_" は 6 桁 → 左に 7 桁
        assert!(out.contains(&format!("\x1b[4;1H{}sunny_", " ".repeat(7))));
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn test_render_wraps_long_word() {
        let mut display = display(5);
        display.render("delightful", Style::Serif).unwrap();
        let out = output(&display);
        assert!(out.contains("\x1b[4;1Hdelig"));
        assert!(out.contains("\x1b[5;1Hhtful"));
        assert!(out.contains("\x1b[6;1H  _"));
        assert!(out.contains("\x1b[3m"));
    }

    #[test]
    fn test_pause_waits_at_least_duration() {
        let mut display = display(10);
        let start = Instant::now();
        display.pause(Duration::from_millis(20)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_pause_redraws_on_blink() {
        let mut display =
            TerminalDisplay::new(Vec::new(), 10, BlinkClock::new(Duration::from_millis(5)));
        display.render("ai", Style::Plain).unwrap();
        let before = display.get_ref().len();
        display.pause(Duration::from_millis(30)).unwrap();
        assert!(display.get_ref().len() > before);
    }
}
