//! 語の折り返し
//!
//! 表示幅は文字数で数える（端末の1文字 = 1桁）。カーソル `_` を付ける場合は
//! カーソルも1桁として折り返しに含めるので、打鍵中と打ち終わりで
//! 行の割り付けが変わらない。

/// カーソル文字
pub const CURSOR: char = '_';

/// 語を `max_cols` 桁ごとの行に分割
///
/// `with_cursor` が真なら末尾に [`CURSOR`] を付けた文字列を分割する。
/// 空文字列（カーソルなし）は行なし。`max_cols == 0` は 1 とみなす。
pub fn wrap_word(word: &str, with_cursor: bool, max_cols: usize) -> Vec<String> {
    let cols = max_cols.max(1);
    let mut full: Vec<char> = word.chars().collect();
    if with_cursor {
        full.push(CURSOR);
    }
    full.chunks(cols).map(|chunk| chunk.iter().collect()).collect()
}

/// 行を `width` 桁の中央に寄せる（左側のみ空白で埋める）
pub fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{line}", " ".repeat(pad))
}
