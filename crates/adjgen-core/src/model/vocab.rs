//! 語彙（記号インデックス ↔ 文字）
//!
//! ```text
//! 0      : 開始記号 '^'
//! 1..=N  : 可視文字（既定は 'a'..='z'）
//! N + 1  : 終端記号 '$'
//! ```

use smallvec::SmallVec;

use super::constants::MAX_WORD_LEN;

/// 開始記号の表示文字
pub const START_CHAR: char = '^';

/// 終端記号の表示文字
pub const END_CHAR: char = '$';

/// 語彙
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    letters: Vec<char>,
}

impl Vocabulary {
    /// 可視文字の並びから語彙を作成
    ///
    /// 重複や記号文字（`^`, `$`）を含む場合は `None`。
    pub fn new(letters: &str) -> Option<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return None;
        }
        for (i, &c) in letters.iter().enumerate() {
            if c == START_CHAR || c == END_CHAR || letters[..i].contains(&c) {
                return None;
            }
        }
        Some(Self { letters })
    }

    /// 小文字アルファベット 26 文字の語彙
    pub fn lowercase_ascii() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    /// 語彙サイズ（開始・終端記号を含む）
    #[inline]
    pub fn size(&self) -> usize {
        self.letters.len() + 2
    }

    /// 開始記号のインデックス
    #[inline]
    pub fn start_symbol(&self) -> usize {
        0
    }

    /// 終端記号のインデックス
    #[inline]
    pub fn end_symbol(&self) -> usize {
        self.letters.len() + 1
    }

    /// 開始記号か
    #[inline]
    pub fn is_start(&self, symbol: usize) -> bool {
        symbol == self.start_symbol()
    }

    /// 終端記号か
    #[inline]
    pub fn is_end(&self, symbol: usize) -> bool {
        symbol == self.end_symbol()
    }

    /// 記号を可視文字に変換（開始・終端記号と範囲外は `None`）
    #[inline]
    pub fn symbol_to_char(&self, symbol: usize) -> Option<char> {
        if symbol == 0 {
            return None;
        }
        self.letters.get(symbol - 1).copied()
    }

    /// 可視文字を記号に変換
    pub fn char_to_symbol(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c).map(|i| i + 1)
    }

    /// 単語を記号列に変換（開始記号 + 文字 + 終端記号）
    ///
    /// 文字数は [`MAX_WORD_LEN`] で切り詰める。語彙外の文字を含む場合は `None`。
    pub fn encode_word(&self, word: &str) -> Option<SmallVec<[usize; MAX_WORD_LEN + 2]>> {
        let mut encoded = SmallVec::new();
        encoded.push(self.start_symbol());
        for c in word.chars().take(MAX_WORD_LEN) {
            encoded.push(self.char_to_symbol(c)?);
        }
        encoded.push(self.end_symbol());
        Some(encoded)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::lowercase_ascii()
    }
}
