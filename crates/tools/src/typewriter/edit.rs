//! 表示中の文字列から次の語へのキー入力列

/// 1回のキー入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// 末尾の1文字を消す
    Backspace,
    /// 末尾に1文字を足す
    Type(char),
}

impl Keystroke {
    /// 文字列に適用
    pub fn apply(self, text: &mut String) {
        match self {
            Self::Backspace => {
                text.pop();
            }
            Self::Type(c) => text.push(c),
        }
    }
}

/// 共通接頭辞の文字数
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

/// `displayed` を `target` に書き換えるキー入力列
///
/// `keep_prefix` が真なら共通接頭辞を残し、偽なら全て消してから打ち直す
/// （書体が変わるときは同じ文字でも描き直しになるため）。
pub fn plan_transition(displayed: &str, target: &str, keep_prefix: bool) -> Vec<Keystroke> {
    let common = if keep_prefix {
        common_prefix_len(displayed, target)
    } else {
        0
    };
    let erase = displayed.chars().count() - common;

    let mut plan = Vec::with_capacity(erase + target.len());
    plan.extend(std::iter::repeat_n(Keystroke::Backspace, erase));
    plan.extend(target.chars().skip(common).map(Keystroke::Type));
    plan
}
