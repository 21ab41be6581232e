//! 文字カーソル
//!
//! ソース文字列上を前方にのみ移動し、行・列・バイトオフセットを追跡する。

use super::Position;

/// 位置情報付きの文字カーソル
#[derive(Debug, Clone)]
pub struct CharCursor {
    chars: Vec<char>,
    index: usize,
    position: Position,
}

impl CharCursor {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            position: Position::new(),
        }
    }

    /// `step`文字先の文字を取得
    ///
    /// 呼び出し側が `has_next_at(step + 1)` を保証すること。範囲外はパニックする。
    pub fn current_at(&self, step: usize) -> char {
        self.chars[self.index + step]
    }

    /// 現在の文字を取得
    pub fn current(&self) -> char {
        self.current_at(0)
    }

    /// 次の文字を取得
    pub fn next_char(&self) -> char {
        self.current_at(1)
    }

    /// 残り文字数が `step` 以上あるかチェック
    pub fn has_next_at(&self, step: usize) -> bool {
        assert!(step >= 1, "lookahead step must be at least 1");
        self.index + step <= self.chars.len()
    }

    /// 少なくとも1文字残っているかチェック
    pub fn has_next(&self) -> bool {
        self.has_next_at(1)
    }

    /// 現在位置の文字が条件を満たすかチェック（終端ではfalse）
    pub fn current_is(&self, pred: impl Fn(char) -> bool) -> bool {
        self.has_next() && pred(self.current())
    }

    /// `step`文字進む
    ///
    /// 通過する各文字を観測し、改行をまたぐ時だけ行を進めて列を1に戻す。
    pub fn advance_by(&mut self, step: usize) {
        for _ in 0..step {
            let ch = self.chars[self.index];
            self.position.advance(ch);
            self.index += 1;
        }
    }

    /// 1文字進む
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// 現在の位置
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
