//! リテラルの解析

use num_bigint::BigUint;
use num_traits::Zero;

use super::cursor::CharCursor;
use super::token::Token;

/// 整数リテラルの基数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Binary,
    Decimal,
    Hexadecimal,
}

impl Radix {
    fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// この基数で有効な桁の値
    fn digit(self, ch: char) -> Option<u32> {
        match self {
            Radix::Binary => match ch {
                '0' => Some(0),
                '1' => Some(1),
                _ => None,
            },
            Radix::Decimal => ch.to_digit(10),
            // 16進数は小文字のa-fのみ
            Radix::Hexadecimal => match ch {
                '0'..='9' | 'a'..='f' => ch.to_digit(16),
                _ => None,
            },
        }
    }
}

/// 整数リテラルを解析（`L`サフィックス付き）
///
/// 現在位置が数字であることを前提とする。値は多倍長整数に蓄積するため桁あふれしない。
pub(super) fn lex_integer_literal(cursor: &mut CharCursor) -> Token {
    let radix = if cursor.has_next_at(2) && cursor.current() == '0' && cursor.next_char() == 'x' {
        cursor.advance_by(2);
        Radix::Hexadecimal
    } else if cursor.has_next_at(2) && cursor.current() == '0' && cursor.next_char() == 'b' {
        cursor.advance_by(2);
        Radix::Binary
    } else {
        Radix::Decimal
    };

    let mut value = BigUint::zero();
    while cursor.has_next() {
        let ch = cursor.current();
        if let Some(digit) = radix.digit(ch) {
            value = value * radix.value() + digit;
        } else if !(radix == Radix::Decimal && ch == '_') {
            break;
        }
        // 10進数の区切り文字 `_` は値に含めない
        cursor.advance();
    }

    let is_long = cursor.current_is(|c| c == 'L');
    if is_long {
        cursor.advance();
    }

    Token::IntegerLiteral { value, is_long }
}

/// 引用符で囲まれたリテラルの中身を読む
///
/// 開始の引用符が現在位置にあることを前提とする。中身はエスケープを解釈せずそのまま返す。
/// 閉じる前に入力が終わった場合は、開始の引用符を含む読み取り済みのテキストを `Err` で返す。
pub(super) fn lex_quoted(cursor: &mut CharCursor, quote: char) -> Result<String, String> {
    cursor.advance();
    let mut content = String::new();
    loop {
        if !cursor.has_next() {
            return Err(format!("{}{}", quote, content));
        }
        let ch = cursor.current();
        if ch == quote {
            break;
        }
        content.push(ch);
        cursor.advance();
    }
    cursor.advance();
    Ok(content)
}
