//! 升目（Square）

use super::Color;
use crate::error::BoardError;

/// 升目（筋 1〜9、段 1〜9）
///
/// 内部表現は 0-80 のインデックス。
/// 1一=0, 1二=1, ..., 1九=8, 2一=9, ... （筋ごとに段が並ぶ縦型配置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// 盤上の全ての升（筋→段の順）
    pub const ALL: [Square; Square::NUM] = {
        let mut all = [Square(0); Square::NUM];
        let mut i = 0;
        while i < Square::NUM {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };

    /// 筋と段から生成（範囲外なら None）
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file >= 1 && file <= 9 && rank >= 1 && rank <= 9 {
            Some(Square((file - 1) * 9 + (rank - 1)))
        } else {
            None
        }
    }

    /// 筋（1〜9）
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 / 9 + 1
    }

    /// 段（1〜9）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 % 9 + 1
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 指定した側の敵陣（成れる段）にあるか
    ///
    /// 先手は1〜3段、後手は7〜9段。
    #[inline]
    pub const fn in_promotion_zone(self, color: Color) -> bool {
        match color {
            Color::Black => self.rank() <= 3,
            Color::White => self.rank() >= 7,
        }
    }

    /// 表示用のキー（"Masu-76" 形式）
    pub fn key(self) -> String {
        format!("Masu-{}{}", self.file(), self.rank())
    }

    /// USI形式の文字列（"7g"等）に変換
    pub fn to_usi(self) -> String {
        let rank = (b'a' + self.rank() - 1) as char;
        format!("{}{rank}", self.file())
    }

    /// USI形式の筋（'1'-'9'）と段（'a'-'i'）の文字から生成
    pub fn from_usi_chars(file: char, rank: char) -> Result<Square, BoardError> {
        let file_num = match file {
            '1'..='9' => file as u8 - b'0',
            _ => return Err(BoardError::InvalidSquare(format!("invalid file: {file}"))),
        };
        let rank_num = match rank {
            'a'..='i' => rank as u8 - b'a' + 1,
            _ => return Err(BoardError::InvalidSquare(format!("invalid rank: {rank}"))),
        };
        Square::new(file_num, rank_num)
            .ok_or_else(|| BoardError::InvalidSquare(format!("{file}{rank}")))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// USI形式（"7g" 等）の升目を解釈する
impl std::str::FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_usi_chars(file, rank),
            _ => Err(BoardError::InvalidSquare(format!("expected 2 characters: {s:?}"))),
        }
    }
}
