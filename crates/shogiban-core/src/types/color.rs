//! 先後（Color）

use serde::{Deserialize, Serialize};

/// 先後（先手/後手）
///
/// 駒の向きと成れる段（敵陣）を決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    /// 先手
    #[serde(rename = "sente")]
    Black = 0,
    /// 後手
    #[serde(rename = "gote")]
    White = 1,
}

impl Color {
    /// 先後の数
    pub const NUM: usize = 2;

    /// 相手側を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 表示用の所有者名（"sente" | "gote"）
    #[inline]
    pub const fn owner(self) -> &'static str {
        match self {
            Color::Black => "sente",
            Color::White => "gote",
        }
    }

    /// シンボルIDの接頭辞（先手 "S"、後手 "G"）
    #[inline]
    pub(crate) const fn symbol_prefix(self) -> &'static str {
        match self {
            Color::Black => "S",
            Color::White => "G",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.owner())
    }
}
