//! 駒の置き場所（Place）

use super::{Color, Square};

/// 駒の置き場所
///
/// 盤上は升目を伴う。駒台（持駒）は先後ごとに分かれ、
/// 駒箱は編集モードで使わない駒を置いておく場所。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    /// 盤上
    Board(Square),
    /// 駒台（持駒）
    Hand(Color),
    /// 駒箱（使わない駒置き場）
    Discard,
}

impl Place {
    /// 先手の駒台
    pub const SENTE_HAND: Place = Place::Hand(Color::Black);
    /// 後手の駒台
    pub const GOTE_HAND: Place = Place::Hand(Color::White);

    /// 盤上か
    #[inline]
    pub const fn is_board(self) -> bool {
        matches!(self, Place::Board(_))
    }

    /// 盤上なら升目を返す
    #[inline]
    pub const fn square(self) -> Option<Square> {
        match self {
            Place::Board(sq) => Some(sq),
            _ => None,
        }
    }

    /// 同じ区画か（盤上同士は升目が違っても同じ区画）
    #[inline]
    pub fn same_area(self, other: Place) -> bool {
        match (self, other) {
            (Place::Board(_), Place::Board(_)) => true,
            _ => self == other,
        }
    }

    /// 駒台・駒箱の配列インデックス（盤上は None）
    #[inline]
    pub(crate) const fn stock_index(self) -> Option<usize> {
        match self {
            Place::Board(_) => None,
            Place::Hand(Color::Black) => Some(0),
            Place::Hand(Color::White) => Some(1),
            Place::Discard => Some(2),
        }
    }

    /// 表示用キーに使う区画名
    pub const fn area_name(self) -> &'static str {
        match self {
            Place::Board(_) => "ban",
            Place::Hand(Color::Black) => "senteMochiKoma",
            Place::Hand(Color::White) => "goteMochiKoma",
            Place::Discard => "gomibako",
        }
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Place::Board(sq) => write!(f, "ban-{}", sq.key()),
            _ => f.write_str(self.area_name()),
        }
    }
}
