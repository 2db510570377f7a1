//! 置き場所付きの駒（PlacedPiece）

use crate::types::{Color, Piece, PieceKind, Place, Square};

/// 置き場所付きの駒
///
/// 盤上の駒は枚数が常に1。駒台・駒箱では同じ駒種をまとめて
/// `count` 枚として扱う。駒台・駒箱の駒は先手・不成の基本状態で保持し、
/// 後手の駒台にある駒は [`PlacedPiece::owned_piece`] で後手向きとして見せる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    piece: Piece,
    place: Place,
    count: u32,
}

impl PlacedPiece {
    /// 盤上の駒を生成
    #[inline]
    pub const fn on_board(piece: Piece, square: Square) -> PlacedPiece {
        PlacedPiece {
            piece,
            place: Place::Board(square),
            count: 1,
        }
    }

    /// 置き場所を指定して生成（枚数1）
    #[inline]
    pub const fn new(piece: Piece, place: Place) -> PlacedPiece {
        PlacedPiece {
            piece,
            place,
            count: 1,
        }
    }

    /// 格納されている駒（後手の駒台でも向きは変えない）
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// 駒種
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    /// 置き場所
    #[inline]
    pub const fn place(&self) -> Place {
        self.place
    }

    /// 盤上なら升目
    #[inline]
    pub const fn square(&self) -> Option<Square> {
        self.place.square()
    }

    /// 枚数
    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// 盤上の指定升にあるか
    #[inline]
    pub fn is_at(&self, square: Square) -> bool {
        self.place == Place::Board(square)
    }

    /// 持ち主から見た向きの駒を返す
    ///
    /// 後手の駒台にある駒は後手向きにして返す。
    pub fn owned_piece(&self) -> Piece {
        let mut piece = self.piece;
        if self.place == Place::GOTE_HAND {
            piece.set_color(Color::White);
        }
        piece
    }

    /// 新しい置き場所に動かした後の駒を返す（自身は変更しない）
    ///
    /// - 盤上から駒台・駒箱へ: 基本状態（先手・不成）に戻す
    /// - 後手の駒台から盤上へ（駒打ち）: 後手向きにする
    /// - 駒台・駒箱の間: 基本状態に揃える
    /// - 盤上同士: 駒はそのまま
    ///
    /// 枚数は常に1。駒台での枚数の増減は `BoardState` 側で行う。
    pub fn relocate(&self, new_place: Place) -> PlacedPiece {
        let mut piece = self.piece;
        if !self.place.same_area(new_place) {
            if self.place.is_board() || !new_place.is_board() {
                piece = piece.base_form();
            } else if self.place == Place::GOTE_HAND {
                piece.set_color(Color::White);
            }
        }
        PlacedPiece::new(piece, new_place)
    }

    /// リスト描画用のキー（駒名 + 区画 + 升目キー）
    pub fn key(&self) -> String {
        let square_key = match self.place {
            Place::Board(sq) => sq.key(),
            _ => "Masu-00".to_string(),
        };
        format!("{}{}{}", self.piece.kind().kanji(), self.place.area_name(), square_key)
    }

    pub(crate) fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub(crate) fn piece_mut(&mut self) -> &mut Piece {
        &mut self.piece
    }
}

impl std::fmt::Display for PlacedPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.piece, self.place)?;
        if self.count > 1 {
            write!(f, "x{}", self.count)?;
        }
        Ok(())
    }
}
