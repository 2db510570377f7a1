//! 初期配置（平手）

use super::{BoardState, PlacedPiece};
use crate::types::{Color, Piece, PieceKind, Square};

/// 平手の一段目（1筋→9筋）
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Lance,
    PieceKind::Knight,
    PieceKind::Silver,
    PieceKind::Gold,
    PieceKind::Jewel,
    PieceKind::Gold,
    PieceKind::Silver,
    PieceKind::Knight,
    PieceKind::Lance,
];

/// 平手の配置（先手から見た段）。後手は 180 度回転して置く
fn hirate_layout() -> impl Iterator<Item = (PieceKind, u8, u8)> {
    let pawns = (1..=9).map(|file| (PieceKind::Pawn, file, 7));
    let majors = [(PieceKind::Rook, 2, 8), (PieceKind::Bishop, 8, 8)].into_iter();
    let back = BACK_RANK.into_iter().zip(1..=9).map(|(kind, file)| (kind, file, 9));
    pawns.chain(majors).chain(back)
}

impl BoardState {
    /// 平手の初期局面
    pub fn hirate() -> Self {
        let mut state = BoardState::new();
        state.set_hirate();
        state
    }

    /// 盤面を空にしてから平手の40枚を並べる
    ///
    /// 玉将は先後とも「玉」で置く。
    pub fn set_hirate(&mut self) {
        self.clear();
        for (kind, file, rank) in hirate_layout() {
            for color in [Color::Black, Color::White] {
                let (f, r) = match color {
                    Color::Black => (file, rank),
                    Color::White => (10 - file, 10 - rank),
                };
                if let Some(sq) = Square::new(f, r) {
                    self.add(PlacedPiece::on_board(Piece::new(kind, color, false), sq));
                }
            }
        }
    }
}
