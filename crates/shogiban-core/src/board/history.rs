//! 指し手の履歴（MoveHistory）
//!
//! カーソル付きの線形な履歴。巻き戻した位置から新しい手を記録すると、
//! カーソルより先の手（やり直し用の分岐）は捨てられる。

use log::trace;

use super::Move;

/// 指し手の履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
    /// 適用済みの手数（カーソル + 1）。0 は最初の手より前
    applied: usize,
}

impl MoveHistory {
    /// 空の履歴
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録されている手数（巻き戻した分も含む）
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// カーソル位置（最後に適用した手のインデックス）。最初の手より前なら None
    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// 記録されている全ての手
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// カーソル位置の手
    #[inline]
    pub fn last(&self) -> Option<&Move> {
        self.cursor().map(|i| &self.moves[i])
    }

    /// 新しい手を記録する
    ///
    /// カーソルより先に手が残っていれば、それらを捨ててから追加する。
    pub fn record(&mut self, mv: Move) {
        if self.applied < self.moves.len() {
            trace!("history: discard {} move(s) after cursor", self.moves.len() - self.applied);
            self.moves.truncate(self.applied);
        }
        self.moves.push(mv);
        self.applied += 1;
        trace!("history: record #{} {mv}", self.applied);
    }

    /// 先に進めるか
    #[inline]
    pub fn can_step_forward(&self) -> bool {
        self.applied < self.moves.len()
    }

    /// カーソルを1つ進め、再適用すべき手を返す
    ///
    /// 返した手は呼び出し側で `BoardState::replay` すること。
    pub fn step_forward(&mut self) -> Option<&Move> {
        if !self.can_step_forward() {
            return None;
        }
        self.applied += 1;
        Some(&self.moves[self.applied - 1])
    }

    /// 戻れるか
    #[inline]
    pub fn can_step_backward(&self) -> bool {
        self.applied > 0
    }

    /// カーソル位置の手を返し、カーソルを1つ戻す
    ///
    /// 返した手は呼び出し側で `BoardState::unapply` すること。
    pub fn step_backward(&mut self) -> Option<&Move> {
        if !self.can_step_backward() {
            return None;
        }
        self.applied -= 1;
        Some(&self.moves[self.applied])
    }

    /// カーソル位置の手の移動後の駒を成りにする
    ///
    /// 記録後に成り/不成の選択が届いた場合に使う。手がなければ false。
    pub fn mark_last_promoted(&mut self) -> bool {
        match self.cursor() {
            Some(i) => {
                self.moves[i].mark_promoted();
                true
            }
            None => false,
        }
    }

    /// 履歴を空にする
    pub fn clear(&mut self) {
        self.moves.clear();
        self.applied = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlacedPiece;
    use crate::types::{Color, Piece, PieceKind, Place, Square};

    fn pawn_move(file: u8) -> Move {
        let before = PlacedPiece::on_board(
            Piece::new(PieceKind::Pawn, Color::Black, false),
            Square::new(file, 7).unwrap(),
        );
        let after = before.relocate(Place::Board(Square::new(file, 6).unwrap()));
        Move::new(before, after, None)
    }

    #[test]
    fn test_empty_history() {
        let mut h = MoveHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
        assert!(!h.can_step_forward());
        assert!(!h.can_step_backward());
        assert!(h.step_forward().is_none());
        assert!(h.step_backward().is_none());
        assert!(!h.mark_last_promoted());
    }

    #[test]
    fn test_step_backward_and_forward() {
        let (a, b) = (pawn_move(1), pawn_move(2));
        let mut h = MoveHistory::new();
        h.record(a);
        h.record(b);
        assert_eq!(h.cursor(), Some(1));

        assert_eq!(h.step_backward(), Some(&b));
        assert_eq!(h.step_backward(), Some(&a));
        assert_eq!(h.cursor(), None);
        assert!(!h.can_step_backward());

        assert_eq!(h.step_forward(), Some(&a));
        assert_eq!(h.step_forward(), Some(&b));
        assert!(!h.can_step_forward());
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_record_truncates_redo_branch() {
        let (a, b, c, d) = (pawn_move(1), pawn_move(2), pawn_move(3), pawn_move(4));
        let mut h = MoveHistory::new();
        h.record(a);
        h.record(b);
        h.record(c);
        h.step_backward();
        h.step_backward();
        assert_eq!(h.last(), Some(&a));

        h.record(d);
        assert_eq!(h.moves(), &[a, d]);
        assert!(!h.can_step_forward());
        assert_eq!(h.cursor(), Some(1));
    }

    #[test]
    fn test_record_from_start_discards_everything() {
        let mut h = MoveHistory::new();
        h.record(pawn_move(1));
        h.step_backward();
        h.record(pawn_move(9));
        assert_eq!(h.moves(), &[pawn_move(9)]);
    }

    #[test]
    fn test_mark_last_promoted() {
        let mut h = MoveHistory::new();
        h.record(pawn_move(1));
        h.record(pawn_move(2));
        h.step_backward();
        assert!(h.mark_last_promoted());
        assert!(h.moves()[0].after().piece().is_promoted());
        assert!(!h.moves()[1].after().piece().is_promoted());
    }
}
