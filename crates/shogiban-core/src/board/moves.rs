//! 指し手の記録（Move）

use super::PlacedPiece;

/// 取った駒の移動（盤上の駒 → 取った側の駒台）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    /// 取られる前の盤上の駒
    pub before: PlacedPiece,
    /// 取った側の駒台に入った後の駒（先手・不成の基本状態）
    pub after: PlacedPiece,
}

/// 1回の状態遷移の記録
///
/// 盤面とは独立したコピーを保持するので、後で盤面を操作しても履歴は変わらない。
/// 生成後に許される変更は [`Move::mark_promoted`] だけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    before: PlacedPiece,
    after: PlacedPiece,
    capture: Option<Capture>,
}

impl Move {
    pub(crate) const fn new(
        before: PlacedPiece,
        after: PlacedPiece,
        capture: Option<Capture>,
    ) -> Move {
        Move {
            before,
            after,
            capture,
        }
    }

    /// 動かす前の駒
    #[inline]
    pub const fn before(&self) -> PlacedPiece {
        self.before
    }

    /// 動かした後の駒
    #[inline]
    pub const fn after(&self) -> PlacedPiece {
        self.after
    }

    /// 駒取りの記録
    #[inline]
    pub const fn capture(&self) -> Option<Capture> {
        self.capture
    }

    /// 取られる前の駒
    #[inline]
    pub fn captured_before(&self) -> Option<PlacedPiece> {
        self.capture.map(|c| c.before)
    }

    /// 取った側の駒台に入った後の駒
    #[inline]
    pub fn captured_after(&self) -> Option<PlacedPiece> {
        self.capture.map(|c| c.after)
    }

    /// この移動で成れるかどうか
    ///
    /// 盤上同士の移動で、裏のある不成の駒が、移動元か移動先のどちらかで
    /// 敵陣（先手は1〜3段、後手は7〜9段）に入っている場合に true。
    /// 同じ升での記録（編集操作）は対象外。
    pub fn promotion_eligible(&self) -> bool {
        let (Some(from), Some(to)) = (self.before.square(), self.after.square()) else {
            return false;
        };
        if from == to {
            return false;
        }
        let piece = self.before.piece();
        if !piece.has_promotion() || piece.is_promoted() {
            return false;
        }
        let color = piece.color();
        from.in_promotion_zone(color) || to.in_promotion_zone(color)
    }

    /// 移動後の駒を成りにする（取り消しはできない）
    pub fn mark_promoted(&mut self) {
        self.after.piece_mut().promote();
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.before, self.after)?;
        if let Some(c) = &self.capture {
            write!(f, " ({} -> {})", c.before, c.after)?;
        }
        Ok(())
    }
}
