//! 駒（Piece）
//!
//! 駒種・先後・成りフラグの組。
//! シンボルIDと優先順位はこの3つ組から毎回計算するので、
//! フラグを書き換えた後に古い値が読まれることはない。

use super::{Color, PieceKind};

/// 駒（先後・成りの区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    promoted: bool,
}

impl Piece {
    /// 駒を生成する
    ///
    /// 裏のない駒種（金・玉・王）に `promoted = true` を渡しても不成として扱う。
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, promoted: bool) -> Piece {
        Piece {
            kind,
            color,
            promoted: promoted && kind.has_promotion(),
        }
    }

    /// 駒種
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// 先後
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 成っているか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.promoted
    }

    /// 裏（成り）がある駒か
    #[inline]
    pub const fn has_promotion(self) -> bool {
        self.kind.has_promotion()
    }

    /// 駒台での並び順に使う優先順位
    #[inline]
    pub const fn priority(self) -> u32 {
        self.kind.priority()
    }

    /// 描画用シンボルID（"#S-FU", "#G-RY" 等）
    pub fn symbol_id(self) -> String {
        format!("#{}-{}", self.color.symbol_prefix(), self.kind.code(self.promoted))
    }

    /// リスト描画用のキー（シンボルIDと同じ）
    pub fn key(self) -> String {
        self.symbol_id()
    }

    /// 漢字表記（成駒は成駒の名前）
    pub const fn kanji(self) -> &'static str {
        if self.promoted {
            self.kind.promoted_kanji()
        } else {
            self.kind.kanji()
        }
    }

    /// 先後をセットする
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// 先後を反転する（駒の向きが変わる）
    #[inline]
    pub fn invert_side(&mut self) {
        self.color = self.color.opponent();
    }

    /// 成る。裏のない駒では何もしない
    #[inline]
    pub fn promote(&mut self) {
        if self.has_promotion() {
            self.promoted = true;
        }
    }

    /// 不成に戻す
    #[inline]
    pub fn demote(&mut self) {
        self.promoted = false;
    }

    /// 裏返す
    ///
    /// 裏のある駒は成り/不成を反転する。
    /// 玉と王は編集モード用に駒種を入れ替える。金は何もしない。
    pub fn toggle_facing(&mut self) {
        if self.has_promotion() {
            self.promoted = !self.promoted;
        } else {
            match self.kind {
                PieceKind::King => self.kind = PieceKind::Jewel,
                PieceKind::Jewel => self.kind = PieceKind::King,
                _ => {}
            }
        }
    }

    /// 基本状態（先手・不成）の駒を返す
    ///
    /// 盤から駒台・駒箱へ移るときは常にこの形になる。
    #[inline]
    pub const fn base_form(self) -> Piece {
        Piece {
            kind: self.kind,
            color: Color::Black,
            promoted: false,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol_id())
    }
}
