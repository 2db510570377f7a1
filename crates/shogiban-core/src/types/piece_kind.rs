//! 駒種（PieceKind）

use crate::error::BoardError;

/// 駒種（先後・成りの区別なし）
///
/// 玉と王は同格の駒だが、編集モードでどちらの玉将をどちらの側に置くかを
/// 選べるように別の駒種として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Lance = 2,
    Knight = 3,
    Silver = 4,
    Gold = 5,
    Bishop = 6,
    Rook = 7,
    /// 玉
    Jewel = 8,
    /// 王
    King = 9,
}

impl PieceKind {
    /// 駒種の数
    pub const NUM: usize = 9;

    /// 全ての駒種（優先順位の昇順）
    pub const ALL: [PieceKind; PieceKind::NUM] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Jewel,
        PieceKind::King,
    ];

    /// 裏（成り）がある駒種か
    #[inline]
    pub const fn has_promotion(self) -> bool {
        !matches!(self, PieceKind::King | PieceKind::Jewel | PieceKind::Gold)
    }

    /// 駒台での並び順に使う優先順位（大きいほど先頭）
    #[inline]
    pub const fn priority(self) -> u32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Lance => 71,
            PieceKind::Knight => 72,
            PieceKind::Silver => 81,
            PieceKind::Gold => 82,
            PieceKind::Bishop => 91,
            PieceKind::Rook => 92,
            PieceKind::Jewel => 101,
            PieceKind::King => 102,
        }
    }

    /// シンボルIDの駒コード（"FU", "TO" 等）
    ///
    /// 裏のない駒種では `promoted` を無視する。
    pub const fn code(self, promoted: bool) -> &'static str {
        match (self, promoted) {
            (PieceKind::Pawn, false) => "FU",
            (PieceKind::Pawn, true) => "TO",
            (PieceKind::Lance, false) => "KY",
            (PieceKind::Lance, true) => "NY",
            (PieceKind::Knight, false) => "KE",
            (PieceKind::Knight, true) => "NK",
            (PieceKind::Silver, false) => "GI",
            (PieceKind::Silver, true) => "NG",
            (PieceKind::Bishop, false) => "KA",
            (PieceKind::Bishop, true) => "UM",
            (PieceKind::Rook, false) => "HI",
            (PieceKind::Rook, true) => "RY",
            (PieceKind::Gold, _) => "KI",
            (PieceKind::Jewel, _) => "GY",
            (PieceKind::King, _) => "OU",
        }
    }

    /// 漢字表記（生駒）
    pub const fn kanji(self) -> &'static str {
        match self {
            PieceKind::Pawn => "歩",
            PieceKind::Lance => "香",
            PieceKind::Knight => "桂",
            PieceKind::Silver => "銀",
            PieceKind::Gold => "金",
            PieceKind::Bishop => "角",
            PieceKind::Rook => "飛",
            PieceKind::Jewel => "玉",
            PieceKind::King => "王",
        }
    }

    /// 漢字表記（成駒）。裏のない駒種は生駒と同じ
    pub const fn promoted_kanji(self) -> &'static str {
        match self {
            PieceKind::Pawn => "と",
            PieceKind::Lance => "成香",
            PieceKind::Knight => "成桂",
            PieceKind::Silver => "成銀",
            PieceKind::Bishop => "馬",
            PieceKind::Rook => "龍",
            _ => self.kanji(),
        }
    }
}

impl std::str::FromStr for PieceKind {
    type Err = BoardError;

    /// 漢字（"歩", "玉", "王" 等）または USI の駒文字（"P", "K" 等）から変換する。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "歩" | "P" => PieceKind::Pawn,
            "香" | "L" => PieceKind::Lance,
            "桂" | "N" => PieceKind::Knight,
            "銀" | "S" => PieceKind::Silver,
            "金" | "G" => PieceKind::Gold,
            "角" | "B" => PieceKind::Bishop,
            "飛" | "R" => PieceKind::Rook,
            "玉" => PieceKind::Jewel,
            "王" | "K" => PieceKind::King,
            _ => return Err(BoardError::UnknownPieceName(s.to_string())),
        };
        Ok(kind)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kanji())
    }
}
