//! 表示層に渡す盤面のスナップショット（JSON 表現）
//!
//! 各要素はリスト描画用の安定したキーを持つ。
//! 保存形式は定めない（読み戻しはしない）。

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, MoveHistory, PlacedPiece, Selection};
use crate::types::Place;

/// 駒1つ（駒台・駒箱では同種の駒をまとめて1つ）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// リスト描画用のキー
    pub key: String,
    /// シンボルID（"#S-FU" 等）
    pub symbol: String,
    /// 漢字表記（成駒は "と" 等）
    pub name: String,
    /// "sente" | "gote"（持ち主から見た向き）
    pub owner: String,
    /// 成駒かどうか
    pub promoted: bool,
    /// 盤上の升（"7g" 形式）。駒台・駒箱では省略
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square: Option<String>,
    /// 枚数（盤上は常に1）
    pub count: u32,
}

/// 選択中の位置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionJson {
    /// "ban" | "senteMochiKoma" | "goteMochiKoma" | "gomibako"
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// 盤面全体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// 盤上の駒（升の順）
    pub board: Vec<PieceJson>,
    /// 先手の駒台（優先順位の降順）
    pub sente_hand: Vec<PieceJson>,
    /// 後手の駒台（優先順位の降順）
    pub gote_hand: Vec<PieceJson>,
    /// 駒箱
    pub discard: Vec<PieceJson>,
    /// 選択中の位置
    pub selection: Option<SelectionJson>,
}

/// 履歴の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryJson {
    /// 適用済みの手数
    pub ply: usize,
    /// 記録されている手数
    pub len: usize,
    pub can_step_forward: bool,
    pub can_step_backward: bool,
}

/// セッション全体（盤面 + 履歴 + 成りの選択待ち）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub history: HistoryJson,
    /// 直前の手で成り/不成を選べるか
    pub promotion_offer: bool,
}

impl From<&PlacedPiece> for PieceJson {
    fn from(placed: &PlacedPiece) -> Self {
        let piece = placed.owned_piece();
        PieceJson {
            key: placed.key(),
            symbol: piece.symbol_id(),
            name: piece.kanji().to_string(),
            owner: piece.color().owner().to_string(),
            promoted: piece.is_promoted(),
            square: placed.square().map(|sq| sq.to_usi()),
            count: placed.count(),
        }
    }
}

impl From<Selection> for SelectionJson {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Square(sq) => SelectionJson {
                place: Place::Board(sq).area_name().to_string(),
                square: Some(sq.to_usi()),
                index: None,
            },
            Selection::Stock { place, index } => SelectionJson {
                place: place.area_name().to_string(),
                square: None,
                index: Some(index),
            },
        }
    }
}

impl From<&MoveHistory> for HistoryJson {
    fn from(history: &MoveHistory) -> Self {
        HistoryJson {
            ply: history.cursor().map_or(0, |i| i + 1),
            len: history.len(),
            can_step_forward: history.can_step_forward(),
            can_step_backward: history.can_step_backward(),
        }
    }
}

fn stock_to_json(state: &BoardState, place: Place) -> Vec<PieceJson> {
    state.stock(place).iter().map(PieceJson::from).collect()
}

impl BoardState {
    /// 表示用のスナップショットを作る
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            board: self.board_pieces().map(|p| PieceJson::from(&p)).collect(),
            sente_hand: stock_to_json(self, Place::SENTE_HAND),
            gote_hand: stock_to_json(self, Place::GOTE_HAND),
            discard: stock_to_json(self, Place::Discard),
            selection: self.selection().map(SelectionJson::from),
        }
    }
}
