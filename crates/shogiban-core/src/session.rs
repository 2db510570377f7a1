//! 入力層とのつなぎ（Session）
//!
//! UI からの「升をタップ」「駒台の駒をタップ」等の操作を受け取り、
//! 1回目のタップで駒を選択、2回目のタップで移動として `BoardState` に渡す。
//! 指した手は `MoveHistory` に記録し、前後への移動で盤面に適用し直す。

use log::{debug, warn};

use crate::board::{BoardState, Move, MoveHistory, Selection};
use crate::config::{BoardConfig, Setup};
use crate::error::BoardResult;
use crate::snapshot::{HistoryJson, SessionSnapshot};
use crate::types::{Place, Square};

/// タップの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// 駒を選択した（以前の選択は置き換え）
    Selected,
    /// 選択を解除した
    Deselected,
    /// 手を指して履歴に記録した
    Moved {
        /// 成り/不成を選べる手か
        promotable: bool,
    },
    /// 何もしなかった
    Ignored,
    /// 移動できなかったので選択を解除した
    Rejected,
}

/// 盤面・履歴・設定をまとめた1局分の状態
#[derive(Debug, Clone)]
pub struct Session {
    config: BoardConfig,
    board: BoardState,
    history: MoveHistory,
    /// 直前の手で成りを選べる状態か
    promotion_offer: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Session {
    /// 設定の開始局面でセッションを作る
    pub fn new(config: BoardConfig) -> Self {
        Session {
            config,
            board: initial_board(config.setup),
            history: MoveHistory::new(),
            promotion_offer: false,
        }
    }

    /// 設定
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// 盤面（読み取り専用）
    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// 履歴（読み取り専用）
    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// 直前の手で成り/不成を選べるか
    #[inline]
    pub fn promotion_offer(&self) -> bool {
        self.promotion_offer
    }

    /// 開始局面に戻し、履歴を消す
    pub fn reset(&mut self) {
        self.board = initial_board(self.config.setup);
        self.history.clear();
        self.promotion_offer = false;
    }

    /// 盤上の升をタップする
    pub fn tap_square(&mut self, square: Square) -> TapOutcome {
        self.promotion_offer = false;
        let Some(selected) = self.board.selected() else {
            return self.select_or_ignore(square);
        };

        let moved = match selected.square() {
            Some(from) if from == square => {
                self.board.clear_selection();
                return TapOutcome::Deselected;
            }
            Some(_) => self.board.move_on_board(square),
            None => self.board.drop_from_stock(square),
        };

        match moved {
            Some(mv) => self.record(mv),
            // 味方の駒（または駒のある升への駒打ち）なら、その駒を選び直す
            None if self.board.select_square(square) => TapOutcome::Selected,
            None => {
                self.board.clear_selection();
                TapOutcome::Rejected
            }
        }
    }

    /// USI形式の升目（"7g" 等）をタップする
    ///
    /// スナップショットの `square` と同じ表記を受け付ける。
    pub fn tap_usi(&mut self, text: &str) -> BoardResult<TapOutcome> {
        let square = text.parse::<Square>()?;
        Ok(self.tap_square(square))
    }

    /// 駒台・駒箱の `index` 番目をタップする
    ///
    /// 編集モードで別の区画の駒を選択中なら、その駒をこの区画に移す。
    pub fn tap_stock(&mut self, place: Place, index: usize) -> TapOutcome {
        if place.is_board() {
            return TapOutcome::Ignored;
        }
        if place == Place::Discard && !self.config.is_edit() {
            debug!("tap ignored: discard bin is only available in edit mode");
            return TapOutcome::Ignored;
        }
        self.promotion_offer = false;

        if let Some(selected) = self.board.selected() {
            let same_area = selected.place().same_area(place);
            if self.config.is_edit() && !same_area {
                return match self.board.move_selection_to(place) {
                    Some(mv) => self.record(mv),
                    None => TapOutcome::Deselected,
                };
            }
            if self.board.selection() == Some(Selection::Stock { place, index }) {
                self.board.clear_selection();
                return TapOutcome::Deselected;
            }
        }

        if self.board.select_stock(place, index) {
            TapOutcome::Selected
        } else {
            TapOutcome::Ignored
        }
    }

    /// 直前の手を成りにする
    ///
    /// 履歴の手と盤上の駒の両方を成りにする。成りを選べない状態なら false。
    pub fn promote_last(&mut self) -> bool {
        if !self.promotion_offer {
            return false;
        }
        self.promotion_offer = false;
        let Some(to) = self.history.last().and_then(|mv| mv.after().square()) else {
            return false;
        };
        if self.board.promote_at(to) {
            self.history.mark_last_promoted()
        } else {
            false
        }
    }

    /// 盤上の駒を裏返す（編集モードのみ）
    ///
    /// 変更は1手として履歴に記録するので、戻す・進めるで取り消せる。
    pub fn toggle_facing(&mut self, square: Square) -> bool {
        self.edit_on_board(square, BoardState::toggle_facing)
    }

    /// 盤上の駒の先後を反転する（編集モードのみ、履歴に記録する）
    pub fn invert_side(&mut self, square: Square) -> bool {
        self.edit_on_board(square, BoardState::invert_side)
    }

    /// 履歴を1手進める
    ///
    /// 進める手がなければ `Ok(None)`。盤面と履歴が食い違っていればエラーを返し、
    /// 盤面・カーソルとも変更しない。
    pub fn step_forward(&mut self) -> BoardResult<Option<Move>> {
        self.board.clear_selection();
        self.promotion_offer = false;
        let Some(&mv) = self.history.step_forward() else {
            return Ok(None);
        };
        if let Err(e) = self.board.replay(&mv) {
            warn!("history out of sync, cannot replay {mv}: {e}");
            self.history.step_backward();
            return Err(e);
        }
        Ok(Some(mv))
    }

    /// 履歴を1手戻す
    ///
    /// 戻す手がなければ `Ok(None)`。失敗時は盤面・カーソルとも変更しない。
    pub fn step_backward(&mut self) -> BoardResult<Option<Move>> {
        self.board.clear_selection();
        self.promotion_offer = false;
        let Some(&mv) = self.history.step_backward() else {
            return Ok(None);
        };
        if let Err(e) = self.board.unapply(&mv) {
            warn!("history out of sync, cannot undo {mv}: {e}");
            self.history.step_forward();
            return Err(e);
        }
        Ok(Some(mv))
    }

    /// 表示用のスナップショット
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.to_snapshot(),
            history: HistoryJson::from(&self.history),
            promotion_offer: self.promotion_offer,
        }
    }

    fn select_or_ignore(&mut self, square: Square) -> TapOutcome {
        if self.board.select_square(square) {
            TapOutcome::Selected
        } else {
            TapOutcome::Ignored
        }
    }

    fn record(&mut self, mv: Move) -> TapOutcome {
        let promotable = mv.promotion_eligible();
        self.history.record(mv);
        self.promotion_offer = promotable;
        TapOutcome::Moved { promotable }
    }

    fn edit_on_board(&mut self, square: Square, op: fn(&mut BoardState, Square) -> bool) -> bool {
        if !self.config.is_edit() {
            debug!("edit ignored on {square}: not in edit mode");
            return false;
        }
        self.promotion_offer = false;
        // 選択中の駒のコピーが古くならないよう解除する
        self.board.clear_selection();
        let Some(before) = self.board.piece_at(square) else {
            return false;
        };
        if !op(&mut self.board, square) {
            return false;
        }
        match self.board.piece_at(square) {
            // 金を裏返した場合など、変化がなければ記録しない
            Some(after) if after != before => self.history.record(Move::new(before, after, None)),
            _ => {}
        }
        true
    }
}

fn initial_board(setup: Setup) -> BoardState {
    match setup {
        Setup::Hirate => BoardState::hirate(),
        Setup::Empty => BoardState::new(),
    }
}
