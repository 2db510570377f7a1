//! 盤面の状態（BoardState）

use log::{debug, trace, warn};

use super::{Capture, Move, PlacedPiece};
use crate::error::{BoardError, BoardResult};
use crate::types::{Color, Piece, PieceKind, Place, Square};

/// 駒台・駒箱の数（先手の駒台・後手の駒台・駒箱）
const STOCK_NUM: usize = 3;

/// 選択中の駒の位置（UI 側のハイライト用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// 盤上の升
    Square(Square),
    /// 駒台・駒箱の何番目か
    Stock { place: Place, index: usize },
}

/// 選択中の駒と、その選択位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Staged {
    piece: PlacedPiece,
    anchor: Selection,
}

/// 盤面・両者の駒台・駒箱と、選択中の駒
///
/// 盤上は升ごとに高々1枚。駒台・駒箱は駒種ごとに1エントリで、
/// 優先順位の降順（玉将が先頭、歩が末尾）に並ぶ。
/// 状態の変更は全てこの型のメソッドを通して行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: [Option<Piece>; Square::NUM],
    stocks: [Vec<PlacedPiece>; STOCK_NUM],
    staged: Option<Staged>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// 駒のない盤面
    pub fn new() -> Self {
        BoardState {
            board: [None; Square::NUM],
            stocks: Default::default(),
            staged: None,
        }
    }

    /// 全ての駒と選択を取り除く
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ------------------------------------------------------------------
    // 参照
    // ------------------------------------------------------------------

    /// 盤上の指定升の駒
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.board[square.index()].map(|p| PlacedPiece::on_board(p, square))
    }

    /// 盤上の指定升に駒があるか
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.board[square.index()].is_some()
    }

    /// 盤上の全ての駒（升の順）
    pub fn board_pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::ALL.into_iter().filter_map(|sq| self.piece_at(sq))
    }

    /// 駒台・駒箱の中身（盤上を指定すると空）
    pub fn stock(&self, place: Place) -> &[PlacedPiece] {
        match place.stock_index() {
            Some(i) => &self.stocks[i],
            None => &[],
        }
    }

    /// 指定した側の駒台
    #[inline]
    pub fn hand(&self, color: Color) -> &[PlacedPiece] {
        self.stock(Place::Hand(color))
    }

    /// 駒台・駒箱の指定駒種の枚数
    pub fn stock_count(&self, place: Place, kind: PieceKind) -> u32 {
        self.stock(place)
            .iter()
            .find(|p| p.kind() == kind)
            .map_or(0, PlacedPiece::count)
    }

    /// 盤上・駒台・駒箱にある駒の総数
    pub fn total_pieces(&self) -> u32 {
        let on_board = self.board.iter().flatten().count() as u32;
        let stocked: u32 = self.stocks.iter().flatten().map(PlacedPiece::count).sum();
        on_board + stocked
    }

    // ------------------------------------------------------------------
    // 追加・削除
    // ------------------------------------------------------------------

    /// 駒を追加する
    ///
    /// 盤上の場合、既に駒がある升には置かない（何もしない）。
    /// 駒台・駒箱の場合、同じ駒種があれば枚数を増やし、なければ1枚として追加する。
    pub fn add(&mut self, placed: PlacedPiece) {
        if let Err(e) = self.insert(placed) {
            debug!("add ignored: {e}");
        }
    }

    /// 駒を削除する
    ///
    /// 盤上の場合はその升の駒を取り除く。駒台・駒箱の場合は同じ駒種の
    /// 枚数を1減らし、0になったらエントリを消す。
    pub fn remove(&mut self, placed: &PlacedPiece) -> BoardResult<()> {
        match placed.place() {
            Place::Board(sq) => match self.board[sq.index()].take() {
                Some(_) => Ok(()),
                None => Err(BoardError::EmptySquare(sq)),
            },
            place => {
                let kind = placed.kind();
                let list = self
                    .stock_mut(place)
                    .ok_or(BoardError::NotInStock { place, kind })?;
                let idx = list
                    .iter()
                    .position(|p| p.kind() == kind)
                    .ok_or(BoardError::NotInStock { place, kind })?;
                let count = list[idx].count();
                if count <= 1 {
                    list.remove(idx);
                } else {
                    list[idx].set_count(count - 1);
                }
                Ok(())
            }
        }
    }

    /// 駒を追加する（盤上の升が埋まっていればエラー）
    fn insert(&mut self, placed: PlacedPiece) -> BoardResult<()> {
        match placed.place() {
            Place::Board(sq) => {
                let slot = &mut self.board[sq.index()];
                if slot.is_some() {
                    return Err(BoardError::Occupied(sq));
                }
                *slot = Some(placed.piece());
            }
            place => {
                let Some(list) = self.stock_mut(place) else {
                    return Err(BoardError::NotInStock { place, kind: placed.kind() });
                };
                match list.iter_mut().find(|p| p.kind() == placed.kind()) {
                    Some(entry) => entry.set_count(entry.count() + 1),
                    None => {
                        let mut entry = placed;
                        entry.set_count(1);
                        list.push(entry);
                        list.sort_by(|a, b| {
                            b.owned_piece().priority().cmp(&a.owned_piece().priority())
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// 駒台・駒箱のリスト（盤上は None）
    fn stock_mut(&mut self, place: Place) -> Option<&mut Vec<PlacedPiece>> {
        place.stock_index().map(|i| &mut self.stocks[i])
    }

    // ------------------------------------------------------------------
    // 選択
    // ------------------------------------------------------------------

    /// 盤上の駒を選択する
    ///
    /// 駒がなければ何もせず false（それまでの選択はそのまま）。
    /// 駒があれば以前の選択を置き換える。
    pub fn select_square(&mut self, square: Square) -> bool {
        match self.piece_at(square) {
            Some(piece) => {
                self.staged = Some(Staged {
                    piece,
                    anchor: Selection::Square(square),
                });
                true
            }
            None => {
                debug!("select ignored: no piece on {square}");
                false
            }
        }
    }

    /// 駒台・駒箱の index 番目の駒を選択する
    ///
    /// 範囲外（または盤上を指定）なら何もせず false。
    pub fn select_stock(&mut self, place: Place, index: usize) -> bool {
        match self.stock(place).get(index) {
            Some(&piece) => {
                self.staged = Some(Staged {
                    piece,
                    anchor: Selection::Stock { place, index },
                });
                true
            }
            None => {
                debug!("select ignored: no piece at {place}[{index}]");
                false
            }
        }
    }

    /// 選択を解除する
    #[inline]
    pub fn clear_selection(&mut self) {
        self.staged = None;
    }

    /// 選択中の位置
    #[inline]
    pub fn selection(&self) -> Option<Selection> {
        self.staged.map(|s| s.anchor)
    }

    /// 選択中の駒（選択した時点のコピー）
    #[inline]
    pub fn selected(&self) -> Option<PlacedPiece> {
        self.staged.map(|s| s.piece)
    }

    /// 何か選択されているか
    #[inline]
    pub fn has_selection(&self) -> bool {
        self.staged.is_some()
    }

    /// 指定した区画の駒が選択されているか（盤上同士は升を問わない）
    pub fn is_selected_in(&self, place: Place) -> bool {
        self.staged.is_some_and(|s| s.piece.place().same_area(place))
    }

    // ------------------------------------------------------------------
    // 移動
    // ------------------------------------------------------------------

    /// 選択中の盤上の駒を `target` に動かす
    ///
    /// 次の場合は何もせず None を返し、選択はそのまま残す:
    /// - 盤上の駒が選択されていない
    /// - `target` が移動元と同じ升
    /// - `target` に味方の駒がある
    ///
    /// `target` に相手の駒があれば取り、動かした側の駒台に基本状態で加える。
    /// 成功したら選択を解除する。
    pub fn move_on_board(&mut self, target: Square) -> Option<Move> {
        let staged = self.staged?.piece;
        let from = staged.square()?;
        if from == target {
            debug!("move ignored: {target} is the origin square");
            return None;
        }
        if self.board[from.index()] != Some(staged.piece()) {
            debug!("move ignored: selection on {from} is stale");
            return None;
        }

        let mover = staged.piece();
        let capture = match self.piece_at(target) {
            Some(occupant) if occupant.piece().color() == mover.color() => {
                debug!("move ignored: friendly piece on {target}");
                return None;
            }
            Some(occupant) => Some(Capture {
                before: occupant,
                after: occupant.relocate(Place::Hand(mover.color())),
            }),
            None => None,
        };

        let after = staged.relocate(Place::Board(target));
        self.commit(Move::new(staged, after, capture))
    }

    /// 選択中の駒台・駒箱の駒を空き升 `target` に打つ
    ///
    /// 盤上の駒が選択されている、または `target` に駒がある場合は None。
    /// 後手の駒台から打つ駒は後手向きになる。
    pub fn drop_from_stock(&mut self, target: Square) -> Option<Move> {
        let staged = self.staged?.piece;
        let place = staged.place();
        if place.is_board() {
            return None;
        }
        if self.is_occupied(target) {
            debug!("drop ignored: {target} is occupied");
            return None;
        }
        if self.stock_count(place, staged.kind()) == 0 {
            debug!("drop ignored: {} is no longer in {place}", staged.kind());
            return None;
        }

        let after = staged.relocate(Place::Board(target));
        self.commit(Move::new(staged, after, None))
    }

    /// 選択中の駒を駒台・駒箱 `place` に移す（編集用）
    ///
    /// 盤上の駒は基本状態に戻る。同じ区画を指定した場合は何もしない。
    /// 結果にかかわらず選択は解除する。
    pub fn move_selection_to(&mut self, place: Place) -> Option<Move> {
        let staged = self.staged.take()?.piece;
        if place.is_board() || staged.place().same_area(place) {
            return None;
        }
        let present = match staged.place() {
            Place::Board(sq) => self.board[sq.index()] == Some(staged.piece()),
            from => self.stock_count(from, staged.kind()) > 0,
        };
        if !present {
            debug!("move ignored: selection {staged} is stale");
            return None;
        }

        let after = staged.relocate(place);
        self.commit(Move::new(staged, after, None))
    }

    /// 計算済みの手を適用し、成功したら選択を解除する
    fn commit(&mut self, mv: Move) -> Option<Move> {
        match self.replay(&mv) {
            Ok(()) => {
                self.staged = None;
                Some(mv)
            }
            Err(e) => {
                warn!("failed to apply {mv}: {e}");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // 成り・編集操作
    // ------------------------------------------------------------------

    /// この手で成りを選べるか
    #[inline]
    pub fn promotion_eligible(&self, mv: &Move) -> bool {
        mv.promotion_eligible()
    }

    /// 手の移動後の駒を成りにする
    ///
    /// 盤上の駒には触れない。盤面に反映するには [`BoardState::promote_at`]
    /// を併せて呼ぶか、手を適用し直す。
    #[inline]
    pub fn apply_promotion(&self, mv: &mut Move) {
        mv.mark_promoted();
    }

    /// 盤上の指定升の駒を成りにする。成れる不成の駒があれば true
    pub fn promote_at(&mut self, square: Square) -> bool {
        match &mut self.board[square.index()] {
            Some(piece) if piece.has_promotion() && !piece.is_promoted() => {
                piece.promote();
                true
            }
            _ => false,
        }
    }

    /// 盤上の指定升の駒を裏返す（玉と王は入れ替える）。駒がなければ false
    pub fn toggle_facing(&mut self, square: Square) -> bool {
        match &mut self.board[square.index()] {
            Some(piece) => {
                piece.toggle_facing();
                true
            }
            None => false,
        }
    }

    /// 盤上の指定升の駒の先後を反転する。駒がなければ false
    pub fn invert_side(&mut self, square: Square) -> bool {
        match &mut self.board[square.index()] {
            Some(piece) => {
                piece.invert_side();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // 履歴の適用
    // ------------------------------------------------------------------

    /// 記録済みの手を進める
    ///
    /// 取られる駒の削除と駒台への追加を先に行い、その後で動かす駒を移す。
    /// 途中で失敗した場合は何も変更しない。
    pub fn replay(&mut self, mv: &Move) -> BoardResult<()> {
        let mut next = self.clone();
        if let Some(c) = mv.capture() {
            next.remove(&c.before)?;
            next.insert(c.after)?;
        }
        next.remove(&mv.before())?;
        next.insert(mv.after())?;
        *self = next;
        trace!("replay {mv}");
        Ok(())
    }

    /// 記録済みの手を戻す（`replay` の逆順）
    ///
    /// 途中で失敗した場合は何も変更しない。
    pub fn unapply(&mut self, mv: &Move) -> BoardResult<()> {
        let mut next = self.clone();
        next.remove(&mv.after())?;
        next.insert(mv.before())?;
        if let Some(c) = mv.capture() {
            next.remove(&c.after)?;
            next.insert(c.before)?;
        }
        *self = next;
        trace!("unapply {mv}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    fn on_board(kind: PieceKind, color: Color, file: u8, rank: u8) -> PlacedPiece {
        PlacedPiece::on_board(Piece::new(kind, color, false), sq(file, rank))
    }

    fn stocked(kind: PieceKind, place: Place) -> PlacedPiece {
        PlacedPiece::new(Piece::new(kind, Color::Black, false), place)
    }

    #[test]
    fn test_add_on_board_ignores_occupied_square() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Gold, Color::Black, 5, 5));
        state.add(on_board(PieceKind::Pawn, Color::White, 5, 5));
        assert_eq!(state.piece_at(sq(5, 5)).unwrap().kind(), PieceKind::Gold);
        assert_eq!(state.board_pieces().count(), 1);
    }

    #[test]
    fn test_stock_counting() {
        let mut state = BoardState::new();
        let pawn = stocked(PieceKind::Pawn, Place::SENTE_HAND);
        state.add(pawn);
        state.add(pawn);
        assert_eq!(state.hand(Color::Black).len(), 1);
        assert_eq!(state.stock_count(Place::SENTE_HAND, PieceKind::Pawn), 2);

        state.remove(&pawn).unwrap();
        assert_eq!(state.stock_count(Place::SENTE_HAND, PieceKind::Pawn), 1);
        state.remove(&pawn).unwrap();
        assert!(state.hand(Color::Black).is_empty());

        assert_eq!(
            state.remove(&pawn),
            Err(BoardError::NotInStock {
                place: Place::SENTE_HAND,
                kind: PieceKind::Pawn
            })
        );
    }

    #[test]
    fn test_stock_sorted_by_priority_desc() {
        let mut state = BoardState::new();
        for kind in [PieceKind::Pawn, PieceKind::Rook, PieceKind::Silver, PieceKind::Jewel] {
            state.add(stocked(kind, Place::Discard));
        }
        let kinds: Vec<_> = state.stock(Place::Discard).iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![PieceKind::Jewel, PieceKind::Rook, PieceKind::Silver, PieceKind::Pawn]
        );
    }

    #[test]
    fn test_remove_empty_square_is_error() {
        let mut state = BoardState::new();
        let ghost = on_board(PieceKind::Pawn, Color::Black, 1, 1);
        assert_eq!(state.remove(&ghost), Err(BoardError::EmptySquare(sq(1, 1))));
    }

    #[test]
    fn test_stock_list_is_never_the_board() {
        let mut state = BoardState::new();
        assert!(state.stock_mut(Place::Board(sq(5, 5))).is_none());
        assert!(state.stock_mut(Place::Discard).is_some());

        // 盤上の升を駒台扱いしても駒箱には入らない
        state.add(on_board(PieceKind::Pawn, Color::Black, 5, 5));
        assert!(state.stock(Place::Discard).is_empty());
        assert_eq!(state.total_pieces(), 1);
    }

    #[test]
    fn test_select_empty_square_keeps_previous_selection() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Gold, Color::Black, 4, 9));
        assert!(state.select_square(sq(4, 9)));
        assert!(!state.select_square(sq(5, 5)));
        assert_eq!(state.selection(), Some(Selection::Square(sq(4, 9))));
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Gold, Color::Black, 4, 9));
        state.add(stocked(PieceKind::Pawn, Place::GOTE_HAND));
        assert!(state.select_square(sq(4, 9)));
        assert!(state.select_stock(Place::GOTE_HAND, 0));
        assert_eq!(
            state.selection(),
            Some(Selection::Stock {
                place: Place::GOTE_HAND,
                index: 0
            })
        );
        assert!(!state.select_stock(Place::GOTE_HAND, 1));
        assert!(state.is_selected_in(Place::GOTE_HAND));
        state.clear_selection();
        assert!(!state.has_selection());
    }

    #[test]
    fn test_move_on_board_requires_board_selection() {
        let mut state = BoardState::new();
        assert_eq!(state.move_on_board(sq(5, 5)), None);

        state.add(stocked(PieceKind::Pawn, Place::SENTE_HAND));
        state.select_stock(Place::SENTE_HAND, 0);
        assert_eq!(state.move_on_board(sq(5, 5)), None);
        assert!(state.has_selection());
    }

    #[test]
    fn test_capture_goes_to_mover_hand_in_base_form() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Rook, Color::Black, 5, 8));
        state.add(PlacedPiece::on_board(
            Piece::new(PieceKind::Pawn, Color::White, true),
            sq(5, 7),
        ));

        state.select_square(sq(5, 8));
        let mv = state.move_on_board(sq(5, 7)).unwrap();

        assert_eq!(state.piece_at(sq(5, 7)).unwrap().piece().kind(), PieceKind::Rook);
        assert!(!state.is_occupied(sq(5, 8)));
        let hand = state.hand(Color::Black);
        assert_eq!(hand.len(), 1);
        assert_eq!(hand[0].piece(), Piece::new(PieceKind::Pawn, Color::Black, false));

        let captured = mv.captured_before().unwrap();
        assert!(captured.piece().is_promoted());
        assert_eq!(captured.piece().color(), Color::White);
        assert_eq!(mv.captured_after().unwrap().place(), Place::SENTE_HAND);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_white_capture_goes_to_gote_hand() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Bishop, Color::White, 2, 2));
        state.add(on_board(PieceKind::Silver, Color::Black, 4, 4));
        state.select_square(sq(2, 2));
        state.move_on_board(sq(4, 4)).unwrap();

        let hand = state.hand(Color::White);
        assert_eq!(hand.len(), 1);
        // 内部は基本状態、持ち主から見ると後手向き
        assert_eq!(hand[0].piece().color(), Color::Black);
        assert_eq!(hand[0].owned_piece().color(), Color::White);
    }

    #[test]
    fn test_drop_from_gote_hand() {
        let mut state = BoardState::new();
        state.add(stocked(PieceKind::Knight, Place::GOTE_HAND));
        state.add(stocked(PieceKind::Knight, Place::GOTE_HAND));
        state.add(on_board(PieceKind::Pawn, Color::Black, 5, 5));

        state.select_stock(Place::GOTE_HAND, 0);
        assert_eq!(state.drop_from_stock(sq(5, 5)), None);
        assert!(state.has_selection());

        let mv = state.drop_from_stock(sq(3, 3)).unwrap();
        assert_eq!(mv.before().place(), Place::GOTE_HAND);
        assert_eq!(mv.capture(), None);
        assert_eq!(
            state.piece_at(sq(3, 3)).unwrap().piece(),
            Piece::new(PieceKind::Knight, Color::White, false)
        );
        assert_eq!(state.stock_count(Place::GOTE_HAND, PieceKind::Knight), 1);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_move_selection_to_discard() {
        let mut state = BoardState::new();
        state.add(PlacedPiece::on_board(
            Piece::new(PieceKind::Bishop, Color::White, true),
            sq(7, 7),
        ));
        state.select_square(sq(7, 7));
        let mv = state.move_selection_to(Place::Discard).unwrap();
        assert!(!state.is_occupied(sq(7, 7)));
        assert_eq!(
            state.stock(Place::Discard)[0].piece(),
            Piece::new(PieceKind::Bishop, Color::Black, false)
        );
        assert!(!mv.promotion_eligible());

        // 同じ区画への移動は何もしないが選択は解除される
        state.select_stock(Place::Discard, 0);
        assert_eq!(state.move_selection_to(Place::Discard), None);
        assert!(!state.has_selection());
        assert_eq!(state.stock_count(Place::Discard, PieceKind::Bishop), 1);
    }

    #[test]
    fn test_toggle_and_invert_on_board() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Jewel, Color::Black, 5, 9));
        assert!(state.toggle_facing(sq(5, 9)));
        assert_eq!(state.piece_at(sq(5, 9)).unwrap().kind(), PieceKind::King);
        assert!(state.invert_side(sq(5, 9)));
        assert_eq!(state.piece_at(sq(5, 9)).unwrap().piece().color(), Color::White);
        assert!(!state.toggle_facing(sq(1, 1)));
        assert!(!state.invert_side(sq(1, 1)));
    }

    #[test]
    fn test_apply_promotion_does_not_touch_board() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Silver, Color::Black, 5, 4));
        state.select_square(sq(5, 4));
        let mut mv = state.move_on_board(sq(5, 3)).unwrap();
        assert!(state.promotion_eligible(&mv));

        state.apply_promotion(&mut mv);
        assert!(mv.after().piece().is_promoted());
        assert!(!state.piece_at(sq(5, 3)).unwrap().piece().is_promoted());

        assert!(state.promote_at(sq(5, 3)));
        assert!(state.piece_at(sq(5, 3)).unwrap().piece().is_promoted());
        assert!(!state.promote_at(sq(5, 3)));
    }

    #[test]
    fn test_replay_failure_leaves_state_untouched() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Rook, Color::Black, 2, 8));
        state.select_square(sq(2, 8));
        let mv = state.move_on_board(sq(2, 4)).unwrap();

        // 既に適用済みの手をもう一度進めると移動元が空なので失敗する
        let snapshot = state.clone();
        assert_eq!(state.replay(&mv), Err(BoardError::EmptySquare(sq(2, 8))));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_total_pieces_is_conserved_by_capture() {
        let mut state = BoardState::new();
        state.add(on_board(PieceKind::Rook, Color::Black, 5, 8));
        state.add(on_board(PieceKind::Pawn, Color::White, 5, 3));
        state.select_square(sq(5, 8));
        state.move_on_board(sq(5, 3)).unwrap();
        assert_eq!(state.total_pieces(), 2);
    }
}
