//! 将棋盤エディタ / 棋譜並べ用の盤面エンジン
//!
//! 盤上・両者の駒台・駒箱の状態と、巻き戻し可能な指し手の履歴を扱う。
//! 盤面が強制するのは「升に駒は1枚」と「成れるのは敵陣に関わる移動だけ」の2つで、
//! 王手・打ち歩詰め・二歩・千日手などの判定は行わない。
//!
//! - [`types`]: 升目・駒種・駒・置き場所などの値型
//! - [`board`]: `BoardState`（盤面）・`Move`（指し手の記録）・`MoveHistory`（履歴）
//! - [`session`]: タップ操作を選択・移動に変換する入力層とのつなぎ
//! - [`snapshot`]: 表示層に渡す JSON 表現
//! - [`config`]: モード（対局/編集）と開始局面の設定
//!
//! ```
//! use shogiban_core::{BoardState, Square};
//!
//! let mut board = BoardState::hirate();
//! let from = Square::new(7, 7).unwrap();
//! let to = Square::new(7, 6).unwrap();
//! assert!(board.select_square(from));
//! let mv = board.move_on_board(to).unwrap();
//! assert!(!mv.promotion_eligible());
//! assert!(board.is_occupied(to));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod types;

pub use board::{BoardState, Capture, Move, MoveHistory, PlacedPiece, Selection};
pub use config::{BoardConfig, Mode, Setup};
pub use error::{BoardError, BoardResult, ConfigError};
pub use session::{Session, TapOutcome};
pub use snapshot::{BoardSnapshot, SessionSnapshot};
pub use types::{Color, Piece, PieceKind, Place, Square};
