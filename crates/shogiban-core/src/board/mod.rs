//! 盤面モジュール
//!
//! - `BoardState`: 盤上・先手の駒台・後手の駒台・駒箱と、選択中の駒
//! - `PlacedPiece`: 置き場所（と駒台での枚数）付きの駒
//! - `Move`: 1回の移動の記録（取った駒を含む）。`replay` / `unapply` で盤面に適用する
//! - `MoveHistory`: カーソル付きの履歴。巻き戻して新しい手を記録すると先の手は消える
//!
//! 盤面の変更は全て `BoardState` のメソッドを通して行い、
//! 外に渡す駒・手は常にコピーなので、受け取った側が盤面を壊すことはない。

mod history;
mod moves;
mod placed;
mod setup;
mod state;

pub use history::MoveHistory;
pub use moves::{Capture, Move};
pub use placed::PlacedPiece;
pub use state::{BoardState, Selection};
