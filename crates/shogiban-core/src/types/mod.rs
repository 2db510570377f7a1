//! 基本型モジュール
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! Square   PieceKind
//!   ↓        ↓
//! Place    Piece
//! ```

mod color;
mod piece;
mod piece_kind;
mod place;
mod square;

pub use color::Color;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use place::Place;
pub use square::Square;
