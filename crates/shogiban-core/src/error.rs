//! エラー型
//!
//! 利用者の操作で普通に起こる不正操作（味方の駒がある升への移動、
//! 空き升のクリック等）はエラーにせず `None` / `false` で返す。
//! ここに並ぶのは呼び出し側の契約違反と、テキスト入力の解析失敗のみ。

use crate::types::{PieceKind, Place, Square};

/// 盤面操作のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 升目の表記を解釈できない
    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    /// 盤上の指定升に駒がない
    #[error("No piece on square {0}")]
    EmptySquare(Square),

    /// 盤上の指定升に既に駒がある
    #[error("Square {0} is already occupied")]
    Occupied(Square),

    /// 駒台・駒箱に指定駒種がない
    #[error("{kind} is not in {place}")]
    NotInStock { place: Place, kind: PieceKind },

    /// 駒の名前を解釈できない
    #[error("Unknown piece name: {0}")]
    UnknownPieceName(String),
}

/// 設定読み込みのエラー
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// TOML の構文・型エラー
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// 盤面操作の Result 型
pub type BoardResult<T> = Result<T, BoardError>;
