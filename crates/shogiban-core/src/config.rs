//! 盤面の設定
//!
//! TOML から読み込む。省略した項目は既定値（対局モード・平手）になる。
//!
//! ```toml
//! mode = "edit"
//! setup = "empty"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 操作モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 対局・棋譜並べ。駒箱と編集操作は使えない
    #[default]
    Play,
    /// 自由編集。駒箱・裏返し・先後反転・駒台への移動が使える
    Edit,
}

/// 開始局面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    /// 平手
    #[default]
    Hirate,
    /// 駒なし
    Empty,
}

/// 盤面の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub mode: Mode,
    pub setup: Setup,
}

impl BoardConfig {
    /// 編集モードの設定
    pub fn edit() -> Self {
        BoardConfig {
            mode: Mode::Edit,
            ..Self::default()
        }
    }

    /// TOML 文字列から読み込む
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// 編集モードか
    #[inline]
    pub fn is_edit(&self) -> bool {
        self.mode == Mode::Edit
    }
}
