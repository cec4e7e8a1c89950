//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 共有型が返す失敗は範囲外の重症度番号だけ。
/// I/O・JSON・設定のエラーは本体クレート側（`RetinaError`）で扱う。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid severity class: {0} (expected 0-4)")]
    InvalidSeverity(i64),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
