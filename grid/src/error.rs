//! 错误类型定义

use thiserror::Error;

/// 棋盘错误
///
/// 坐标一律以玩家视角的 1 起始值报告，与 `Position` 的显示一致。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// 坐标超出棋盘（1 起始）
    #[error("Position out of range: ({col}, {row})")]
    OutOfRange { col: i32, row: i32 },

    /// 目标格子已有标记（1 起始）
    #[error("Cell ({col}, {row}) is already occupied")]
    CellOccupied { col: u8, row: u8 },

    /// 行数不对
    #[error("Expected {expected} rows, got {actual}")]
    InvalidRowCount { expected: usize, actual: usize },

    /// 某一行长度不对
    #[error("Row {row} has {len} cells, expected 3")]
    InvalidRowLength { row: usize, len: usize },

    /// 无法识别的字符
    #[error("Invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },
}

/// 棋盘操作结果类型
pub type Result<T> = std::result::Result<T, GridError>;
