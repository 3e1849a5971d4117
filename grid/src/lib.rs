//! 井字棋（圈叉棋）棋盘核心库
//!
//! 包含:
//! - 标记、坐标等核心数据结构
//! - 3x3 棋盘、落子与胜负判定
//! - 行字符串记谱（用于构造任意测试局面）
//! - 错误类型

mod board;
mod constants;
mod error;
mod mark;
mod notation;

pub use board::{Board, LINES};
pub use constants::*;
pub use error::{GridError, Result};
pub use mark::{Mark, Position};
pub use notation::Notation;
