//! 标记与坐标定义

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, HUMAN_COORD_MAX, HUMAN_COORD_MIN};
use crate::error::GridError;

/// 玩家标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 叉（X）
    Cross,
    /// 圈（O）
    Nought,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// 获取记谱字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }

    /// 从记谱字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::Cross),
            'o' | 'O' => Some(Mark::Nought),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘坐标（内部从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-2)
    pub col: u8,
    /// 行 (0-2)
    pub row: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(col: u8, row: u8) -> Option<Self> {
        if (col as usize) < GRID_SIZE && (row as usize) < GRID_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// 从玩家输入的坐标（1-3）转换
    pub fn from_human(col: i32, row: i32) -> Result<Self, GridError> {
        let range = (HUMAN_COORD_MIN as i32)..=(HUMAN_COORD_MAX as i32);
        if range.contains(&col) && range.contains(&row) {
            Ok(Self {
                col: (col - 1) as u8,
                row: (row - 1) as u8,
            })
        } else {
            Err(GridError::OutOfRange { col, row })
        }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.col as usize) < GRID_SIZE && (self.row as usize) < GRID_SIZE
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < GRID_SIZE * GRID_SIZE {
            Some(Position {
                col: (index % GRID_SIZE) as u8,
                row: (index / GRID_SIZE) as u8,
            })
        } else {
            None
        }
    }
}

/// 以玩家视角（1 起始）显示
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col + 1, self.row + 1)
    }
}
