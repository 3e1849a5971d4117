//! 棋盘状态

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, EMPTY_CHAR, GRID_SIZE};
use crate::error::{GridError, Result};
use crate::mark::{Mark, Position};
use crate::notation::Notation;

const fn pos(col: u8, row: u8) -> Position {
    Position::new_unchecked(col, row)
}

/// 全部 8 条连线：3 行、3 列、2 条对角线
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(2, 0), pos(1, 1), pos(0, 2)],
];

/// 棋盘
///
/// 普通值类型：搜索时每个分支各自 clone 一份，互不影响。
/// 序列化为行字符串数组，反序列化时重新校验并统计步数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col
    cells: [Option<Mark>; CELL_COUNT],
    /// 已落子数，始终等于非空格子数
    move_count: u8,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            move_count: 0,
        }
    }

    /// 从行字符串创建棋盘，如 `["XX_", "O__", "___"]`
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Notation::parse_rows(rows)
    }

    /// 用行字符串重新配置整个棋盘
    ///
    /// 出错时棋盘保持不变。
    pub fn configure<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<()> {
        *self = Notation::parse_rows(rows)?;
        tracing::debug!(
            "Board configured: {} ({} moves)",
            Notation::to_string(self),
            self.move_count
        );
        Ok(())
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// 获取指定位置的标记
    pub fn get(&self, pos: Position) -> Option<Mark> {
        if pos.is_valid() {
            self.cells[pos.to_index()]
        } else {
            None
        }
    }

    /// 在空格落子
    ///
    /// 调用方需先用 [`Board::is_empty`] 确认格子为空。
    /// 越界位置不落子。
    pub fn place(&mut self, pos: Position, mark: Mark) {
        debug_assert!(pos.is_valid(), "place out of range {:?}", pos);
        if !pos.is_valid() {
            return;
        }
        debug_assert!(self.is_empty(pos), "place on occupied cell {:?}", pos);
        self.cells[pos.to_index()] = Some(mark);
        self.move_count += 1;
    }

    /// 带检查的落子，供输入层使用
    pub fn try_place(&mut self, pos: Position, mark: Mark) -> Result<()> {
        if !pos.is_valid() {
            return Err(GridError::OutOfRange {
                col: pos.col as i32 + 1,
                row: pos.row as i32 + 1,
            });
        }
        if !self.is_empty(pos) {
            return Err(GridError::CellOccupied {
                col: pos.col + 1,
                row: pos.row + 1,
            });
        }
        self.place(pos, mark);
        Ok(())
    }

    /// 格子是否为空
    pub fn is_empty(&self, pos: Position) -> bool {
        pos.is_valid() && self.cells[pos.to_index()].is_none()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.move_count as usize >= CELL_COUNT
    }

    /// 已落子数
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// 检查指定标记是否连成一线（每次扫描全部 8 条线）
    pub fn has_won(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&p| self.get(p) == Some(mark)))
    }

    /// 获胜方（如有）
    pub fn winner(&self) -> Option<Mark> {
        [Mark::Cross, Mark::Nought]
            .into_iter()
            .find(|&mark| self.has_won(mark))
    }

    /// 按行优先顺序列出所有空格
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..CELL_COUNT)
            .filter_map(Position::from_index)
            .filter(move |&p| self.is_empty(p))
    }

    /// 导出为行字符串
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(GRID_SIZE)
            .map(|row| row.iter().map(|cell| cell_char(*cell)).collect())
            .collect()
    }

    /// 由格子数组构造，步数按非空格子重新统计
    pub(crate) fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        let move_count = cells.iter().filter(|c| c.is_some()).count() as u8;
        Self { cells, move_count }
    }
}

fn cell_char(cell: Option<Mark>) -> char {
    cell.map(|m| m.to_char()).unwrap_or(EMPTY_CHAR)
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// 控制台显示格式：每格后跟一个空格，每行一行
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            for cell in row {
                write!(f, "{} ", cell_char(*cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Notation::parse(s)
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self> {
        Notation::parse_rows(rows.as_slice())
    }
}
