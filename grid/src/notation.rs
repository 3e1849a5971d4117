//! 行字符串记谱
//!
//! 每行 3 个字符，`_` 为空格，`X` / `O` 为双方标记。
//! 紧凑形式用 `/` 连接三行：
//!
//! `XX_/O__/O__`

use crate::board::Board;
use crate::constants::{CELL_COUNT, EMPTY_CHAR, GRID_SIZE, ROW_SEPARATOR};
use crate::error::{GridError, Result};
use crate::mark::Mark;

/// 记谱处理
pub struct Notation;

impl Notation {
    /// 解析紧凑记谱字符串
    pub fn parse(s: &str) -> Result<Board> {
        let rows: Vec<&str> = s.trim().split(ROW_SEPARATOR).collect();
        Self::parse_rows(rows.as_slice())
    }

    /// 解析行字符串数组
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::InvalidRowCount {
                expected: GRID_SIZE,
                actual: rows.len(),
            });
        }

        let mut cells = [None; CELL_COUNT];
        for (row_idx, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.as_ref().chars().collect();
            if symbols.len() != GRID_SIZE {
                return Err(GridError::InvalidRowLength {
                    row: row_idx,
                    len: symbols.len(),
                });
            }

            for (col_idx, &symbol) in symbols.iter().enumerate() {
                cells[row_idx * GRID_SIZE + col_idx] = Self::parse_cell(symbol).ok_or(
                    GridError::InvalidSymbol {
                        row: row_idx,
                        col: col_idx,
                        symbol,
                    },
                )?;
            }
        }

        Ok(Board::from_cells(cells))
    }

    /// 解析单个格子：`Some(None)` 为空格，`None` 为非法字符
    fn parse_cell(symbol: char) -> Option<Option<Mark>> {
        match symbol {
            EMPTY_CHAR => Some(None),
            // 记谱只接受大写
            'X' | 'O' => Mark::from_char(symbol).map(Some),
            _ => None,
        }
    }

    /// 将棋盘转换为紧凑记谱
    pub fn to_string(board: &Board) -> String {
        let separator = ROW_SEPARATOR.to_string();
        board.to_rows().join(separator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::Position;

    #[test]
    fn test_parse_compact() {
        let board = Notation::parse("XX_/O__/O__").unwrap();
        assert_eq!(board.move_count(), 4);
        assert_eq!(board.get(Position::new_unchecked(1, 0)), Some(Mark::Cross));
        assert_eq!(board.get(Position::new_unchecked(0, 2)), Some(Mark::Nought));
        assert!(board.is_empty(Position::new_unchecked(2, 0)));
    }

    #[test]
    fn test_to_string() {
        let board = Notation::parse("XOX/_O_/__X").unwrap();
        assert_eq!(Notation::to_string(&board), "XOX/_O_/__X");
        assert_eq!(Notation::to_string(&Board::empty()), "___/___/___");
    }

    #[test]
    fn test_from_str() {
        let board: Board = "___/_X_/___".parse().unwrap();
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_invalid_row_count() {
        assert_eq!(
            Notation::parse("XX_/___").unwrap_err(),
            GridError::InvalidRowCount { expected: 3, actual: 2 }
        );
        assert!(Notation::parse_rows(&["___", "___", "___", "___"]).is_err());
        assert!(Notation::parse_rows::<&str>(&[]).is_err());
    }

    #[test]
    fn test_invalid_row_length() {
        assert_eq!(
            Notation::parse_rows(&["XX_", "O_", "___"]).unwrap_err(),
            GridError::InvalidRowLength { row: 1, len: 2 }
        );
        assert!(Notation::parse_rows(&["XX_", "____", "___"]).is_err());
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            Notation::parse_rows(&["XX_", "___", "_Q_"]).unwrap_err(),
            GridError::InvalidSymbol { row: 2, col: 1, symbol: 'Q' }
        );
        // 小写和空白都不接受
        assert!(Notation::parse("xx_/___/___").is_err());
        assert!(Notation::parse("X _/___/___").is_err());
    }
}
