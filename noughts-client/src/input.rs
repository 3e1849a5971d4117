//! 玩家走法输入
//!
//! 玩家输入 1-3 的列号和行号，输入层负责校验并反复提示，
//! 直到给出范围内且为空的格子。

use std::io::{BufRead, Write};

use grid::{Board, Position};
use tracing::debug;

use crate::error::ClientError;

/// 走法来源
pub trait MoveSource {
    /// 给出一个合法（范围内且为空）的位置
    fn propose_move(&mut self, board: &Board) -> Result<Position, ClientError>;
}

/// 解析一个坐标值，非数字返回 None
pub fn parse_coordinate(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

/// 控制台输入
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 拆出内部读写端
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// 打印提示并读取一行
    fn prompt(&mut self, label: &str) -> Result<Option<i32>, ClientError> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ClientError::InputClosed);
        }
        Ok(parse_coordinate(&line))
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn propose_move(&mut self, board: &Board) -> Result<Position, ClientError> {
        loop {
            let col = self.prompt("\nEnter Column: ")?;
            let row = self.prompt("Enter Row: ")?;

            if let (Some(col), Some(row)) = (col, row) {
                match Position::from_human(col, row) {
                    Ok(pos) if board.is_empty(pos) => return Ok(pos),
                    Ok(pos) => debug!("Rejected move {}: cell occupied", pos),
                    Err(e) => debug!("Rejected move: {}", e),
                }
            } else {
                debug!("Rejected move: not a number");
            }

            writeln!(self.writer, "Invalid Co-ordinates. Try Again")?;
        }
    }
}
