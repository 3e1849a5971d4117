//! 棋盘显示

use std::io::{self, Write};

use grid::{Board, Mark, Position, EMPTY_CHAR, GRID_SIZE};

use crate::game::GameResult;

/// 对局显示
pub trait BoardView {
    /// 显示当前棋盘
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// 某方落子后显示
    fn announce_move(&mut self, mark: Mark, board: &Board) -> io::Result<()>;

    /// 显示对局结果
    fn announce_result(&mut self, result: GameResult) -> io::Result<()>;
}

/// 控制台显示
pub struct ConsoleView<W> {
    writer: W,
    show_coordinates: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(writer: W, show_coordinates: bool) -> Self {
        Self {
            writer,
            show_coordinates,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// 带行列编号（1 起始）的棋盘
    fn write_with_coordinates(&mut self, board: &Board) -> io::Result<()> {
        write!(self.writer, "  ")?;
        for col in 1..=GRID_SIZE {
            write!(self.writer, "{} ", col)?;
        }
        writeln!(self.writer)?;

        for row in 0..GRID_SIZE as u8 {
            write!(self.writer, "{} ", row + 1)?;
            for col in 0..GRID_SIZE as u8 {
                let cell = board
                    .get(Position::new_unchecked(col, row))
                    .map(|m| m.to_char())
                    .unwrap_or(EMPTY_CHAR);
                write!(self.writer, "{} ", cell)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> BoardView for ConsoleView<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        if self.show_coordinates {
            self.write_with_coordinates(board)?;
        } else {
            write!(self.writer, "{}", board)?;
        }
        self.writer.flush()
    }

    fn announce_move(&mut self, mark: Mark, board: &Board) -> io::Result<()> {
        writeln!(self.writer, "\n{} PLAYS:", mark)?;
        self.show_board(board)
    }

    fn announce_result(&mut self, result: GameResult) -> io::Result<()> {
        match result {
            GameResult::Win(mark) => writeln!(self.writer, "\n{} WINS!", mark)?,
            GameResult::Draw => writeln!(self.writer, "\nWE DREW!")?,
        }
        self.writer.flush()
    }
}
