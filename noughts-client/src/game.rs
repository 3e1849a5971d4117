//! 对局流程
//!
//! 玩家与 AI 轮流落子，每步之后检查落子方是否连成一线，
//! 棋盘下满仍无胜者即为和棋。

use grid::{Board, Mark, Notation};
use noughts_ai::AiEngine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ClientError;
use crate::input::MoveSource;
use crate::render::BoardView;
use crate::settings::{Settings, Turn};

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 某方胜
    Win(Mark),
    /// 和棋
    Draw,
}

/// 一局游戏
pub struct Game<S, V> {
    board: Board,
    engine: AiEngine,
    input: S,
    view: V,
    human: Mark,
    ai: Mark,
    first_turn: Turn,
}

impl<S: MoveSource, V: BoardView> Game<S, V> {
    /// 按设置创建新对局
    pub fn new(settings: &Settings, input: S, view: V) -> Self {
        Self {
            board: Board::empty(),
            engine: AiEngine::new(),
            input,
            view,
            human: settings.human_mark,
            ai: settings.ai_mark(),
            first_turn: settings.first_turn,
        }
    }

    /// 从指定局面开始
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 拆出输入与显示端
    pub fn into_parts(self) -> (S, V) {
        (self.input, self.view)
    }

    /// 进行对局直到分出胜负或棋盘下满
    pub fn play(&mut self) -> Result<GameResult, ClientError> {
        info!(
            "Game started: human plays {}, AI plays {}, {:?} moves first",
            self.human, self.ai, self.first_turn
        );
        self.view.show_board(&self.board)?;

        let mut turn = self.first_turn;
        while !self.board.is_full() {
            let mark = match turn {
                Turn::Human => self.human_turn()?,
                Turn::Ai => self.ai_turn(),
            };
            self.view.announce_move(mark, &self.board)?;

            if self.board.has_won(mark) {
                return self.finish(GameResult::Win(mark));
            }
            turn = turn.next();
        }

        self.finish(GameResult::Draw)
    }

    fn human_turn(&mut self) -> Result<Mark, ClientError> {
        let pos = self.input.propose_move(&self.board)?;
        self.board.try_place(pos, self.human)?;
        debug!("Human {} plays {}", self.human, pos);
        Ok(self.human)
    }

    fn ai_turn(&mut self) -> Mark {
        let mark = self.ai;
        let outcome = self.engine.determine_best_move(&mut self.board, mark);
        debug!(
            "AI {} expects {:?} ({} nodes searched)",
            mark,
            outcome,
            self.engine.nodes_searched()
        );
        if outcome.is_win() {
            info!("AI {} has a forced win", mark);
        }
        mark
    }

    fn finish(&mut self, result: GameResult) -> Result<GameResult, ClientError> {
        info!(
            "Game over: {:?}, final board {}",
            result,
            Notation::to_string(&self.board)
        );
        self.view.announce_result(result)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ConsoleInput;
    use crate::render::ConsoleView;
    use grid::Position;
    use std::io::Cursor;

    type ScriptedGame = Game<ConsoleInput<Cursor<Vec<u8>>, Vec<u8>>, ConsoleView<Vec<u8>>>;

    fn scripted(settings: &Settings, script: &str) -> ScriptedGame {
        Game::new(
            settings,
            ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()),
            ConsoleView::new(Vec::new(), false),
        )
    }

    fn view_output(game: ScriptedGame) -> String {
        let (_, view) = game.into_parts();
        String::from_utf8(view.into_inner()).unwrap()
    }

    /// 总是选第一个空格的玩家
    struct FirstEmpty;

    impl MoveSource for FirstEmpty {
        fn propose_move(&mut self, board: &Board) -> Result<Position, ClientError> {
            board.empty_positions().next().ok_or(ClientError::InputClosed)
        }
    }

    /// 记录结果的显示
    #[derive(Default)]
    struct Recorder {
        moves: Vec<Mark>,
        results: Vec<GameResult>,
    }

    impl BoardView for Recorder {
        fn show_board(&mut self, _board: &Board) -> std::io::Result<()> {
            Ok(())
        }

        fn announce_move(&mut self, mark: Mark, _board: &Board) -> std::io::Result<()> {
            self.moves.push(mark);
            Ok(())
        }

        fn announce_result(&mut self, result: GameResult) -> std::io::Result<()> {
            self.results.push(result);
            Ok(())
        }
    }

    #[test]
    fn test_ai_beats_naive_human() {
        // 玩家依次下 (1,1) (2,1) (1,2)
        let mut game = scripted(&Settings::default(), "1\n1\n2\n1\n1\n2\n");

        let result = game.play().unwrap();
        assert_eq!(result, GameResult::Win(Mark::Nought));
        assert_eq!(Notation::to_string(game.board()), "XXO/XO_/O__");

        let out = view_output(game);
        assert!(out.starts_with("_ _ _ \n_ _ _ \n_ _ _ \n"));
        assert_eq!(out.matches("X PLAYS:").count(), 3);
        assert_eq!(out.matches("O PLAYS:").count(), 3);
        assert!(out.ends_with("\nO WINS!\n"));
    }

    #[test]
    fn test_ai_moves_first() {
        let settings = Settings {
            human_mark: Mark::Nought,
            first_turn: Turn::Ai,
            ..Settings::default()
        };
        assert_eq!(settings.ai_mark(), Mark::Cross);
        let mut game = Game::new(&settings, FirstEmpty, Recorder::default());

        // AI 第二步就已报告最终胜利，但对局要到真正连线才结束
        let result = game.play().unwrap();
        assert_eq!(result, GameResult::Win(Mark::Cross));
        assert_eq!(Notation::to_string(game.board()), "OO_/___/XXX");

        let (_, recorder) = game.into_parts();
        assert_eq!(
            recorder.moves,
            vec![Mark::Cross, Mark::Nought, Mark::Cross, Mark::Nought, Mark::Cross]
        );
        assert_eq!(recorder.results, vec![GameResult::Win(Mark::Cross)]);
    }

    #[test]
    fn test_human_completes_line() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        let mut game = scripted(&Settings::default(), "3\n1\n").with_board(board);

        assert_eq!(game.play().unwrap(), GameResult::Win(Mark::Cross));
        assert!(view_output(game).ends_with("\nX WINS!\n"));
    }

    #[test]
    fn test_full_board_is_draw() {
        let board: Board = "XOX/XOO/OX_".parse().unwrap();
        let mut game = scripted(&Settings::default(), "3\n3\n").with_board(board);

        assert_eq!(game.play().unwrap(), GameResult::Draw);
        assert!(game.board().is_full());
        assert!(view_output(game).ends_with("\nWE DREW!\n"));
    }

    #[test]
    fn test_ai_never_loses() {
        for first_turn in [Turn::Human, Turn::Ai] {
            for human_mark in [Mark::Cross, Mark::Nought] {
                let settings = Settings {
                    human_mark,
                    first_turn,
                    ..Settings::default()
                };
                let mut game = Game::new(&settings, FirstEmpty, Recorder::default());
                let result = game.play().unwrap();
                assert_ne!(result, GameResult::Win(human_mark));
            }
        }
    }

    #[test]
    fn test_input_closed_aborts_game() {
        let mut game = scripted(&Settings::default(), "2\n");
        assert!(matches!(game.play(), Err(ClientError::InputClosed)));
    }
}
