//! 搜索引擎
//!
//! 完整博弈树枚举：对每个空格模拟落子，递归求对手的最佳应对，
//! 按结局分类后选出最好的一步。不做剪枝，深度最多 9 层。

use grid::{Board, Mark, Notation, Position};
use tracing::{debug, trace};

use crate::outcome::{Candidate, Candidates, Outcome};

/// AI 引擎
#[derive(Debug, Default)]
pub struct AiEngine {
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 计算 `mark` 的最佳走法并落在 `board` 上，返回结局分类
    ///
    /// 返回值只会是 `EventualWin`、`Draw` 或 `EventualLoss`。
    /// 棋盘已满（或没有候选）时返回 `Draw`，棋盘不变。
    pub fn determine_best_move(&mut self, board: &mut Board, mark: Mark) -> Outcome {
        match self.search(board, mark) {
            Some(candidate) => {
                board.place(candidate.position, mark);
                candidate.outcome
            }
            None => Outcome::Draw,
        }
    }

    /// 搜索最佳走法（不修改棋盘）
    pub fn search(&mut self, board: &Board, mark: Mark) -> Option<Candidate> {
        self.nodes_searched = 0;

        let best = self.best_candidate(board, mark);

        match &best {
            Some(candidate) => debug!(
                "{} on {}: play {} -> {:?}, nodes searched: {}",
                mark,
                Notation::to_string(board),
                candidate.position,
                candidate.outcome,
                self.nodes_searched
            ),
            None => debug!(
                "{} on {}: no move available",
                mark,
                Notation::to_string(board)
            ),
        }

        best
    }

    /// 单层扫描
    ///
    /// 直接胜利立即返回（报告为 `EventualWin`），否则按分类记录，
    /// 最后按 胜 > 和 > 负 选择。
    fn best_candidate(&mut self, board: &Board, mark: Mark) -> Option<Candidate> {
        self.nodes_searched += 1;

        if board.is_full() {
            return None;
        }

        let mut candidates = Candidates::default();

        for pos in board.empty_positions() {
            match self.simulate_move(board, pos, mark) {
                Outcome::ImmediateWin => {
                    return Some(Candidate::new(pos, Outcome::EventualWin));
                }
                outcome => candidates.record(pos, outcome),
            }
        }

        candidates.best()
    }

    /// 在棋盘副本上模拟一步并分类
    fn simulate_move(&mut self, board: &Board, pos: Position, mark: Mark) -> Outcome {
        let mut simulated = board.clone();
        simulated.place(pos, mark);

        if simulated.has_won(mark) {
            return Outcome::ImmediateWin;
        }

        // 对手无棋可走（棋盘已满）视为和棋
        let outcome = self
            .best_candidate(&simulated, mark.opponent())
            .map_or(Outcome::Draw, |reply| reply.outcome.for_opponent());

        trace!("{} at {}: {:?}", mark, pos, outcome);
        outcome
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
