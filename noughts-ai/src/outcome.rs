//! 结局分类

use std::cmp::Ordering;

use grid::Position;
use serde::{Deserialize, Serialize};

/// 一步走法的结局分类
///
/// `ImmediateWin` 只在单层扫描内部用作短路信号，
/// [`crate::AiEngine`] 对外从不返回它，直接胜利也报告为 `EventualWin`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 这一步本身连成一线
    ImmediateWin,
    /// 对手最佳应对下仍然获胜
    EventualWin,
    /// 和棋
    Draw,
    /// 对手最佳应对下落败
    EventualLoss,
}

impl Outcome {
    /// 选择优先级，越大越好
    pub fn rank(&self) -> u8 {
        match self {
            Outcome::ImmediateWin => 3,
            Outcome::EventualWin => 2,
            Outcome::Draw => 1,
            Outcome::EventualLoss => 0,
        }
    }

    /// 是否为胜利（直接或最终）
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::ImmediateWin | Outcome::EventualWin)
    }

    /// 把对手报告的结局换算成己方的分类
    pub fn for_opponent(self) -> Outcome {
        match self {
            Outcome::ImmediateWin | Outcome::EventualWin => Outcome::EventualLoss,
            Outcome::EventualLoss => Outcome::EventualWin,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl PartialOrd for Outcome {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Outcome {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// 候选走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub position: Position,
    pub outcome: Outcome,
}

impl Candidate {
    pub fn new(position: Position, outcome: Outcome) -> Self {
        Self { position, outcome }
    }
}

/// 按分类保存的候选走法
///
/// 每个分类只保留最后记录的位置：按行优先扫描时，后面的格子覆盖前面的。
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    win: Option<Position>,
    draw: Option<Position>,
    loss: Option<Position>,
}

impl Candidates {
    /// 记录候选，覆盖同分类的旧值
    pub fn record(&mut self, position: Position, outcome: Outcome) {
        let slot = match outcome {
            Outcome::ImmediateWin | Outcome::EventualWin => &mut self.win,
            Outcome::Draw => &mut self.draw,
            Outcome::EventualLoss => &mut self.loss,
        };
        *slot = Some(position);
    }

    /// 按 胜 > 和 > 负 的顺序取第一个存在的候选
    pub fn best(&self) -> Option<Candidate> {
        [
            (self.win, Outcome::EventualWin),
            (self.draw, Outcome::Draw),
            (self.loss, Outcome::EventualLoss),
        ]
        .into_iter()
        .find_map(|(position, outcome)| position.map(|p| Candidate::new(p, outcome)))
    }

    pub fn is_empty(&self) -> bool {
        self.win.is_none() && self.draw.is_none() && self.loss.is_none()
    }
}
