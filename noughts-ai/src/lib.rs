//! 井字棋 AI 引擎
//!
//! 包含:
//! - 结局分类（Outcome）与候选走法
//! - 完整博弈树搜索（无剪枝，局面足够小可以全部枚举）

mod outcome;
mod search;

pub use outcome::{Candidate, Candidates, Outcome};
pub use search::AiEngine;
