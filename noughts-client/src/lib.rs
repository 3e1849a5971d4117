//! 井字棋控制台客户端
//!
//! 包含:
//! - 对局流程（玩家与 AI 轮流落子）
//! - 控制台输入与棋盘显示
//! - 设置文件

pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;

pub use error::{ClientError, SettingsError};
pub use game::{Game, GameResult};
pub use input::{ConsoleInput, MoveSource};
pub use render::{BoardView, ConsoleView};
pub use settings::{LogLevel, Settings, Turn};
