//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const GRID_SIZE: usize = 3;

/// 棋盘格子总数
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// 记谱中的空格字符
pub const EMPTY_CHAR: char = '_';

/// 记谱中的行分隔符
pub const ROW_SEPARATOR: char = '/';

/// 玩家输入坐标的最小值（从 1 开始）
pub const HUMAN_COORD_MIN: u8 = 1;

/// 玩家输入坐标的最大值
pub const HUMAN_COORD_MAX: u8 = GRID_SIZE as u8;
