//! 客户端错误类型

use std::path::PathBuf;

use grid::GridError;
use thiserror::Error;

/// 对局错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 棋盘错误
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// 输入流在给出合法走法前结束
    #[error("Input closed before a move was entered")]
    InputClosed,
}

/// 设置文件错误
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 文件不存在
    #[error("Settings file not found: {0:?}")]
    NotFound(PathBuf),

    /// 读写失败
    #[error("Failed to access settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 格式无效
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}
