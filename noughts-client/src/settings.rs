//! 游戏设置模块
//!
//! 设置保存在 `<配置目录>/noughts-crosses/settings.json`，缺省字段使用默认值。

use std::fs;
use std::path::{Path, PathBuf};

use grid::Mark;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// 行棋方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Turn {
    /// 玩家
    #[default]
    Human,
    /// AI
    Ai,
}

impl Turn {
    /// 轮到另一方
    pub fn next(self) -> Self {
        match self {
            Turn::Human => Turn::Ai,
            Turn::Ai => Turn::Human,
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// EnvFilter 指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 玩家使用的标记，AI 使用另一个
    pub human_mark: Mark,
    /// 先手方
    pub first_turn: Turn,
    /// 显示行列编号
    pub show_coordinates: bool,
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            human_mark: Mark::Cross,
            first_turn: Turn::Human,
            show_coordinates: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("noughts-crosses");
            path.push("settings.json");
            path
        })
    }

    /// AI 使用的标记
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// 从默认路径加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从文件加载设置，文件不存在或无效时使用默认设置
    ///
    /// 文件不存在时（首次运行）写入一份默认设置。
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Err(SettingsError::NotFound(_)) => {
                tracing::info!("设置文件不存在，使用默认设置");
                let settings = Self::default();
                if let Err(e) = settings.save_to(path) {
                    tracing::warn!("无法写入默认设置: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("{}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 读取设置文件（不回退）
    fn read(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// 保存设置到文件
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source: std::io::Error| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;

        tracing::info!("Settings saved: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.human_mark, Mark::Cross);
        assert_eq!(settings.ai_mark(), Mark::Nought);
        assert_eq!(settings.first_turn, Turn::Human);
        assert!(!settings.show_coordinates);
        assert_eq!(settings.log_level.as_directive(), "warn");
    }

    #[test]
    fn test_turn_next() {
        assert_eq!(Turn::Human.next(), Turn::Ai);
        assert_eq!(Turn::Ai.next(), Turn::Human);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let settings = Settings {
            human_mark: Mark::Nought,
            first_turn: Turn::Ai,
            show_coordinates: true,
            log_level: LogLevel::Debug,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{ "first_turn": "Ai" }"#).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.first_turn, Turn::Ai);
        assert_eq!(loaded.human_mark, Mark::Cross);
        assert_eq!(loaded.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config").join("settings.json");

        assert!(matches!(
            Settings::read(&path),
            Err(SettingsError::NotFound(_))
        ));
        assert_eq!(Settings::load_from(&path), Settings::default());

        // 首次加载后默认设置已写入
        assert!(path.exists());
        assert_eq!(Settings::read(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(Settings::read(&path), Err(SettingsError::Json(_))));
        assert_eq!(Settings::load_from(&path), Settings::default());

        // 无效文件不会被覆盖
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }
}
