use std::io;

use anyhow::{Context, Result};
use noughts_client::{ConsoleInput, ConsoleView, Game, Settings};
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // 日志级别来自设置：加载设置期间先用临时的 stderr 日志
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .finish();
    let settings = tracing::subscriber::with_default(bootstrap, Settings::load);

    // 初始化日志（输出到 stderr，不干扰棋盘显示）
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_level.as_directive()))
        .context("无效的日志级别")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    debug!("Settings: {:?}", settings);

    let stdin = io::stdin();
    let input = ConsoleInput::new(stdin.lock(), io::stdout());
    let view = ConsoleView::new(io::stdout(), settings.show_coordinates);

    let mut game = Game::new(&settings, input, view);
    let result = game.play().context("对局异常结束")?;
    debug!("Result: {:?}", result);

    Ok(())
}
