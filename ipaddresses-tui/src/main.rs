//! ipaddresses
//!
//! 显示本机的私有地址与公网地址。
//!
//! ## 运行模式
//!
//! - 第一个参数为 `-g` / `--gui`（不区分大小写）：打开终端窗口
//! - 其余情况：命令行模式，参数交给核心库解析
//!
//! main.rs 的执行顺序：
//! fn `main()` {
//!
//!     init_tracing()              // 日志输出到 stderr，stdout 留给地址和窗口
//!     AppConfig::from_env()       // 读取语言、服务地址与超时
//!     Dispatcher::dispatch()      // 解析参数并运行对应模式
//!
//! }

mod util;
mod window;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use ipaddresses_core::{AppConfig, Dispatcher, ExitStatus, SystemAddressProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use window::TerminalWindow;

/// 初始化日志（默认只输出 warn 及以上）
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

async fn run() -> Result<ExitStatus> {
    let config = AppConfig::from_env();
    tracing::debug!(
        "Config: locale={}, endpoint={}, timeout={:?}",
        config.locale.code(),
        config.endpoint,
        config.timeout
    );

    let provider = SystemAddressProvider::from_config(&config)?;
    let dispatcher = Dispatcher::new(&config, provider);

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let status = dispatcher
        .dispatch(
            args,
            &mut TerminalWindow::new(),
            &mut io::stdout(),
            &mut io::stderr(),
        )
        .await?;
    Ok(status)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
