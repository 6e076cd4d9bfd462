//! 终端窗口
//!
//! 采用与主程序相同的 Elm Architecture 拆分：
//! - **Model**: 窗口状态 (`model`)
//! - **Message**: 事件消息 (`message`)
//! - **Update**: 状态更新 (`update`)
//! - **View**: UI 渲染 (`view`)
//! - **Event**: 输入处理 (`event`, `keymap`)
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!     terminal.draw(|f| view::render(&state, content, f))
//!     if state.should_quit { break }
//!     if let Some(event) = poll_event() {
//!         let msg = handle_event(event, &state);
//!         update::update(&mut state, msg, events)
//!     }
//! }

mod event;
mod keymap;
mod message;
mod model;
mod update;
mod view;

use std::time::Duration;

use anyhow::Result;
use ipaddresses_core::{CoreError, CoreResult, ExitStatus, GuiFrontend, WindowContent, WindowEvents};

use crate::util::{init_terminal, restore_terminal, Term};
use model::WindowState;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 在当前终端中显示地址的窗口
#[derive(Debug, Default)]
pub struct TerminalWindow;

impl TerminalWindow {
    pub fn new() -> Self {
        Self
    }
}

/// 运行窗口主循环
fn run_loop(
    terminal: &mut Term,
    content: &WindowContent,
    events: &mut dyn WindowEvents,
) -> Result<()> {
    let mut state = WindowState::default();
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(&state, content, frame))?;

        // 2. 检查是否应该退出
        if state.should_quit {
            break;
        }

        // 3. 轮询事件并更新状态
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, &state);
            update::update(&mut state, msg, events);
        }
    }
    Ok(())
}

impl GuiFrontend for TerminalWindow {
    fn run(
        &mut self,
        content: &WindowContent,
        events: &mut dyn WindowEvents,
    ) -> CoreResult<ExitStatus> {
        let frontend_error = |e: anyhow::Error| CoreError::Frontend(format!("{e:#}"));

        let mut terminal = init_terminal(&content.title).map_err(frontend_error)?;
        let result = run_loop(&mut terminal, content, events);

        // 无论成功失败都恢复终端
        let restored = restore_terminal(&mut terminal);
        result.map_err(frontend_error)?;
        restored.map_err(frontend_error)?;

        Ok(events.exit())
    }
}
