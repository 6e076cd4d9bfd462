//! Util 层：终端的初始化和恢复
//!
//! 进入窗口模式前调用 `init_terminal()`（raw mode + 备用屏幕），
//! 退出时无论成功与否都必须调用 `restore_terminal()`，
//! 否则终端会保持在原始模式，用户输入不会正常显示。

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
