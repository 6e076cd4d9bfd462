//! 窗口消息

use super::model::Menu;

/// 由按键翻译而来、交给 update 消费的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    /// 无操作
    Noop,
    /// 关闭窗口（File→Exit、q、Esc、Ctrl+C）
    Quit,
    /// 显示帮助（F1 或 Help 菜单）
    ShowHelp,
    ShowAbout,
    OpenMenu(Menu),
    /// 关闭当前菜单或弹窗
    CloseOverlay,
    MenuUp,
    MenuDown,
    /// 切换到相邻菜单
    MenuSwitch,
    /// 执行选中的菜单项
    MenuConfirm,
}
