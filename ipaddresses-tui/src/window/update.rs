//! 状态更新

use ipaddresses_core::WindowEvents;

use super::message::WindowMessage;
use super::model::{MenuItem, OpenMenu, Popup, WindowState};

/// 根据消息更新窗口状态
///
/// 帮助文本通过 `events.help()` 向核心库索取；退出回调由主循环在
/// `should_quit` 之后统一调用。
pub fn update(state: &mut WindowState, msg: WindowMessage, events: &mut dyn WindowEvents) {
    match msg {
        WindowMessage::Noop => {}
        WindowMessage::Quit => state.should_quit = true,
        WindowMessage::ShowHelp => {
            state.menu = None;
            state.popup = Some(Popup::Help(events.help().to_string()));
        }
        WindowMessage::ShowAbout => {
            state.menu = None;
            state.popup = Some(Popup::About);
        }
        WindowMessage::OpenMenu(menu) => {
            state.popup = None;
            state.menu = Some(OpenMenu::new(menu));
        }
        WindowMessage::CloseOverlay => {
            if state.popup.take().is_none() {
                state.menu = None;
            }
        }
        WindowMessage::MenuUp => {
            if let Some(open) = state.menu.as_mut() {
                let len = open.menu.items().len();
                open.selected = (open.selected + len - 1) % len;
            }
        }
        WindowMessage::MenuDown => {
            if let Some(open) = state.menu.as_mut() {
                open.selected = (open.selected + 1) % open.menu.items().len();
            }
        }
        WindowMessage::MenuSwitch => {
            if let Some(open) = state.menu {
                state.menu = Some(OpenMenu::new(open.menu.other()));
            }
        }
        WindowMessage::MenuConfirm => {
            if let Some(open) = state.menu.take() {
                let next = match open.current() {
                    MenuItem::Exit => WindowMessage::Quit,
                    MenuItem::Help => WindowMessage::ShowHelp,
                    MenuItem::About => WindowMessage::ShowAbout,
                };
                update(state, next, events);
            }
        }
    }
}
