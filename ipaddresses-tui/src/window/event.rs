//! 事件处理：把按键翻译为 [`WindowMessage`]

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use super::keymap::DefaultKeymap;
use super::message::WindowMessage;
use super::model::{Menu, WindowState};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, state: &WindowState) -> WindowMessage {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        // 终端窗口大小改变时下一轮自动重绘
        _ => WindowMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, state: &WindowState) -> WindowMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return WindowMessage::Noop;
    }

    // Ctrl+C 在任何状态下都关闭窗口
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return WindowMessage::Quit;
    }

    // 弹窗打开时：任意键关闭
    if state.popup.is_some() {
        return WindowMessage::CloseOverlay;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return WindowMessage::ShowHelp;
    }
    if DefaultKeymap::FILE_MENU.matches(&key) {
        return WindowMessage::OpenMenu(Menu::File);
    }
    if DefaultKeymap::HELP_MENU.matches(&key) {
        return WindowMessage::OpenMenu(Menu::Help);
    }

    if state.menu.is_some() {
        return handle_menu_keys(&key);
    }

    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return WindowMessage::Quit;
    }

    WindowMessage::Noop
}

/// 下拉菜单打开时的按键
fn handle_menu_keys(key: &KeyEvent) -> WindowMessage {
    if DefaultKeymap::BACK.matches(key) {
        WindowMessage::CloseOverlay
    } else if DefaultKeymap::MENU_UP.matches(key) {
        WindowMessage::MenuUp
    } else if DefaultKeymap::MENU_DOWN.matches(key) {
        WindowMessage::MenuDown
    } else if DefaultKeymap::MENU_LEFT.matches(key) || DefaultKeymap::MENU_RIGHT.matches(key) {
        WindowMessage::MenuSwitch
    } else if DefaultKeymap::MENU_CONFIRM.matches(key) {
        WindowMessage::MenuConfirm
    } else {
        WindowMessage::Noop
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;
    use crate::window::model::{OpenMenu, Popup};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn with_menu(menu: Menu) -> WindowState {
        WindowState {
            menu: Some(OpenMenu::new(menu)),
            ..WindowState::default()
        }
    }

    #[test]
    fn f1_requests_help() {
        let state = WindowState::default();
        assert_eq!(handle_event(key(KeyCode::F(1)), &state), WindowMessage::ShowHelp);
        assert_eq!(
            handle_event(key(KeyCode::F(1)), &with_menu(Menu::File)),
            WindowMessage::ShowHelp
        );
    }

    #[test]
    fn alt_letters_open_menus() {
        let state = WindowState::default();
        assert_eq!(
            handle_event(press(KeyCode::Char('f'), KeyModifiers::ALT), &state),
            WindowMessage::OpenMenu(Menu::File)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('h'), KeyModifiers::ALT), &state),
            WindowMessage::OpenMenu(Menu::Help)
        );
    }

    #[test]
    fn esc_closes_menu_before_window() {
        assert_eq!(
            handle_event(key(KeyCode::Esc), &with_menu(Menu::Help)),
            WindowMessage::CloseOverlay
        );
        assert_eq!(
            handle_event(key(KeyCode::Esc), &WindowState::default()),
            WindowMessage::Quit
        );
    }

    #[test]
    fn any_key_dismisses_popup() {
        let state = WindowState {
            popup: Some(Popup::About),
            ..WindowState::default()
        };
        for code in [KeyCode::Char('q'), KeyCode::Enter, KeyCode::F(1), KeyCode::Esc] {
            assert_eq!(
                handle_event(key(code), &state),
                WindowMessage::CloseOverlay,
                "{code:?}"
            );
        }
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &state),
            WindowMessage::Quit
        );
    }

    #[test]
    fn menu_navigation_keys() {
        let state = with_menu(Menu::Help);
        assert_eq!(handle_event(key(KeyCode::Down), &state), WindowMessage::MenuDown);
        assert_eq!(handle_event(key(KeyCode::Up), &state), WindowMessage::MenuUp);
        assert_eq!(handle_event(key(KeyCode::Left), &state), WindowMessage::MenuSwitch);
        assert_eq!(handle_event(key(KeyCode::Enter), &state), WindowMessage::MenuConfirm);
        // q inside an open menu does nothing
        assert_eq!(handle_event(key(KeyCode::Char('q')), &state), WindowMessage::Noop);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(
            handle_event(Event::Key(release), &WindowState::default()),
            WindowMessage::Noop
        );
    }

    #[test]
    fn q_quits() {
        assert_eq!(
            handle_event(key(KeyCode::Char('q')), &WindowState::default()),
            WindowMessage::Quit
        );
    }
}
