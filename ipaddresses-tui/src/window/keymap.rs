//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 菜单
    pub const FILE_MENU: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const HELP_MENU: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const MENU_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const MENU_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const MENU_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const MENU_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const MENU_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
