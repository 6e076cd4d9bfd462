//! 窗口状态

/// 菜单栏上的菜单
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Help,
}

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Exit,
    Help,
    About,
}

impl Menu {
    /// 菜单中的项目（按显示顺序）
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            Menu::File => &[MenuItem::Exit],
            Menu::Help => &[MenuItem::Help, MenuItem::About],
        }
    }

    /// 左右切换到另一个菜单
    #[must_use]
    pub fn other(self) -> Menu {
        match self {
            Menu::File => Menu::Help,
            Menu::Help => Menu::File,
        }
    }
}

/// 覆盖在窗口上的弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    /// 帮助文本（来自 help 回调）
    Help(String),
    About,
}

/// 打开的下拉菜单及其选中项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMenu {
    pub menu: Menu,
    pub selected: usize,
}

impl OpenMenu {
    pub fn new(menu: Menu) -> Self {
        Self { menu, selected: 0 }
    }

    pub fn current(&self) -> MenuItem {
        let items = self.menu.items();
        items[self.selected.min(items.len() - 1)]
    }
}

/// 窗口状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowState {
    pub menu: Option<OpenMenu>,
    pub popup: Option<Popup>,
    /// 决定窗口是否应该关闭
    pub should_quit: bool,
}
