//! 窗口渲染

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use ipaddresses_core::WindowContent;

use super::model::{Menu, MenuItem, OpenMenu, Popup, WindowState};

/// 菜单栏中每个菜单标题的左侧偏移
const MENU_PADDING: u16 = 1;

/// 渲染整个窗口
pub fn render(state: &WindowState, content: &WindowContent, frame: &mut Frame) {
    let size = frame.area();

    // 两层布局：菜单栏 + 主内容区
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(size);

    render_menu_bar(state, content, frame, layout[0]);
    render_addresses(content, frame, layout[1]);

    // 下拉菜单和弹窗在最上层
    if let Some(open) = state.menu {
        render_dropdown(open, content, frame, layout[0]);
    }
    if let Some(ref popup) = state.popup {
        render_popup(popup, content, frame);
    }
}

fn menu_title(menu: Menu, content: &WindowContent) -> &str {
    match menu {
        Menu::File => &content.menu.file,
        Menu::Help => &content.menu.help,
    }
}

fn item_label(item: MenuItem, content: &WindowContent) -> &str {
    match item {
        MenuItem::Exit => &content.menu.exit,
        MenuItem::Help => &content.menu.help,
        MenuItem::About => &content.menu.about,
    }
}

/// 文本显示宽度（按字符计）
fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// 渲染顶部菜单栏
fn render_menu_bar(state: &WindowState, content: &WindowContent, frame: &mut Frame, area: Rect) {
    let open = state.menu.map(|m| m.menu);
    let mut spans = Vec::new();
    for menu in [Menu::File, Menu::Help] {
        let style = if open == Some(menu) {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::raw(" ".repeat(usize::from(MENU_PADDING))));
        spans.push(Span::styled(format!(" {} ", menu_title(menu, content)), style));
    }
    spans.push(Span::styled("   F1", Style::default().fg(Color::DarkGray)));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// 渲染地址两行
fn render_addresses(content: &WindowContent, frame: &mut Frame, area: Rect) {
    let width = text_width(&content.private_line)
        .max(text_width(&content.public_line))
        .max(text_width(&content.title))
        .saturating_add(6);
    let rect = centered_rect(width, 6, area);

    let block = Block::default()
        .title(format!(" {} ", content.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::styled(content.private_line.as_str(), Style::default().fg(Color::White)),
        Line::styled(content.public_line.as_str(), Style::default().fg(Color::White)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, rect);
}

/// 渲染下拉菜单
fn render_dropdown(open: OpenMenu, content: &WindowContent, frame: &mut Frame, bar: Rect) {
    // 计算菜单标题在菜单栏上的起始位置
    let mut x = bar.x + MENU_PADDING;
    if open.menu == Menu::Help {
        x += text_width(menu_title(Menu::File, content)) + 2 + MENU_PADDING;
    }

    let items = open.menu.items();
    let width = items
        .iter()
        .map(|item| text_width(item_label(*item, content)))
        .max()
        .unwrap_or(0)
        .saturating_add(6);
    let height = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(2);

    let screen = frame.area();
    let area = Rect::new(
        x.min(screen.width.saturating_sub(width)),
        bar.y + 1,
        width.min(screen.width),
        height.min(screen.height.saturating_sub(bar.y + 1)),
    );
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let label = format!(" {} ", item_label(*item, content));
            if i == open.selected {
                Line::styled(
                    label,
                    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(label, Style::default().fg(Color::White))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 渲染帮助 / 关于弹窗
fn render_popup(popup: &Popup, content: &WindowContent, frame: &mut Frame) {
    let (title, body) = match popup {
        Popup::Help(text) => (content.menu.help.as_str(), text.as_str()),
        Popup::About => (content.menu.about.as_str(), content.about_text.as_str()),
    };

    let mut lines: Vec<Line> = body
        .lines()
        .map(|l| Line::styled(l, Style::default().fg(Color::White)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        content.dismiss_hint.as_str(),
        Style::default().fg(Color::DarkGray),
    ));

    let width = body
        .lines()
        .chain(std::iter::once(content.dismiss_hint.as_str()))
        .map(text_width)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);

    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算居中区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ipaddresses_core::MenuLabels;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn content() -> WindowContent {
        WindowContent {
            title: "IP addresses".into(),
            menu: MenuLabels {
                file: "File".into(),
                exit: "Exit".into(),
                help: "Help".into(),
                about: "About".into(),
            },
            private_line: "Private IP: 192.168.1.10".into(),
            public_line: "Public IP: 203.0.113.7".into(),
            about_text: "ipaddresses version 0.1.0".into(),
            dismiss_hint: "Press any key".into(),
        }
    }

    fn draw(state: &WindowState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        let content = content();
        terminal.draw(|frame| render(state, &content, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn shows_both_lines_and_menu_bar() {
        let screen = draw(&WindowState::default());
        assert!(screen.contains("Private IP: 192.168.1.10"));
        assert!(screen.contains("Public IP: 203.0.113.7"));
        assert!(screen.contains("IP addresses"));
        assert!(screen.contains("File"));
        assert!(screen.contains("Help"));
    }

    #[test]
    fn dropdown_lists_items() {
        let state = WindowState {
            menu: Some(OpenMenu::new(Menu::Help)),
            ..WindowState::default()
        };
        let screen = draw(&state);
        assert!(screen.contains("About"));
    }

    #[test]
    fn help_popup_shows_text_and_hint() {
        let state = WindowState {
            popup: Some(Popup::Help("Usage: ipaddresses".into())),
            ..WindowState::default()
        };
        let screen = draw(&state);
        assert!(screen.contains("Usage: ipaddresses"));
        assert!(screen.contains("Press any key"));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(centered_rect(20, 3, area), Rect::new(0, 1, 10, 3));
        assert_eq!(centered_rect(4, 1, area), Rect::new(3, 2, 4, 1));
    }
}
