use crate::ui::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(74, 22, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" raidcalc — Keybindings (? or F1 to close) ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        key_line(theme, "Global", ""),
        key_line(theme, "  q / Ctrl-C",  "Quit"),
        key_line(theme, "  Esc",         "Close overlay"),
        key_line(theme, "  t",           "Cycle color theme"),
        key_line(theme, "  i",           "RAID level info sheet"),
        key_line(theme, "  ? / F1",      "Toggle this help"),
        Line::from(""),
        key_line(theme, "RAID level", ""),
        key_line(theme, "  ← → / h l",   "Previous / next level"),
        key_line(theme, "  1 – 6",       "Jump to level (count focus)"),
        Line::from(""),
        key_line(theme, "Drives", ""),
        key_line(theme, "  Tab",         "Switch count / size field"),
        key_line(theme, "  ↑↓ / k j / + -", "Step focused field"),
        key_line(theme, "  0–9 .  ⌫",    "Edit drive size"),
        key_line(theme, "  u",           "Toggle GB / TB"),
    ];

    let right = vec![
        key_line(theme, "CLI modes", ""),
        key_line(theme, "  --report",        "Text result and exit"),
        key_line(theme, "  --json",          "JSON result and exit"),
        key_line(theme, "  --compare",       "All levels side by side"),
        key_line(theme, "  --info",          "Level info sheet"),
        key_line(theme, "  --check",         "Exit 1 if invalid"),
        key_line(theme, "  --config",        "Print config values"),
        key_line(theme, "  --completions",   "Shell completion script"),
        Line::from(""),
        key_line(theme, "  -l -n -s -u",     "Level, drives, size, unit"),
        Line::from(""),
        key_line(theme, "Files", ""),
        key_line(theme, "  ~/.config/raidcalc/raidcalc.toml", ""),
        key_line(theme, "  ~/.local/share/raidcalc/state.json", ""),
    ];

    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(Paragraph::new(right), cols[1]);
}

fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
    if desc.is_empty() {
        Line::from(vec![
            Span::styled(key, theme.title),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("{:<18}", key), theme.footer_key),
            Span::styled(desc, theme.text_dim),
        ])
    }
}
