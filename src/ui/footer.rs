use crate::app::Field;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_footer(f: &mut Frame, area: Rect, focus: Field, theme: &Theme) {
    let keys: &[(&str, &str)] = match focus {
        Field::DriveCount => &[
            ("q", "Quit"), ("←→", "Level"), ("↑↓", "Drives"), ("Tab", "Size"),
            ("u", "Unit"), ("i", "Info"), ("t", "Theme"), ("?", "Help"),
        ],
        Field::DriveSize => &[
            ("q", "Quit"), ("←→", "Level"), ("0-9.", "Type size"), ("↑↓", "Step"),
            ("Tab", "Drives"), ("u", "Unit"), ("i", "Info"), ("?", "Help"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];
    for (key, desc) in keys {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    let para = Paragraph::new(Line::from(spans)).style(theme.footer_bg);
    f.render_widget(para, area);
}
