use crate::models::info::info_for;
use crate::models::raid::RaidLevel;
use crate::ui::calculator_view::rating_row;
use crate::ui::centered_rect;
use crate::ui::theme::Theme;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, level: RaidLevel, scroll: u16, theme: &Theme) {
    let area = centered_rect(72, 30, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(format!(" {}  (i or Esc to close, ↑↓ scroll) ", level.name()), theme.title));

    f.render_widget(
        Paragraph::new(lines(level, theme)).block(block).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        area,
    );
}

/// Furthest scroll offset that still leaves the last line on screen.
pub fn max_scroll(level: RaidLevel) -> u16 {
    let count = lines(level, &Theme::default()).len();
    u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX)
}

fn lines(level: RaidLevel, theme: &Theme) -> Vec<Line<'static>> {
    let info = info_for(level);

    let mut lines = vec![
        hdr("Overview", theme),
        Line::from(Span::styled(info.description.to_string(), theme.text)),
        Line::from(""),
        hdr("Pros", theme),
    ];
    lines.extend(info.pros.iter().map(|p| bullet("✓", p, theme.ok, theme)));
    lines.push(Line::from(""));
    lines.push(hdr("Cons", theme));
    lines.extend(info.cons.iter().map(|c| bullet("✗", c, theme.crit, theme)));
    lines.push(Line::from(""));
    lines.push(hdr("Typical Use Cases", theme));
    lines.extend(info.use_cases.iter().map(|u| bullet("›", u, theme.accent, theme)));
    lines.push(Line::from(""));
    lines.push(hdr("Performance Ratings", theme));
    lines.push(rating_row("Speed", info.speed_rating, theme));
    lines.push(rating_row("Availability", info.availability_rating, theme));
    lines
}

fn hdr(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), theme.title))
}

fn bullet(mark: &'static str, text: &str, mark_style: ratatui::style::Style, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {} ", mark), mark_style),
        Span::styled(text.to_string(), theme.text_dim),
    ])
}
