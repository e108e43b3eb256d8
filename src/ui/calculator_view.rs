use crate::app::{App, Field};
use crate::calculator::min_drives;
use crate::models::raid::{CapacityUnit, RaidLevel, RaidResult};
use crate::ui::footer::render_footer;
use crate::ui::theme::Theme;
use crate::util::human::{fmt_capacity, rating_label, star_counts, STAR_OFF, STAR_ON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Full-screen form: header | level selector | drives | results | footer.
/// Wide terminals put drives and results side by side.
pub fn render(f: &mut Frame, app: &App) {
    let area  = f.area();
    let theme = &app.theme;

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, root[0], app);
    render_level_selector(f, root[1], app);

    if root[2].width > 100 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(root[2]);
        render_drive_config(f, cols[0], app);
        render_outcome(f, cols[1], app);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(root[2]);
        render_drive_config(f, rows[0], app);
        render_outcome(f, rows[1], app);
    }

    render_footer(f, root[3], app.focus, theme);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let left  = " ▤ RAID Calculator ";
    let right = format!(" {} ", app.theme_variant.name());
    let pad = (area.width as usize).saturating_sub(left.chars().count() + right.len());
    let line = Line::from(vec![
        Span::styled(left, app.theme.title),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, app.theme.text_dim),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_level_selector(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];
    for level in RaidLevel::ALL {
        let style = if level == app.level { theme.selected } else { theme.text_dim };
        spans.push(Span::styled(format!(" {} ", level.label()), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" RAID Level  ←/→  i: info ", theme.title));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_drive_config(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = |field: Field| if app.focus == field { theme.accent } else { theme.text_dim };
    let marker  = |field: Field| if app.focus == field { "▶ " } else { "  " };

    let max = app.config.max_drives();
    let minus = if app.drive_count > 1   { theme.accent } else { theme.text_dim };
    let plus  = if app.drive_count < max { theme.accent } else { theme.text_dim };

    let size_text = if app.size_input.is_empty() { " ".to_string() } else { app.size_input.clone() };
    let cursor = if app.focus == Field::DriveSize { "▏" } else { "" };

    let min = min_drives(app.level);
    let hint = match app.level {
        RaidLevel::Raid10 => format!("  {} needs an even number of drives ({} or more)", app.level.name(), min),
        _ => format!("  {} needs at least {} drive{}", app.level.name(), min, if min == 1 { "" } else { "s" }),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker(Field::DriveCount), focused(Field::DriveCount)),
            Span::styled(format!("{:<18}", "Number of drives"), theme.text),
            Span::styled("[-] ", minus),
            Span::styled(format!("{:>3}", app.drive_count), theme.title),
            Span::styled(" [+]", plus),
        ]),
        Line::from(vec![
            Span::styled(marker(Field::DriveSize), focused(Field::DriveSize)),
            Span::styled(format!("{:<18}", "Drive size"), theme.text),
            Span::styled(size_text, theme.input),
            Span::styled(cursor, theme.accent),
            Span::raw(" "),
            unit_span(app, CapacityUnit::Gb),
            Span::raw(" "),
            unit_span(app, CapacityUnit::Tb),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, theme.text_dim)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(" Drive Configuration ", theme.title));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn unit_span(app: &App, unit: CapacityUnit) -> Span<'static> {
    let style = if app.unit == unit { app.theme.selected } else { app.theme.text_dim };
    Span::styled(format!(" {} ", unit.label()), style)
}

/// Warning card when the configuration is invalid, results otherwise.
fn render_outcome(f: &mut Frame, area: Rect, app: &App) {
    match &app.result.warning_message {
        Some(msg) => render_warning(f, area, msg, &app.theme),
        None      => render_results(f, area, app, &app.result),
    }
}

fn render_warning(f: &mut Frame, area: Rect, msg: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.warn)
        .title(Span::styled(" Invalid Configuration ", theme.warn));
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ⚠  ", theme.warn),
            Span::styled(msg.to_string(), theme.text),
        ]),
    ];
    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: false }), area);
}

fn render_results(f: &mut Frame, area: Rect, app: &App, result: &RaidResult) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        row("Usable capacity", fmt_capacity(result.usable_capacity, app.unit), theme.title, theme),
        row("Failures tolerated", result.failures_tolerated.clone(), theme.text, theme),
        Line::from(""),
        rating_row("Speed", result.speed_rating, theme),
        rating_row("Availability", result.availability_rating, theme),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" Results ", theme.title));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn row(label: &str, value: String, style: ratatui::style::Style, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<20}", label), theme.text_dim),
        Span::styled(value, style),
    ])
}

pub fn rating_row(label: &str, rating: u8, theme: &Theme) -> Line<'static> {
    let (on, off) = star_counts(rating);
    Line::from(vec![
        Span::styled(format!("  {:<20}", label), theme.text_dim),
        Span::styled(STAR_ON.repeat(on), theme.star_on),
        Span::styled(STAR_OFF.repeat(off), theme.star_off),
        Span::styled(format!("  {}", rating_label(rating)), theme.rating_style(rating)),
    ])
}
