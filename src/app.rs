use crate::calculator::calculate;
use crate::config::Config;
use crate::input::{handle_key, Action};
use crate::models::raid::{CapacityUnit, RaidConfiguration, RaidLevel, RaidResult};
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::{calculator_view, help, info_popup};
use crate::util::user_state::UserState;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);
const MAX_SIZE_INPUT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    DriveCount,
    DriveSize,
}

// ── App ───────────────────────────────────────────────────────────────

pub struct App {
    pub config: Config,

    pub theme:         Theme,
    pub theme_variant: ThemeVariant,

    // Form inputs
    pub level:       RaidLevel,
    pub drive_count: i64,
    pub size_input:  String,
    pub unit:        CapacityUnit,
    pub focus:       Field,

    // Last calculation, refreshed on every input change
    pub result: RaidResult,

    // Overlays
    pub show_help:   bool,
    pub show_info:   bool,
    pub info_scroll: u16,

    // Where last-used inputs are saved; None disables persistence
    state_path: Option<PathBuf>,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        initial: RaidConfiguration,
        theme_variant: ThemeVariant,
        state_path: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            config,
            theme: Theme::for_variant(theme_variant),
            theme_variant,
            level:       initial.level,
            drive_count: initial.drive_count,
            size_input:  fmt_size(initial.drive_size),
            unit:        initial.unit,
            focus:       Field::DriveCount,
            result:      calculate(&initial),
            show_help:   false,
            show_info:   false,
            info_scroll: 0,
            state_path,
            should_quit: false,
        };
        app.recalculate();
        app
    }

    /// Current form contents. An empty or unparsable size counts as 0.
    pub fn configuration(&self) -> RaidConfiguration {
        let size = self.size_input.parse::<f64>().unwrap_or(0.0);
        RaidConfiguration::new(self.level, self.drive_count, size, self.unit)
    }

    pub fn recalculate(&mut self) {
        let cfg = self.configuration();
        self.result = calculate(&cfg);
        debug!(
            level = cfg.level.key(),
            drives = cfg.drive_count,
            size = cfg.drive_size,
            usable = self.result.usable_capacity,
            warning = self.result.warning_message.as_deref().unwrap_or(""),
            "recalculated"
        );
        if let Some(path) = &self.state_path {
            UserState::from_config(&cfg).save_to(path);
        }
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| {
                calculator_view::render(f, self);
                if self.show_info {
                    info_popup::render(f, self.level, self.info_scroll, &self.theme);
                }
                if self.show_help {
                    help::render(f, &self.theme);
                }
            })?;

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    // Windows terminals report releases too
                    if key.kind == KeyEventKind::Press {
                        self.handle_action(handle_key(key));
                    }
                }
            }

            if self.should_quit { break; }
        }
        Ok(())
    }

    pub fn handle_action(&mut self, action: Action) {
        // Overlays swallow everything except close / quit / scroll
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ShowHelp | Action::Back => self.show_help = false,
                _ => {}
            }
            return;
        }
        if self.show_info {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ToggleInfo | Action::Back => self.show_info = false,
                Action::Increment => self.info_scroll = self.info_scroll.saturating_sub(1),
                Action::Decrement => {
                    self.info_scroll = self.info_scroll.saturating_add(1).min(info_popup::max_scroll(self.level));
                }
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowHelp => self.show_help = true,
            Action::ToggleInfo => {
                self.show_info = true;
                self.info_scroll = 0;
            }
            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }
            Action::NextLevel => self.set_level(self.level.next()),
            Action::PrevLevel => self.set_level(self.level.prev()),
            Action::ToggleUnit => {
                self.unit = self.unit.toggle();
                self.recalculate();
            }
            Action::FocusNext => {
                self.focus = match self.focus {
                    Field::DriveCount => Field::DriveSize,
                    Field::DriveSize  => Field::DriveCount,
                };
            }
            Action::Increment => self.step(1),
            Action::Decrement => self.step(-1),
            Action::Char(c) => match self.focus {
                Field::DriveCount => {
                    // 1–6 jump straight to a level in selector order
                    if let Some(d) = c.to_digit(10) {
                        if let Some(level) = RaidLevel::ALL.get((d as usize).wrapping_sub(1)) {
                            self.set_level(*level);
                        }
                    }
                }
                Field::DriveSize => self.push_size_char(c),
            },
            Action::Backspace => {
                if self.focus == Field::DriveSize && self.size_input.pop().is_some() {
                    self.recalculate();
                }
            }
            Action::Back | Action::None => {}
        }
    }

    fn set_level(&mut self, level: RaidLevel) {
        if self.level != level {
            self.level = level;
            self.recalculate();
        }
    }

    /// Stepper for the focused field. Drive count stays within
    /// 1..=max_drives; drive size never steps below zero.
    fn step(&mut self, delta: i64) {
        match self.focus {
            Field::DriveCount => {
                let max = self.config.max_drives();
                if (delta > 0 && self.drive_count < max) || (delta < 0 && self.drive_count > 1) {
                    self.drive_count = self.drive_count.saturating_add(delta).clamp(1, max);
                    self.recalculate();
                }
            }
            Field::DriveSize => {
                let cur = self.size_input.parse::<f64>().unwrap_or(0.0);
                let next = (cur + delta as f64).max(0.0);
                if next != cur {
                    self.size_input = fmt_size(next);
                    self.recalculate();
                }
            }
        }
    }

    fn push_size_char(&mut self, c: char) {
        if self.size_input.len() >= MAX_SIZE_INPUT { return; }
        if c == '.' && self.size_input.contains('.') { return; }
        if !(c.is_ascii_digit() || c == '.') { return; }
        self.size_input.push(c);
        self.recalculate();
    }
}

/// Render a drive size for the input field without a trailing ".0".
fn fmt_size(size: f64) -> String {
    if size.fract() == 0.0 && size.abs() < 1e15 {
        format!("{}", size as i64)
    } else {
        format!("{}", size)
    }
}
