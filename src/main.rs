mod app;
mod calculator;
mod config;
mod input;
mod logging;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::App;
use clap::{CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::raid::{CapacityUnit, RaidConfiguration, RaidLevel};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use tracing::info;
use util::user_state::UserState;

#[derive(Parser, Debug)]
#[command(name = "raidcalc", about = "RAID capacity and fault-tolerance calculator", version)]
struct Cli {
    /// RAID level: raid0, raid1, raid5, raid6, raid10, jbod
    #[arg(short, long)]
    level: Option<RaidLevel>,

    /// Number of drives in the array
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    drives: Option<i64>,

    /// Capacity of one drive, in --unit
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<f64>,

    /// Capacity unit label: gb or tb
    #[arg(short, long)]
    unit: Option<CapacityUnit>,

    /// Color theme: default, dracula, gruvbox, nord (overrides config)
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Print a human-readable result and exit
    #[arg(long)]
    report: bool,

    /// Print configuration and result as JSON and exit
    #[arg(long)]
    json: bool,

    /// Print every RAID level for the same drives and exit
    #[arg(long)]
    compare: bool,

    /// Print the information sheet for the level and exit
    #[arg(long)]
    info: bool,

    /// Validate only: exit 0 if the configuration is legal, 1 otherwise
    #[arg(long)]
    check: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        !(self.report || self.json || self.compare || self.info || self.check || self.config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "raidcalc", &mut io::stdout());
        return Ok(());
    }

    let (cfg, outcome) = config::Config::load();
    let sink = if cli.is_interactive() { logging::Sink::FileOnly } else { logging::Sink::Stderr };
    logging::init(&cfg.logging, sink);
    outcome.log();

    let raid = resolve_configuration(&cli, &cfg);

    if cli.config {
        return run_print_config(&cfg);
    }
    if cli.json {
        return run_json(&raid);
    }
    if cli.report {
        return run_report(&raid);
    }
    if cli.compare {
        print!("{}", util::report::compare(&raid));
        return Ok(());
    }
    if cli.info {
        print!("{}", util::report::info_sheet(&models::info::info_for(raid.level)));
        return Ok(());
    }
    if cli.check {
        run_check(&raid);
    }

    let theme_name = cli.theme.as_deref().unwrap_or(&cfg.general.theme);
    let initial_theme = ui::theme::ThemeVariant::from_name(theme_name);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(cfg, raid, initial_theme);
    restore_terminal()?;
    result
}

/// Saved inputs (or the built-in defaults), overridden by explicit flags.
fn resolve_configuration(cli: &Cli, cfg: &config::Config) -> RaidConfiguration {
    let saved = if cfg.general.remember_last { UserState::load() } else { UserState::default() };
    let base = saved.to_config();
    RaidConfiguration {
        level:       cli.level.unwrap_or(base.level),
        drive_count: cli.drives.unwrap_or(base.drive_count),
        drive_size:  cli.size.unwrap_or(base.drive_size),
        unit:        cli.unit.unwrap_or(base.unit),
    }
}

fn run_report(raid: &RaidConfiguration) -> Result<()> {
    let result = calculator::calculate(raid);
    print!("{}", util::report::generate(raid, &result));
    Ok(())
}

fn run_json(raid: &RaidConfiguration) -> Result<()> {
    let result = calculator::calculate(raid);
    let snapshot = util::report::json_snapshot(raid, &result);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_check(raid: &RaidConfiguration) -> ! {
    match calculator::validate(raid) {
        None => {
            println!("OK — {} with {} drive(s)", raid.level.name(), raid.drive_count);
            std::process::exit(0);
        }
        Some(msg) => {
            println!("INVALID — {}", msg);
            std::process::exit(1);
        }
    }
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let state = UserState::path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let logs = logging::log_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());

    println!("Config: {}", path);
    println!("State:  {}", state);
    println!("Logs:   {}", logs);
    println!();
    println!("[general]");
    println!("  theme         = {}", cfg.general.theme);
    println!("  max_drives    = {}", cfg.general.max_drives);
    println!("  remember_last = {}", cfg.general.remember_last);
    println!();
    println!("[logging]");
    println!("  level   = {}", cfg.logging.level.as_directive());
    println!("  to_file = {}", cfg.logging.to_file);
    Ok(())
}

fn run(cfg: config::Config, raid: RaidConfiguration, initial_theme: ui::theme::ThemeVariant) -> Result<()> {
    let state_path = if cfg.general.remember_last { UserState::path() } else { None };
    info!(level = raid.level.key(), drives = raid.drive_count, "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let mut app = App::new(cfg, raid, initial_theme, state_path);
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
