mod app;
mod checker;
mod config;
mod input;
mod models;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use store::ReminderStore;

#[derive(Parser, Debug)]
#[command(name = "remedy", about = "btop-style terminal medicine reminder", version = "0.1")]
struct Cli {
    /// Due-check interval in seconds (default from config, normally 60)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Color theme: default, dracula, gruvbox, nord
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Path to the reminder store (default: data dir)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Print saved reminders and exit
    #[arg(long)]
    list: bool,

    /// Print a JSON snapshot of the store and exit
    #[arg(long)]
    json: bool,

    /// One-shot due check: exit 0 = nothing due, 1 = reminder(s) due (cron compatible)
    #[arg(long)]
    due: bool,

    /// Run as a headless daemon (no TUI): poll the store, fire desktop notifications
    #[arg(long)]
    daemon: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    let store = ReminderStore::open(cli.store.clone())?;

    if cli.list {
        return run_list(&store);
    }
    if cli.json {
        return run_json_snapshot(&store);
    }
    if cli.due {
        return run_due(&store);
    }
    if cli.config {
        return run_print_config(&config, &store);
    }

    let interval = cli.interval.unwrap_or(config.general.check_interval_secs);

    if cli.daemon {
        return run_daemon(&config, &store, interval);
    }

    let theme_name = cli.theme.as_deref().unwrap_or(&config.general.theme);
    let initial_theme = ui::theme::ThemeVariant::from_name(theme_name);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(config, store, initial_theme, interval);
    restore_terminal()?;
    result
}

fn run_list(store: &ReminderStore) -> Result<()> {
    let outcome = store.load()?;
    if outcome.skipped > 0 {
        eprintln!("warning: skipped {} invalid stored entries", outcome.skipped);
    }
    if outcome.reminders.is_empty() {
        println!("No reminders yet.");
        return Ok(());
    }
    for rem in &outcome.reminders {
        println!("{}  {:<24} {}", rem.time, rem.medicine, rem.schedule_label());
    }
    Ok(())
}

fn run_json_snapshot(store: &ReminderStore) -> Result<()> {
    use serde_json::json;

    let outcome = store.load()?;
    let snapshot = json!({
        "remedy_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "store": store.path(),
        "reminders": outcome.reminders,
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_due(store: &ReminderStore) -> Result<()> {
    let outcome = store.load()?;
    let now = chrono::Local::now();
    let (hhmm, _) = checker::minute_of(&now);
    let due = checker::due_at(&outcome.reminders, &hhmm);

    if due.is_empty() {
        println!("OK — {} reminder(s), nothing due at {}", outcome.reminders.len(), hhmm);
        return Ok(());
    }
    for rem in &due {
        println!("DUE [{}] {}", rem.time, rem.medicine);
    }
    std::process::exit(1);
}

fn run_print_config(config: &Config, store: &ReminderStore) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  check_interval_secs = {}", config.general.check_interval_secs);
    println!("  theme               = {}", config.general.theme);
    println!();
    println!("[notifications]");
    println!("  notify_send = {}", config.notifications.notify_send);
    println!();
    println!("Store: {}", store.path().display());
    Ok(())
}

fn run_daemon(config: &Config, store: &ReminderStore, interval_secs: u64) -> Result<()> {
    eprintln!(
        "remedy daemon starting (interval {}s, store {})…",
        interval_secs,
        store.path().display()
    );

    let mut fired = checker::FiredLog::new();
    // Sample well inside every minute so a matching minute is never skipped.
    let tick = std::time::Duration::from_secs(interval_secs.clamp(1, 30));

    loop {
        // Reload each tick so edits made by the TUI (or by hand) are observed.
        let reminders = match store.load() {
            Ok(outcome) => outcome.reminders,
            Err(e) => {
                eprintln!("remedy: {:#}", e);
                Vec::new()
            }
        };

        let now = chrono::Local::now();
        let (hhmm, stamp) = checker::minute_of(&now);
        let notices = checker::check(&reminders, &mut fired, &hhmm, &stamp);
        if !notices.is_empty() {
            if config.notifications.notify_send {
                util::notify::notify_send(&notices);
            }
            for notice in &notices {
                eprintln!("{} {}", now.format("%H:%M:%S"), notice.message());
            }
        }
        std::thread::sleep(tick);
    }
}

fn run(
    config: Config,
    store: ReminderStore,
    initial_theme: ui::theme::ThemeVariant,
    interval_secs: u64,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let mut app = App::new(config, store, initial_theme, interval_secs);
    app.run(&mut term)?;

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
