mod app;
mod config;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::AppConfig;
use datepicker::calendar::DisplayedPage;
use datepicker::render::TextRenderer;
use datepicker::{DateTimePicker, PickerCallbacks, PickerCommand, PickerOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // ── dtp grid YYYY-MM ──────────────────────────────────────────────────────
    if args.get(1).map(|s| s.as_str()) == Some("grid") {
        return cmd_grid(args.get(2).map(|s| s.as_str()));
    }

    // ── dtp (TUI) ─────────────────────────────────────────────────────────────
    run_tui()
}

// ─── Grid command ─────────────────────────────────────────────────────────────

fn cmd_grid(page: Option<&str>) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cfg        = AppConfig::load()?;
    let options    = PickerOptions { show_calendar: true, ..cfg.picker };
    let mut picker = DateTimePicker::new(options, PickerCallbacks::default());

    if let Some(page) = page {
        let page: DisplayedPage = page.parse().context("usage: dtp grid [YYYY-MM]")?;
        picker.dispatch(PickerCommand::YearChosen(page.year));
        picker.dispatch(PickerCommand::MonthChosen(page.month));
    }

    let mut out = TextRenderer::new();
    picker.render(&mut out);
    print!("{}", out.finish());
    Ok(())
}

// ─── TUI ─────────────────────────────────────────────────────────────────────

fn run_tui() -> Result<()> {
    let log_dir = config::data_dir();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "datepicker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting date picker");

    let cfg     = AppConfig::load()?;
    let mut app = App::new(cfg);
    app.run()?;

    if let Some(date) = app.committed() {
        println!("{date}");
    }
    Ok(())
}
