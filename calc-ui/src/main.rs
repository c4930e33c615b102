use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error};

use calc_ui::components::WindowPreferences;
use calc_ui::config::Settings;
use calc_ui::{app, logging, open_calculator_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop calculator with surcharge, round-off and fortune keys.
///
/// Without `--press` a calculator window is opened. With `--press` the given
/// keys are pressed in order and the display is printed after each one.
#[derive(Debug, Parser)]
#[command(name = "Calculator", version, about)]
struct Cli {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the fortune key (overrides the settings file).
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter directive, e.g. `debug` or `info,calc_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keys to press headlessly: labels (`7`, `+`, `=`, `C`), key names
    /// (`add`, `point`) or tags (`tax`, `round`, `fortune`).
    #[arg(long, num_args = 1.., allow_hyphen_values = true)]
    press: Vec<String>,
}

impl Cli {
    fn apply_overrides(
        &self,
        settings: &mut Settings,
    ) {
        if let Some(seed) = self.seed {
            settings.fortune_seed = Some(seed);
        }
        if let Some(level) = &self.log_level {
            settings.log.level = Some(level.clone());
        }
        if let Some(file) = &self.log_file {
            settings.log.file = Some(file.clone());
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        None => Settings::default(),
    };
    cli.apply_overrides(&mut settings);

    logging::init_logging(settings.log.level.as_deref())?;
    if let Some(file) = &settings.log.file {
        logging::enable_file_logging(file)?;
    }
    debug!(?settings, "settings resolved");

    let mut calculator = app::build_calculator(&settings).context("Invalid calculator settings")?;

    if !cli.press.is_empty() {
        for line in app::run_presses(&mut calculator, &cli.press) {
            println!("{line}");
        }
        return Ok(());
    }

    let prefs = WindowPreferences::from(&settings.window);
    Application::new().run(move |cx: &mut App| {
        setup_app(cx);
        if let Err(error) = open_calculator_window(cx, calculator, prefs) {
            error!(?error, "failed to open calculator window");
            cx.quit();
        }
    });

    Ok(())
}
