//! Health Jobs Portal - NHS and Social Care job guidance for refugees
//!
//! Starts the terminal wizard when run without arguments; `--show` and
//! `--list` print screen content instead, `--init-config` writes a config file.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use health_jobs_portal::tui::{write_screen, write_step_list};
use health_jobs_portal::{Cli, Config, LoggedSink, TuiApp, init_locale};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::MakeWriterExt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en");

// CLI Output Module
mod cli_output {
    //! Colours and framing for command-line output

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;
    use unicode_width::UnicodeWidthStr;

    const WIDTH: usize = 60;

    /// CLI theme colours
    pub struct CliTheme;

    impl CliTheme {
        pub const ERROR: Color = Color::Red;
        pub const HINT: Color = Color::DarkGrey;
        pub const ACCENT: Color = Color::Cyan;
    }

    /// Print a separator line
    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(WIDTH))));
    }

    /// Print a centred title
    pub fn print_title(title: &str) {
        let padding = WIDTH.saturating_sub(title.width() + 4) / 2;
        let _ = stdout().execute(Print(" ".repeat(padding)));
        let _ = stdout().execute(Print("╔ ".with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(title.bold()));
        let _ = stdout().execute(Print(" ╗\n".with(CliTheme::ACCENT)));
    }

    /// Print a dimmed hint line
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(format!("{}\n", style(msg).with(CliTheme::HINT))));
    }

    /// Print an error message
    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// Print a labelled file location
    pub fn print_path(label: &str, path: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(style(label).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!(" {}\n", path)));
    }
}

/// Convenience macro for translation
macro_rules! t {
    ($key:expr) => {
        rust_i18n::t!($key)
    };
    ($key:expr, $($tt:tt)*) => {
        rust_i18n::t!($key, $($tt)*)
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let exe_dir = get_executable_dir()?;
    let (config, config_path) = load_config(&cli, &exe_dir)?;

    if let Some(ref path) = cli.init_config {
        init_locale(config.locale.as_deref());
        config.save_to_file(path)?;
        cli_output::print_path(&t!("config_written"), &path.display().to_string());
        return Ok(());
    }

    if cli.is_interactive() {
        return run_interactive_mode(&config, config_path.as_deref(), &exe_dir);
    }

    run_cli_mode(&cli, &config, config_path.as_deref(), &exe_dir)
}

/// Run the terminal wizard
fn run_interactive_mode(config: &Config, config_path: Option<&Path>, exe_dir: &Path) -> Result<()> {
    let log_dir = config.log_dir_or(exe_dir);
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("Interactive_{}.log", timestamp));

    // The terminal belongs to the UI, so logs only go to the file
    let _guard = setup_file_only_logging(config, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Health Jobs Portal starting in interactive mode"
    );
    log_config_source(config_path);

    let language = init_locale(config.locale.as_deref());
    info!(locale = language.locale(), "UI locale");

    let mut app = TuiApp::new(config, LoggedSink::new())?;
    app.set_log_path(log_path.clone());

    match app.run() {
        Ok(last_step) => {
            info!(%last_step, log_file = %log_path.display(), "Interactive session complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Terminal UI failed");
            Err(e.into())
        }
    }
}

/// Print screen content and exit
fn run_cli_mode(
    cli: &Cli,
    config: &Config,
    config_path: Option<&Path>,
    exe_dir: &Path,
) -> Result<()> {
    let log_dir = config.log_dir_or(exe_dir);
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("CLIRun_{}.log", timestamp));

    let _guard = setup_logging(config, &log_path)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Health Jobs Portal starting");
    log_config_source(config_path);
    if config.verbose {
        info!(?config, "Configuration loaded");
    }

    init_locale(config.locale.as_deref());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        cli_output::print_title(&t!("app_title"));
        cli_output::print_hint(&t!("app_tagline"));
        cli_output::print_separator();
    }

    let result = match cli.show {
        Some(step) => {
            info!(%step, json = cli.json, "Showing screen");
            write_screen(&mut out, step, config.show_links, cli.json)
        }
        None => write_step_list(&mut out, cli.json),
    };

    if let Err(e) = result {
        error!(error = %e, "Output failed");
        cli_output::print_error(&e.to_string());
        return Err(e.into());
    }

    if !cli.json {
        out.flush()?;
        drop(out);
        cli_output::print_separator();
        cli_output::print_path(&t!("log_saved_to"), &log_path.display().to_string());
    }

    info!(log_file = %log_path.display(), "Done");
    Ok(())
}

fn log_config_source(config_path: Option<&Path>) {
    match config_path {
        Some(path) => info!(config_file = %path.display(), "Configuration loaded from file"),
        None => info!("No configuration file, using defaults and CLI arguments"),
    }
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Resolve config path - supports shorthand syntax
///
/// Tries the path as given, then with `.toml` appended, then the file name
/// under `<exe dir>/Config/`.
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let config_dir = exe_dir.join("Config");
    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());

    let mut in_config_dir = config_dir.join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file or CLI arguments. Logging is not set up yet,
/// so the resolved path is returned for the caller to log.
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let Some(ref config_path) = cli.config else {
        return Ok((cli.to_config(), None));
    };

    let resolved_path = resolve_config_path(exe_dir, config_path);
    if !resolved_path.exists() {
        anyhow::bail!("Config file not found: {}", config_path.display());
    }
    let file_config = Config::load_from_file(&resolved_path)?;
    Ok((cli.merge_with_config(file_config), Some(resolved_path)))
}

fn env_filter(config: &Config) -> EnvFilter {
    let level = if config.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;
    Ok(file)
}

/// Setup logging for CLI mode (file + stderr)
///
/// stderr only carries warnings unless `verbose` is set, so stdout output
/// stays readable.
fn setup_logging(config: &Config, log_path: &Path) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);
    let stderr_level = if config.verbose {
        Level::TRACE
    } else {
        Level::WARN
    };
    let stderr = std::io::stderr.with_max_level(stderr_level);

    let subscriber = tracing_subscriber::registry().with(env_filter(config));

    if config.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(stderr))
            .init();
    }

    Ok(guard)
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(config: &Config, log_path: &Path) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);

    let subscriber = tracing_subscriber::registry().with(env_filter(config));

    if config.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(guard)
}
