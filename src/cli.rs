//! CLI argument parsing with clap

use crate::config::Config;
use crate::wizard::Step;
use clap::Parser;
use std::path::PathBuf;

/// Health Jobs Portal - find a job in the NHS and Social Care
///
/// Without arguments, starts the interactive terminal wizard. With `--show`
/// or `--list`, prints screen content and exits.
#[derive(Parser, Debug, Default)]
#[command(name = "health-jobs-portal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long, env = "HEALTH_JOBS_PORTAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the content of one screen and exit
    #[arg(short, long, value_enum, value_name = "STEP")]
    pub show: Option<Step>,

    /// Print every screen name with its title and exit
    #[arg(short, long, conflicts_with = "show")]
    pub list: bool,

    /// Write the effective configuration (file plus CLI flags) to FILE and exit
    #[arg(long, value_name = "FILE", conflicts_with_all = ["show", "list"])]
    pub init_config: Option<PathBuf>,

    /// Print `--show`/`--list` output as JSON
    #[arg(long)]
    pub json: bool,

    /// UI language (e.g. en, zh-CN)
    #[arg(short = 'L', long)]
    pub locale: Option<String>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Hide outbound resource links
    #[arg(long)]
    pub no_links: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Whether to start the terminal wizard
    pub fn is_interactive(&self) -> bool {
        self.show.is_none() && !self.list && self.init_config.is_none()
    }

    /// Merge CLI arguments with config from file.
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref locale) = self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(ref log_dir) = self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if self.no_links {
            config.show_links = false;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.json_log {
            config.json_log = true;
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }
}
