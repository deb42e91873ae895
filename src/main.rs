mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod environment;
mod logging;
mod model;
mod render;
mod session;
mod ui;

use crate::config::{API_URL_ENV_VAR, Config, get_config_path, resolve_environment};
use crate::dashboard::{FilterControls, PanelKind};
use crate::environment::{Environment, InvalidEnvironment};
use crate::session::{OutputFormat, Report, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for the billionaires dataset service
struct Args {
    /// API root of the service, e.g. http://localhost:5000/api
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Output format of one-shot reports
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    M,
    F,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelfMadeArg {
    Yes,
    No,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Disable background colors
        #[arg(long, default_value = "false")]
        no_background: bool,
    },
    /// Print summary statistics
    Stats,
    /// Print the billionaires list, optionally filtered
    List {
        /// Country of citizenship
        #[arg(long)]
        country: Option<String>,

        #[arg(long, value_enum, ignore_case = true)]
        gender: Option<GenderArg>,

        #[arg(long, value_enum)]
        self_made: Option<SelfMadeArg>,

        /// Minimum worth, in millions
        #[arg(long, value_name = "MILLIONS")]
        min_worth: Option<f64>,

        /// Maximum worth, in millions
        #[arg(long, value_name = "MILLIONS")]
        max_worth: Option<f64>,

        /// Maximum number of records returned
        #[arg(long)]
        limit: Option<u32>,

        /// Records to skip before the first one returned
        #[arg(long, requires = "limit")]
        offset: Option<u32>,
    },
    /// Print per-country aggregates
    Countries,
    /// Print per-industry aggregates
    Industries,
    /// Print per-city aggregates
    Cities,
    /// Print the age distribution
    AgeGroups,
    /// Print per-company aggregates
    Companies,
    /// Search billionaires by name
    Search {
        /// Name or part of a name
        query: String,
    },
    /// Print everything known about one billionaire
    Show {
        /// Rank of the billionaire
        rank: u32,
    },
    /// Manage the stored API URL
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the API URL in effect and where it came from
    Show,
    /// Store an API URL in the config file
    SetApiUrl {
        /// `local` or an http(s) URL
        url: String,
    },
    /// Delete the config file
    Reset,
}

impl Command {
    fn into_report(self) -> Option<Report> {
        let report = match self {
            Command::Stats => Report::Panel(PanelKind::Statistics),
            Command::Countries => Report::Panel(PanelKind::Countries),
            Command::Industries => Report::Panel(PanelKind::Industries),
            Command::Cities => Report::Panel(PanelKind::Cities),
            Command::AgeGroups => Report::Panel(PanelKind::AgeGroups),
            Command::Companies => Report::Panel(PanelKind::Companies),
            Command::List {
                country,
                gender,
                self_made,
                min_worth,
                max_worth,
                limit,
                offset,
            } => Report::Billionaires(FilterControls {
                country: country.unwrap_or_default(),
                gender: match gender {
                    Some(GenderArg::M) => "M".to_string(),
                    Some(GenderArg::F) => "F".to_string(),
                    None => String::new(),
                },
                self_made: match self_made {
                    Some(SelfMadeArg::Yes) => "1".to_string(),
                    Some(SelfMadeArg::No) => "0".to_string(),
                    None => String::new(),
                },
                min_worth: min_worth.map(|v| v.to_string()).unwrap_or_default(),
                max_worth: max_worth.map(|v| v.to_string()).unwrap_or_default(),
                limit: limit.map(|v| v.to_string()).unwrap_or_default(),
                offset: offset.map(|v| v.to_string()).unwrap_or_default(),
            }),
            Command::Search { query } => Report::Search(query),
            Command::Show { rank } => Report::Detail(rank),
            Command::Dashboard { .. } | Command::Config { .. } => return None,
        };
        Some(report)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    let command = match args.command {
        Command::Config { action } => return run_config_command(action, &config_path),
        command => command,
    };

    let config = load_config(&config_path);
    let env_var = std::env::var(API_URL_ENV_VAR).ok();
    let environment = resolve_environment(
        args.api_url.as_deref(),
        env_var.as_deref(),
        config.as_ref(),
    )
    .map_err(|e| e.to_string())?;

    match command {
        Command::Dashboard { no_background } => {
            let session = setup_session(environment)?;
            run_tui_mode(session, !no_background).await
        }
        command => {
            if let Err(e) = logging::init_stderr() {
                print_cmd_warn!("Diagnostics disabled", "{}", e);
            }
            let Some(report) = command.into_report() else {
                return Ok(());
            };
            let session = setup_session(environment)?;
            if !run_headless_mode(session, report, args.format).await? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// A missing config file is normal; an unreadable one is reported and ignored.
fn load_config(path: &Path) -> Option<Config> {
    if !path.exists() {
        return None;
    }
    match Config::load_from_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            print_cmd_warn!("Ignoring config file", "{}: {}", path.display(), e);
            None
        }
    }
}

fn run_config_command(action: ConfigCommand, config_path: &Path) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigCommand::Show => {
            let config = load_config(config_path);
            let env_var = std::env::var(API_URL_ENV_VAR).ok();
            let source = if env_var.as_deref().is_some_and(|v| !v.trim().is_empty()) {
                API_URL_ENV_VAR.to_string()
            } else if config.as_ref().is_some_and(|c| c.api_url.is_some()) {
                config_path.display().to_string()
            } else {
                "default".to_string()
            };
            let environment = resolve_environment(None, env_var.as_deref(), config.as_ref())
                .map_err(|e| e.to_string())?;
            println!("{}", environment.api_url());
            print_cmd_info!("API URL source", "{}", source);
            Ok(())
        }
        ConfigCommand::SetApiUrl { url } => {
            let environment: Environment = url.parse().map_err(|e: InvalidEnvironment| {
                print_cmd_error!("Invalid API URL", "{}", url);
                e.to_string()
            })?;
            Config::new(environment.api_url())
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Saved API URL", "{}", environment.api_url());
            Ok(())
        }
        ConfigCommand::Reset => {
            Config::clear(config_path)?;
            print_cmd_success!("Config reset", "{}", config_path.display());
            Ok(())
        }
    }
}
