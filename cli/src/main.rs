mod config_cmd;
mod format;
mod grid;
mod panel;
mod summary;
mod tui;
mod year;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use memento_core::{
    build_life_grid, build_summary, calculate_all_stats, local_today, parse_birthdate,
    FileConfigRepository, LifeGridUseCase, StatsParams, StatsService, YearOverviewUseCase,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config_cmd::ConfigAction;

#[derive(Parser)]
#[command(name = "memento")]
#[command(about = "Memento mori: your life in weeks", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/memento-mori/config.json)
    #[arg(long, global = true, env = "MEMENTO_CONFIG")]
    config: Option<PathBuf>,

    /// Use this birthdate (YYYY-MM-DD) instead of the configured one
    #[arg(long, global = true, value_parser = parse_birthdate)]
    birthdate: Option<NaiveDate>,

    /// Print the computed figures as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the life summary (default)
    Summary {
        /// Short plain output for notifications
        #[arg(long)]
        notify: bool,
    },
    /// Show your life as a grid of weeks
    Grid,
    /// Show the current year with weekend planning
    Year,
    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Open the interactive dashboard
    Tui,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("MEMENTO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let repo = FileConfigRepository::new(cli.config)?;
    let service = StatsService::new(repo).with_birthdate(cli.birthdate);
    let today = local_today();
    debug!(%today, "starting");

    let is_default = cli.command.is_none();
    let command = cli.command.unwrap_or(Commands::Summary { notify: false });

    match command {
        Commands::Summary { notify } => {
            let config = service.get_config(today)?;
            let stats = calculate_all_stats(&StatsParams::from(&config), today);
            let view = build_summary(&stats);
            if cli.json {
                print_json(&view)?;
            } else if notify {
                println!("{}", summary::render_notification(&view));
            } else {
                println!();
                println!("{}", summary::render_summary(&view));
                println!();

                if is_default && config.show_grid {
                    let grid = build_life_grid(&stats.life);
                    println!("{}", grid::render_grid(&grid));
                    println!();
                }
            }
        }
        Commands::Grid => {
            let grid = LifeGridUseCase::new(&service).get_grid(today)?;
            if cli.json {
                print_json(&grid)?;
            } else {
                println!();
                println!("{}", grid::render_grid(&grid));
                println!();
            }
        }
        Commands::Year => {
            let overview = YearOverviewUseCase::new(&service).get_overview(today)?;
            if cli.json {
                print_json(&overview)?;
            } else {
                println!();
                println!("{}", year::render_year(&overview));
                println!();
            }
        }
        Commands::Config { action } => {
            config_cmd::run(action, &service, today)?;
        }
        Commands::Tui => {
            tui::run(&service, today)?;
        }
    }

    Ok(())
}
