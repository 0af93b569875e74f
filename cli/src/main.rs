use clap::Parser;
use colored::*;
use dotenv::dotenv;
use log::LevelFilter;
use std::error::Error;

mod app;
mod cli;
mod controllers;
mod output;

use crate::cli::{Args, Command};
use luxai_core::{get_default_config_file, LuxClient, LuxConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables before argument parsing so LUXAI_API_URL
    // from a .env file is visible to clap.
    dotenv().ok();

    let args = Args::parse();

    // Load configuration, then let the command line override it
    let mut config = match get_default_config_file() {
        Ok(path) => LuxConfig::load_from_file(&path).unwrap_or_default(),
        Err(_) => LuxConfig::default(),
    };
    if let Some(url) = args.api_url.clone() {
        config.api_base_url = Some(url);
    }

    // Get log level from flags or config
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        config
            .log_level
            .as_deref()
            .map(|level| match level.to_lowercase().as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                _ => LevelFilter::Warn,
            })
            .unwrap_or(LevelFilter::Warn)
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.to_string()),
    )
    .init();

    let client = match LuxClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Error initializing API client: {}", e).red());
            return Err(e.into());
        }
    };

    let result = match args.command {
        Some(Command::Summarize { text, file, language }) => {
            app::run_summarize(&client, text, file, language).await
        }
        Some(Command::Translate { text, file, to }) => {
            app::run_translate(&client, text, file, to).await
        }
        Some(Command::MeetingNotes { file, transcript }) => {
            app::run_meeting_notes(&client, file, transcript).await
        }
        Some(Command::Stats) => app::run_stats(&client).await,
        Some(Command::Health) => app::run_health(&client).await,
        None => app::run_interactive(&client).await,
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }

    Ok(())
}
