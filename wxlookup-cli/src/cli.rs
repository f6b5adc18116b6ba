use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use tokio::io::{AsyncBufReadExt, BufReader};
use wxlookup_core::{
    Config, RecentList, SearchController, SearchOutcome, UiEvent, UnitMode, WeatherSource,
    config::API_KEY_ENV,
};

use crate::terminal::{LineInput, TerminalView};

const HELP: &str = "Type a city to search.  :u toggle units  :N search recent N  :rm N remove recent N  :q quit";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxlookup", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key, default city and units.
    Configure,

    /// Show current weather for one city and exit.
    Show {
        /// City name, e.g. "New York".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Override the configured unit system.
        #[arg(long, value_parser = parse_unit)]
        unit: Option<UnitMode>,

        /// Print the raw record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search interactively (the default): loads the default city, then reads commands.
    Interactive {
        /// Override the configured unit system.
        #[arg(long, value_parser = parse_unit)]
        unit: Option<UnitMode>,
    },
}

fn parse_unit(value: &str) -> Result<UnitMode, String> {
    UnitMode::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Some(Command::Show { city, unit, json }) => {
                let config = load_config()?;
                show(&config, &city.join(" "), unit.unwrap_or(config.unit), json).await
            }
            Some(Command::Interactive { unit }) => {
                let config = load_config()?;
                interactive(&config, unit.unwrap_or(config.unit)).await?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let config = load_config()?;
                interactive(&config, config.unit).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    Ok(Config::load()?.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key (leave empty to keep current):")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let default_city = Text::new("City to load on startup:")
        .with_default(&config.default_city)
        .prompt()?;
    if !default_city.trim().is_empty() {
        config.default_city = default_city.trim().to_string();
    }

    let units = UnitMode::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.unit).unwrap_or(0);
    config.unit = Select::new("Units:", units)
        .with_starting_cursor(cursor)
        .prompt()?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(config: &Config, city: &str, unit: UnitMode, json: bool) -> anyhow::Result<ExitCode> {
    let client = config.client()?;

    if json {
        return match client.fetch_current(city, unit).await {
            Ok(record) => {
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                tracing::debug!(error = %err, "lookup failed");
                eprintln!("Error: {}", err.user_message());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let mut controller =
        SearchController::new(client, TerminalView::stdout(), LineInput::default(), unit);
    match controller.search(Some(city)).await {
        SearchOutcome::Found(_) => Ok(ExitCode::SUCCESS),
        SearchOutcome::Failed(_) | SearchOutcome::Skipped => Ok(ExitCode::FAILURE),
    }
}

/// One line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum LineCommand {
    Event(UiEvent),
    Help,
    Quit,
    Invalid(String),
}

fn parse_line(line: &str, recent: &RecentList) -> LineCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return LineCommand::Event(UiEvent::Submit);
    };

    let recent_at = |n: &str| {
        n.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| recent.get(i))
            .map(str::to_string)
    };

    match command.trim() {
        "q" | "quit" => LineCommand::Quit,
        "h" | "help" => LineCommand::Help,
        "u" | "unit" => LineCommand::Event(UiEvent::ToggleUnit),
        rest if rest.starts_with("rm") => match recent_at(&rest[2..]) {
            Some(city) => LineCommand::Event(UiEvent::RemoveRecent(city)),
            None => LineCommand::Invalid(format!("No recent entry '{}'", rest[2..].trim())),
        },
        rest => match recent_at(rest) {
            Some(city) => LineCommand::Event(UiEvent::SelectRecent(city)),
            None => LineCommand::Invalid(format!("Unknown command ':{rest}'. {HELP}")),
        },
    }
}

async fn interactive(config: &Config, unit: UnitMode) -> anyhow::Result<()> {
    let client = config.client()?;
    let mut controller =
        SearchController::new(client, TerminalView::stdout(), LineInput::default(), unit);

    println!("{HELP}");
    controller.start(&config.default_city).await;
    controller.view().prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clock = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = clock.tick() => {
                controller.handle(UiEvent::Tick).await;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                controller.view().leave_prompt();

                match parse_line(&line, controller.recent()) {
                    LineCommand::Quit => break,
                    LineCommand::Help => println!("{HELP}"),
                    LineCommand::Invalid(msg) => println!("{msg}"),
                    LineCommand::Event(event) => {
                        if event == UiEvent::Submit {
                            controller.input_mut().set(&line);
                        }
                        controller.handle(event).await;
                    }
                }
                controller.view().prompt();
            }
        }
    }

    println!();
    Ok(())
}
