use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;

use bluelife_lib::commands::{self, SiteState};
use bluelife_lib::models::LoadState;

#[derive(Parser)]
#[command(name = "bluelife", version, about = "Load BlueLife site content as view models")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Blog cards with resolved cover images
    Blogs,
    /// Gallery cards with every image URL
    Galleries,
    /// Event detail page; the latest active event when no id is given
    Event {
        #[arg(long)]
        id: Option<String>,
    },
    /// Static FAQ entries
    Faq,
    /// Show or change the stored configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the REST backend base URL
    SetApiBase { url: String },
    /// Set how many enrichment requests may run at once
    SetFanOut { fan_out: usize },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Print the view; a view in the error state also fails the process.
fn finish<T: Serialize>(view: &T, state: LoadState, error: Option<&str>) -> Result<(), String> {
    print_json(view)?;
    match state {
        LoadState::Error => Err(error.unwrap_or("Load failed").to_string()),
        _ => Ok(()),
    }
}

fn site() -> Result<SiteState, String> {
    SiteState::from_config()
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Blogs => {
            let state = site()?;
            let view = commands::list_blogs(&state).await;
            finish(&view, view.state, view.error.as_deref())
        }
        Command::Galleries => {
            let state = site()?;
            let view = commands::list_galleries(&state).await;
            finish(&view, view.state, view.error.as_deref())
        }
        Command::Event { id } => {
            let state = site()?;
            let view = commands::get_event_detail(&state, id).await;
            finish(&view, view.state, view.error.as_deref())
        }
        Command::Faq => print_json(&commands::get_faq()),
        Command::Config { action } => {
            match action {
                Some(ConfigAction::SetApiBase { url }) => commands::set_api_base(url)?,
                Some(ConfigAction::SetFanOut { fan_out }) => commands::set_fan_out(fan_out)?,
                None => {}
            }
            print_json(&commands::get_config()?)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    bluelife_lib::init_logging();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
