//! Atelier CLI - VIP desk from the terminal
//!
//! Thin client over the Atelier API: one API call per subcommand, rendered
//! for a human.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::AtelierClient;
use config::Config;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier CLI - VIP client engagement from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List client profiles
    Clients,

    /// Show one client profile
    Show {
        /// Client ID
        id: u32,
    },

    /// List upcoming events
    Events,

    /// Generate text for a client
    Engage {
        /// Client ID
        id: u32,
        /// Prompt kind: insights, outreach_message, sentiment,
        /// engagement_suggestions, event_recommendation,
        /// conversation_starters, summary, follow_up_plan, content_curation
        kind: String,
        /// Account manager notes (follow_up_plan asks interactively if omitted)
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Estimate relationship sentiment for a client
    Sentiment {
        /// Client ID
        id: u32,
    },

    /// Show the simulated engagement score for a client
    Score {
        /// Client ID
        id: u32,
    },

    /// Show or update CLI configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        set_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clients => cmd_clients().await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Events => cmd_events().await,
        Commands::Engage { id, kind, notes } => cmd_engage(id, kind, notes).await,
        Commands::Sentiment { id } => cmd_sentiment(id).await,
        Commands::Score { id } => cmd_score(id).await,
        Commands::Config { set_url } => cmd_config(set_url),
    }
}

fn client_from_config() -> Result<AtelierClient> {
    let config = Config::load()?;
    Ok(AtelierClient::new(&config.base_url))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_clients() -> Result<()> {
    let client = client_from_config()?;
    let profiles = client.list_clients().await?;

    if profiles.is_empty() {
        println!("No clients found.");
        return Ok(());
    }

    println!("{}", "Clients:".bold());
    for profile in profiles {
        println!(
            "  {} {} {}",
            format!("#{}", profile.id).dimmed(),
            profile.name.cyan().bold(),
            profile.purchase_history.dimmed()
        );
    }

    Ok(())
}

async fn cmd_show(id: u32) -> Result<()> {
    let client = client_from_config()?;
    let profile = client.get_client(id).await?;

    println!("{} {}", "Profile:".bold(), profile.name.cyan().bold());
    println!("  Purchase History:        {}", profile.purchase_history);
    println!("  Interaction History:     {}", profile.interaction_history);
    println!(
        "  Preferred Contact Times: {}",
        profile.preferred_contact_times
    );
    println!("  Last Contact:            {}", profile.last_contact);
    println!("  Sentiment Baseline:      {}", profile.sentiment_baseline);

    Ok(())
}

async fn cmd_events() -> Result<()> {
    let client = client_from_config()?;
    let events = client.list_events().await?;

    if events.is_empty() {
        println!("No upcoming events.");
        return Ok(());
    }

    println!("{}", "Upcoming events:".bold());
    for event in events {
        println!("  {} {}", event.date.dimmed(), event.name.cyan());
    }

    Ok(())
}

async fn cmd_engage(id: u32, kind: String, notes: Option<String>) -> Result<()> {
    let client = client_from_config()?;

    // follow_up_plan is the one kind that wants manager input
    let notes = match (kind.as_str(), notes) {
        ("follow_up_plan", None) => {
            let input: String = Input::new()
                .with_prompt("Account manager notes")
                .allow_empty(true)
                .interact_text()?;
            if input.trim().is_empty() {
                None
            } else {
                Some(input)
            }
        }
        (_, notes) => notes,
    };

    println!("{}", "Generating...".dimmed());
    let result = client.generate(id, &kind, notes.as_deref()).await?;

    println!(
        "{} {}",
        format!("[{}]", result.kind).green().bold(),
        format!("client #{}", result.client_id).dimmed()
    );
    println!("{}", result.content);

    Ok(())
}

async fn cmd_sentiment(id: u32) -> Result<()> {
    let client = client_from_config()?;

    println!("{}", "Analyzing sentiment...".dimmed());
    let reading = client.sentiment(id).await?;

    match reading.score {
        Some(score) => {
            let rendered = if score > 0.0 {
                format!("{:+.2}", score).green()
            } else if score < 0.0 {
                format!("{:+.2}", score).red()
            } else {
                format!("{:.2}", score).yellow()
            };
            println!(
                "Sentiment for client #{}: {} ({})",
                reading.client_id,
                rendered.bold(),
                reading.source.dimmed()
            );
        }
        None => {
            println!(
                "Sentiment for client #{}: {}",
                reading.client_id,
                "undetermined".yellow().bold()
            );
        }
    }

    Ok(())
}

async fn cmd_score(id: u32) -> Result<()> {
    let client = client_from_config()?;
    let score = client.engagement_score(id).await?;

    println!(
        "Engagement likelihood for client #{}: {} {}",
        score.client_id,
        format!("{}%", score.likelihood).green().bold(),
        "(simulated)".dimmed()
    );

    Ok(())
}

fn cmd_config(set_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = set_url {
        if url.trim().is_empty() {
            bail!("Base URL cannot be empty");
        }
        config.base_url = url.trim_end_matches('/').to_string();
        config.save()?;
        println!("{} Base URL set to {}", "✓".green(), config.base_url);
        return Ok(());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    Ok(())
}
