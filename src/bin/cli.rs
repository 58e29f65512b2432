//! World Cup History CLI
//!
//! Command-line interface for the dashboard:
//! - Look up title counts and finals from a running server
//! - Check server status
//! - Export the tables as CSV files
//! - Print a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use worldcup_history::config::{generate_default_config, Config};
use worldcup_history::data::{write_csv_files, Dataset};

#[derive(Parser)]
#[command(name = "worldcup-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FIFA World Cup history at the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dashboard server URL
    #[arg(long, default_value = "http://localhost:8053", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how many World Cups a country has won
    Wins {
        /// Country name, e.g. Brazil
        country: String,
    },

    /// Show the final of a tournament year
    Year {
        /// Tournament year, e.g. 2022
        year: u16,
    },

    /// List every country that ever won
    Winners,

    /// List title counts for all countries
    Countries,

    /// Show server status
    Status,

    /// Write world_cup_data.csv and world_cup_wins.csv
    Export {
        /// Output directory (default: export.dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Wins { country } => {
            let url = format!(
                "{}/api/v1/countries/{}/wins",
                cli.api_url,
                urlencoding::encode(&country)
            );
            let data = fetch_json(&client, &url).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!(
                    "{} World Cup Wins: {}",
                    data["country"].as_str().unwrap_or(&country),
                    data["wins"].as_u64().unwrap_or(0)
                );
            }
        }

        Commands::Year { year } => {
            let url = format!("{}/api/v1/years/{}", cli.api_url, year);
            let data = fetch_json(&client, &url).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_year_summary(year, &data);
            }
        }

        Commands::Winners => {
            let data = fetch_json(&client, &format!("{}/api/v1/winners", cli.api_url)).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("All countries that ever won a World Cup:");
                for winner in data["winners"].as_array().into_iter().flatten() {
                    println!("  - {}", winner.as_str().unwrap_or("-"));
                }
            }
        }

        Commands::Countries => {
            let data = fetch_json(&client, &format!("{}/api/v1/countries", cli.api_url)).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{:<12} {:<5} {:>4}", "Country", "ISO", "Wins");
                println!("{}", "-".repeat(23));

                for country in data["countries"].as_array().into_iter().flatten() {
                    println!(
                        "{:<12} {:<5} {:>4}",
                        country["country"].as_str().unwrap_or("-"),
                        country["iso_code"].as_str().unwrap_or("-"),
                        country["wins"].as_u64().unwrap_or(0)
                    );
                }
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("World Cup History v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "Server Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Open sessions: {}",
                        health["sessions"].as_u64().unwrap_or(0)
                    );
                    if let Some(started) = health["started_at"].as_str() {
                        println!("Started at: {}", started);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    bail!("Server returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to dashboard at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the dashboard server is running:");
                    eprintln!("  cargo run --bin worldcup");
                    return Err(e.into());
                }
            }
        }

        Commands::Export { dir } => {
            let dir = match dir {
                Some(dir) => dir,
                None => PathBuf::from(Config::load_default()?.export.dir),
            };
            let dataset = Dataset::builtin()?;

            let written = write_csv_files(&dataset, &dir)
                .with_context(|| format!("Failed to export into {:?}", dir))?;

            for path in written {
                println!("Exported to {:?}", path);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// GET a JSON document, turning API error bodies into errors
async fn fetch_json(client: &reqwest::Client, url: &str) -> anyhow::Result<serde_json::Value> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Cannot connect to {}", url))?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    if !status.is_success() {
        let message = body["error"]["message"].as_str().unwrap_or("unknown error");
        bail!("Request failed ({}): {}", status, message);
    }

    Ok(body)
}

fn print_year_summary(year: u16, data: &serde_json::Value) {
    match data["status"].as_str() {
        Some("match") => {
            println!("{} World Cup Summary:", year);
            println!("  Winner: {}", data["winner"].as_str().unwrap_or("-"));
            println!("  Runner-Up: {}", data["runner_up"].as_str().unwrap_or("-"));
            println!("  Score: {}", data["score"].as_str().unwrap_or("-"));
        }
        _ => println!("No data available for this year"),
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
