use anyhow::Result;
use clap::{Parser, Subcommand};
use clima_core::{Joke, JokeClient, WeatherLookup, WeatherReport};
use serde_json::Value;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Weather and joke lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Weather {
        /// City name; prompted for interactively when omitted.
        city: Option<String>,

        /// OpenWeather API key.
        #[arg(long, env = "OPENWEATHER_API_KEY")]
        api_key: String,
    },

    /// Print a random joke.
    Joke,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Weather { city, api_key } => {
                let city = match city {
                    Some(city) => city,
                    None => inquire::Text::new("City:").prompt()?,
                };

                let lookup = WeatherLookup::new(api_key);
                match lookup.lookup(&city).await? {
                    Some(report) => print_report(&report),
                    None => println!("Could not fetch weather for this city."),
                }
            }
            Command::Joke => {
                let client = JokeClient::new();
                match client.fetch().await? {
                    Some(Joke { setup, punchline }) => println!("{setup} - {punchline}"),
                    None => println!("Could not fetch a joke right now."),
                }
            }
        }

        Ok(())
    }
}

fn print_report(report: &WeatherReport) {
    println!("Temperature: {}", plain(&report.temperature));
    println!("Description: {}", plain(&report.description));
    println!("Humidity: {}", plain(&report.humidity));
}

// JSON strings print without their quotes; every other JSON type keeps its
// JSON rendering.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
