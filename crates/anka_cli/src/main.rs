use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use anka_base::{
    arcana_chart, day_card, destiny_matrix, destiny_number, pythagorean_square, working_numbers,
};
use anka_cache::shared;
use anka_time::CalendarDate;

#[derive(Parser)]
#[command(name = "anka", about = "Anka numerology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Working numbers for a birth date
    Working {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY)
        date: String,
    },
    /// Pythagorean square for a birth date
    Square {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY)
        date: String,
    },
    /// Destiny number and 8-position matrix
    Destiny {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY)
        date: String,
    },
    /// 22-arcana chakra chart
    Chart {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY)
        date: String,
    },
    /// Arcana-of-the-day card
    DayCard {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY); only the day is used
        date: String,
        /// Pre-computed name sum
        #[arg(long, default_value = "0")]
        name_sum: i64,
        /// Current date override (defaults to today)
        #[arg(long)]
        on: Option<String>,
    },
    /// Cached calculation bundle for a birth date (fills the shared cache)
    Cached {
        /// Birth date (YYYY-MM-DD or DD-MM-YYYY)
        date: String,
    },
}

fn require_date(s: &str) -> CalendarDate {
    match CalendarDate::parse(s) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("Invalid date '{s}': {e}");
            std::process::exit(1);
        }
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Working { date } => {
            let date = require_date(&date);
            let w = working_numbers(date);
            print_json(&json!({ "date": date.to_string(), "working": w }));
        }

        Commands::Square { date } => {
            let date = require_date(&date);
            let w = working_numbers(date);
            let square = pythagorean_square(date, &w);
            print_json(&json!({
                "date": date.to_string(),
                "working": w,
                "square": square,
            }));
        }

        Commands::Destiny { date } => {
            let date = require_date(&date);
            print_json(&json!({
                "date": date.to_string(),
                "destiny": destiny_number(date),
                "matrix": destiny_matrix(date),
            }));
        }

        Commands::Chart { date } => {
            let date = require_date(&date);
            print_json(&json!({
                "date": date.to_string(),
                "chart": arcana_chart(date),
            }));
        }

        Commands::DayCard { date, name_sum, on } => {
            let birth = require_date(&date);
            let current = match on {
                Some(s) => require_date(&s),
                None => CalendarDate::today(),
            };
            debug!("day card for birth day {} on {current}", birth.day);
            let card = day_card(birth.day as i64, name_sum, current);
            print_json(&json!({
                "birthDate": birth.to_string(),
                "currentDate": current.to_string(),
                "nameSum": name_sum,
                "card": card,
            }));
        }

        Commands::Cached { date } => {
            let date = require_date(&date);
            let mut cache = match shared().lock() {
                Ok(cache) => cache,
                Err(e) => {
                    eprintln!("Shared cache poisoned: {e}");
                    std::process::exit(1);
                }
            };
            let entry = *cache.get_or_compute(date);
            print_json(&json!({
                "cached": entry.result,
                "entries": cache.len(),
            }));
        }
    }
}
