mod cli;
mod config;
mod demo;
mod error;
mod fetch;
mod normalize;
mod plate;
mod present;
mod report;
mod types;

use chrono::Local;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::Config;
use env_logger::Env;
use fetch::Fetcher;
use log::debug;
use plate::Plate;
use present::Style;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use types::Field;

#[macro_use]
extern crate failure;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = run(cli).await {
        debug!("Exiting with error: {:?}", e);
        eprintln!("{}", format!("Error: {}", e).red().bold());
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), failure::Error> {
    println!("{}\n", present::banner());

    let raw = match cli.plate {
        Some(raw) => raw,
        None => prompt("Enter vehicle number (e.g., PB65AM0008): ")?,
    };
    let plate = Plate::parse(&raw)?;

    let mut config = Config::load(Path::new(".env"))?;
    config.offline = cli.offline;
    if let Some(dir) = cli.reports_dir {
        config.reports_dir = dir;
    }
    let reports_dir = config.reports_dir.clone();

    println!("Fetching details for {}...", plate.to_string().yellow().bold());
    let fetcher = Fetcher::new(config)?;
    let lookup = fetcher.lookup(&plate).await;
    debug!(
        "Rendering {} record registered as {}",
        lookup.source,
        lookup.record.get(Field::RegistrationNumber).unwrap_or("N/A")
    );
    println!("\n{}", present::render(&lookup, Style::Color));

    if cli.save {
        let path = report::save(&reports_dir, &plate, &lookup, &Local::now())?;
        println!("{}", format!("Report saved to {}", path.display()).green());
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String, failure::Error> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
