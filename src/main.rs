//! Handy - a desktop grab bag of everyday utilities
//!
//! Fifteen small tools (calculators, converters, and generators) behind a
//! single searchable shell.
//!
//! # Architecture
//!
//! - `core`: tool math and data plumbing, free of widget state
//! - `app`: GUI state, message handling, and views
//! - `validators`: input parsing shared by the GUI and CLI
//! - `config`: sticky preferences (theme, last tool, generator options)
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! handy
//!
//! # CLI commands
//! handy list                           # List the tool catalog
//! handy emi 500000 --rate 9.5 --months 48
//! handy password --length 20 --no-symbols
//! handy qr "https://example.com" -o code.png
//! handy words notes.txt
//! git log --format=%s | handy words
//! ```

mod app;
mod config;
mod core;
mod theme;
mod utils;
mod validators;

use clap::{Parser, Subcommand};
use iced::Size;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "handy")]
#[command(about = "Handy - everyday calculators, converters, and generators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available tools
    List,
    /// Compute a monthly loan installment
    Emi {
        /// Loan principal
        principal: f64,
        /// Annual interest rate in percent
        #[arg(short, long, default_value_t = 10.0)]
        rate: f64,
        /// Tenure in months
        #[arg(short, long, default_value_t = 60, value_parser = parse_months)]
        months: u32,
    },
    /// Generate a random password
    Password {
        /// Password length
        #[arg(short, long, default_value_t = core::generate::DEFAULT_PASSWORD_LENGTH)]
        length: u8,
        /// Skip symbol characters
        #[arg(long)]
        no_symbols: bool,
    },
    /// Generate a QR code and save it as PNG
    Qr {
        /// Data to encode
        data: String,
        /// Pixel size of the square image
        #[arg(short, long, default_value_t = core::qr::DEFAULT_SIZE)]
        size: u32,
        /// Output file
        #[arg(short, long, default_value = "qr-code.png")]
        output: std::path::PathBuf,
    },
    /// Count words, sentences, and reading time in text
    Words {
        /// File to analyze; reads stdin when omitted or "-"
        file: Option<std::path::PathBuf>,
    },
}

fn parse_months(input: &str) -> Result<u32, String> {
    validators::parse_integer_in_range("months", input, core::finance::TENURE_RANGE)
}

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        // Create Tokio runtime only for CLI commands
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("Error: failed to create async runtime: {e}");
                return ExitCode::FAILURE;
            }
        };
        match runtime.block_on(handle_cli(command)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui()
    }
}

async fn handle_cli(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List => {
            println!("Available tools:");
            for tool in core::catalog::TOOLS {
                println!("  {:<22} {}", tool.id, tool.description);
            }
        }
        Commands::Emi {
            principal,
            rate,
            months,
        } => {
            let breakdown = core::finance::emi(principal, rate, months)?;
            println!("Monthly EMI:    {}", core::finance::format_inr(breakdown.emi));
            println!(
                "Total payment:  {}",
                core::finance::format_inr(breakdown.total_payment)
            );
            println!(
                "Total interest: {}",
                core::finance::format_inr(breakdown.total_interest)
            );
        }
        Commands::Password { length, no_symbols } => {
            let options = core::generate::PasswordOptions {
                length,
                symbols: !no_symbols,
                ..Default::default()
            };
            let pwd = core::generate::password(&options)?;
            println!("{pwd}");
            eprintln!("Strength: {}", core::generate::strength(&pwd));
        }
        Commands::Qr { data, size, output } => {
            let request = core::qr::QrRequest::new(
                core::qr::QrContent::Text,
                &data,
                size,
                "000000",
                "ffffff",
            )?;
            let url = request.image_url()?;
            let png = core::qr::fetch_png(url).await?;
            tokio::fs::write(&output, png).await?;
            println!("Saved {}", output.display());
        }
        Commands::Words { file } => {
            let contents = match file {
                Some(path) if path.as_os_str() != "-" => {
                    tokio::fs::read_to_string(&path).await?
                }
                _ => {
                    use tokio::io::AsyncReadExt;
                    let mut buffer = String::new();
                    tokio::io::stdin().read_to_string(&mut buffer).await?;
                    buffer
                }
            };
            let stats = core::text::analyze(&contents);
            println!("Words:       {}", stats.words);
            println!("Characters:  {}", stats.characters);
            println!("Sentences:   {}", stats.sentences);
            println!("Paragraphs:  {}", stats.paragraphs);
            println!("Reading:     about {} min", stats.reading_minutes);
        }
    }
    Ok(())
}

fn launch_gui() -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("handy.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(app::State::new, app::State::update, app::State::view)
        .subscription(app::State::subscription)
        .window(iced::window::Settings {
            size: Size::new(1000.0, 700.0),
            ..Default::default()
        })
        .title("Handy")
        .theme(|_state: &app::State| iced::Theme::Dark)
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_months_must_fall_in_tenure_range() {
        assert_eq!(parse_months("60"), Ok(60));
        assert!(parse_months("5").is_err());
        assert!(parse_months("361").is_err());

        let parsed = Cli::try_parse_from(["handy", "emi", "500000", "--months", "400"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_words_file_is_optional() {
        let parsed = Cli::try_parse_from(["handy", "words"]).unwrap();
        match parsed.command {
            Some(Commands::Words { file }) => assert!(file.is_none()),
            _ => panic!("expected the words subcommand"),
        }
    }
}
