//! CLI tool for card input checks.
//!
//! # Usage
//!
//! ```bash
//! # Which network does a (partial) number belong to?
//! ccinput resolve 3782
//!
//! # Group digits the way an input field would
//! ccinput format 378282246310005
//!
//! # Validate a full number (network resolved from the number unless given)
//! ccinput validate "4242 4242 4242 4242"
//!
//! # Validate a CVV for a network
//! ccinput cvv 1234 --network amex
//!
//! # Generate test card numbers
//! ccinput generate --network visa --count 5
//!
//! # List the catalog
//! ccinput networks --output json
//! ```
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see resolver trace output.

use cc_input::catalog::{self, NetworkDefinition};
use cc_input::entry::{CardEntry, CvvEntry};
use cc_input::generate::CardGenerator;
use cc_input::{format, passes_luhn, resolve, validate};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccinput")]
#[command(author, version, about = "Payment card input toolkit")]
struct Cli {
    /// Log resolver decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the card network from a (partial) number
    Resolve {
        /// Card number, complete or partial
        card_number: String,

        /// List every compatible network, most specific first
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Format a card number for display
    Format {
        /// Card number to format
        card_number: String,

        /// Network whose layout to use (resolved from the number if omitted)
        #[arg(short, long, value_parser = parse_network)]
        network: Option<&'static NetworkDefinition>,

        /// Separator to use
        #[arg(short, long, default_value = " ")]
        separator: String,
    },

    /// Validate a card number (length and Luhn)
    Validate {
        /// Card number to validate
        card_number: String,

        /// Network to validate against (resolved from the number if omitted)
        #[arg(short, long, value_parser = parse_network)]
        network: Option<&'static NetworkDefinition>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a CVV/CVC
    Cvv {
        /// CVV to validate
        cvv: String,

        /// Network whose CVV length applies
        #[arg(short, long, value_parser = parse_network, conflicts_with = "length")]
        network: Option<&'static NetworkDefinition>,

        /// Exact expected length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Number to check
        card_number: String,
    },

    /// Generate test card numbers (for testing only)
    Generate {
        /// Network to generate for
        #[arg(short, long, default_value = "visa", value_parser = parse_network)]
        network: &'static NetworkDefinition,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Total length (defaults to 16 when the network accepts it)
        #[arg(short, long)]
        length: Option<usize>,

        /// Output formatted (with spaces)
        #[arg(short, long)]
        formatted: bool,
    },

    /// List the network catalog
    Networks {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_network(id: &str) -> Result<&'static NetworkDefinition, String> {
    catalog::find(&id.to_lowercase()).ok_or_else(|| {
        let known: Vec<&str> = catalog::networks().map(|n| n.id()).collect();
        format!("unknown network '{}' (known: {})", id, known.join(", "))
    })
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug,cc_input=trace" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            card_number,
            all,
            output,
        } => {
            cmd_resolve(&card_number, all, output);
        }
        Commands::Format {
            card_number,
            network,
            separator,
        } => {
            cmd_format(&card_number, network, &separator);
        }
        Commands::Validate {
            card_number,
            network,
            output,
        } => {
            cmd_validate(&card_number, network, output);
        }
        Commands::Cvv {
            cvv: cvv_input,
            network,
            length,
        } => {
            cmd_cvv(&cvv_input, network.map(|n| n.cvv_length()).or(length));
        }
        Commands::Luhn { card_number } => {
            cmd_luhn(&card_number);
        }
        Commands::Generate {
            network,
            count,
            length,
            formatted,
        } => {
            cmd_generate(network, count, length, formatted);
        }
        Commands::Networks { output } => {
            cmd_networks(output);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize output");
            std::process::exit(2);
        }
    }
}

fn print_network(network: &NetworkDefinition) {
    let lengths: Vec<String> = network.valid_lengths().iter().map(|l| l.to_string()).collect();
    let layout: Vec<String> = network.segment_layout().iter().map(|g| g.to_string()).collect();
    println!("Network: {} ({})", network.name(), network.id());
    println!("Valid Lengths: {}", lengths.join(", "));
    println!("Layout: {}", layout.join("-"));
    println!("{} Length: {}", network.cvv_name(), network.cvv_length());
}

fn cmd_resolve(card_number: &str, all: bool, output: OutputFormat) {
    let networks = if all {
        resolve::matching_networks(card_number)
    } else {
        vec![resolve(card_number)]
    };
    tracing::debug!(candidates = networks.len(), "resolved");

    match output {
        OutputFormat::Text if networks.is_empty() => println!("Network: none"),
        OutputFormat::Text => {
            for (i, network) in networks.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_network(network);
            }
        }
        OutputFormat::Json => print_json(&networks),
    }
}

fn cmd_format(card_number: &str, network: Option<&'static NetworkDefinition>, separator: &str) {
    let network = network.unwrap_or_else(|| resolve(card_number));
    println!("{}", format::format_with_separator(card_number, network, separator));
}

fn cmd_validate(card_number: &str, network: Option<&'static NetworkDefinition>, output: OutputFormat) {
    let entry = match network {
        Some(network) => CardEntry::with_network(card_number, network),
        None => CardEntry::new(card_number),
    };
    let network = entry.network();
    let result = validate::validate_card_number(card_number, network);

    match output {
        OutputFormat::Text => match &result {
            Ok(()) => {
                println!("Valid: yes");
                println!("Network: {}", network.name());
                println!("Formatted: {}", format::format(card_number, network));
            }
            Err(e) => {
                println!("Valid: no");
                println!("Network: {}", network.name());
                println!("Error: {}", e);
            }
        },
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Report<'a> {
                valid: bool,
                network: &'static str,
                entry: &'a CardEntry,
                #[serde(skip_serializing_if = "Option::is_none")]
                error: Option<String>,
            }

            print_json(&Report {
                valid: result.is_ok(),
                network: network.id(),
                entry: &entry,
                error: result.as_ref().err().map(|e| e.to_string()),
            });
        }
    }

    std::process::exit(if result.is_ok() { 0 } else { 1 });
}

fn cmd_cvv(cvv_input: &str, expected: Option<usize>) {
    let entry = CvvEntry::new(cvv_input, expected);

    match entry.validate() {
        Ok(length) => {
            println!("Valid: yes");
            println!("Length: {} digits", length);
            std::process::exit(0);
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_luhn(card_number: &str) {
    if passes_luhn(card_number) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_generate(
    network: &'static NetworkDefinition,
    count: usize,
    length: Option<usize>,
    formatted: bool,
) {
    let mut generator = CardGenerator::new(network);
    if let Some(length) = length {
        if !network.is_valid_length(length) {
            tracing::warn!(network = network.id(), length, "length not accepted by network");
        }
        generator = generator.length(length);
    }

    for _ in 0..count {
        let card = generator.generate();
        if formatted {
            println!("{}", format::format(&card, network));
        } else {
            println!("{}", card);
        }
    }
}

fn cmd_networks(output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            for network in catalog::networks() {
                let lengths: Vec<String> =
                    network.valid_lengths().iter().map(|l| l.to_string()).collect();
                println!(
                    "{:<12} {:<18} lengths {:<24} cvv {}",
                    network.id(),
                    network.name(),
                    lengths.join(","),
                    network.cvv_length()
                );
            }
        }
        OutputFormat::Json => {
            let networks: Vec<&NetworkDefinition> = catalog::networks().collect();
            print_json(&networks);
        }
    }
}
