use anyhow::{Context, Result};
use chrono::Utc;
use seatmap::DemoVenue;
use std::env;

struct Config {
    venue: DemoVenue,
    output_file: Option<String>,
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config {
        venue: DemoVenue::default(),
        output_file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-rows" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-rows requires an argument");
                }
                config.venue.rows = args[i].parse()?;
            }
            "-cols" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-cols requires an argument");
                }
                config.venue.cols = args[i].parse()?;
            }
            "-aisle" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-aisle requires an argument");
                }
                config.venue.aisle_every = args[i].parse()?;
            }
            "-occupancy" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-occupancy requires an argument");
                }
                config.venue.occupancy = parse_probability(&args[i])?;
            }
            "-bookings" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-bookings requires an argument");
                }
                config.venue.booking_rate = parse_probability(&args[i])?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.venue.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn parse_probability(text: &str) -> Result<f64> {
    let p: f64 = text.parse()?;
    if !(0.0..=1.0).contains(&p) {
        anyhow::bail!("probability must be between 0 and 1, got {}", p);
    }
    Ok(p)
}

fn print_help() {
    println!("Seat Map Venue Generator");
    println!("Usage: seatmap-venuegen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -rows <N>              Number of seat rows (default: 6)");
    println!("  -cols <N>              Seats per row (default: 10)");
    println!("  -aisle <N>             Leave an aisle after every N seats, 0 for none (default: 5)");
    println!("  -occupancy <P>         Probability a seat has a live session (default: 0.3)");
    println!("  -bookings <P>          Probability a free seat is booked (default: 0.35)");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: stdout)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    // Bookings are placed around the current time so the file is useful right away
    let venue = config.venue.generate(Utc::now());
    let json = venue.to_json()?;

    match &config.output_file {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path))?;
            eprintln!(
                "Venue written to: {} ({} seats, {} bookings)",
                path,
                venue.seats.len(),
                venue.bookings.len()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
