use std::process::ExitCode;

use clap::Parser;
use simple_logger::SimpleLogger;

use trip_emissions::input::{resolve_flags, Flags, Prompter};
use trip_emissions::*;

const ABOUT: &'static str = r#"Estimates the CO2 emissions (kg) of a trip:
* transport: distance (km) x factor of the transport mode, twice for a round trip,
  also shown divided by the number of passengers
* lodging: nights x factor of the lodging type

When `--distance` or `--mode` is missing, each parameter is asked for interactively,
unless `--non-interactive` is given.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// One-way distance in km
    #[arg(short, long)]
    distance: Option<f64>,
    /// The transport mode (carro, onibus, trem, aviao_curta, aviao_longa)
    #[arg(short, long)]
    mode: Option<String>,
    /// Number of passengers sharing the transport
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    passengers: i64,
    /// Whether the trip includes the return
    #[arg(short, long)]
    round_trip: bool,
    /// Nights of lodging
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    nights: i64,
    /// The lodging type (hostel, hotel_padrao, hotel_luxo)
    #[arg(long)]
    hotel: Option<String>,
    /// Prints the result as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Fails instead of asking for missing parameters
    #[arg(long)]
    non_interactive: bool,
    /// Logs resolved parameters and totals to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Prints the emission factors and exits
    #[arg(long)]
    list_factors: bool,
}

impl Cli {
    fn flags(&self) -> Flags {
        Flags {
            distance_km: self.distance,
            mode: self.mode.clone(),
            passengers: self.passengers,
            round_trip: self.round_trip,
            nights: self.nights,
            hotel: self.hotel.clone(),
        }
    }
}

fn list_factors(json: bool) -> Result<String> {
    let table = FactorTable::current();
    if json {
        Ok(serde_json::to_string_pretty(&table)?)
    } else {
        Ok(table.to_text())
    }
}

fn run(cli: &Cli) -> Result<String> {
    if cli.list_factors {
        return list_factors(cli.json);
    }

    let flags = cli.flags();
    let params = if flags.is_complete() || cli.non_interactive {
        resolve_flags(&flags)?
    } else {
        log::info!("required parameters missing; asking interactively");
        let stdin = std::io::stdin();
        Prompter::new(stdin.lock(), std::io::stderr()).resolve_interactive()?
    };
    log::info!("{params:?}");

    let result = compute(&params)?;
    log::info!("{result:?}");

    if cli.json {
        format_structured(&params, &result).to_json()
    } else {
        format_text(&params, &result)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().unwrap();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            if error.is_usage() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
