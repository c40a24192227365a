mod types;

use chrono::Local;
use distance::{AirportTable, DistanceCalculator};
use logger::{Color, Logger};
use std::io::{self, Write};
use types::{
    config::Config,
    flight_details::{FlightDetails, FlightForm},
    form_error::FormError,
    report::{airport_listing, DistanceReport},
};

const LOG_NAME: &str = "flight_form";

fn clean_scr() -> Result<(), FormError> {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush()?;
    Ok(())
}

/// Prints the distance between two airports, or the warning shown when it cannot be computed.
fn show_distance(
    calculator: &DistanceCalculator,
    logger: &Logger,
    origin: &str,
    destination: &str,
) -> Result<(), FormError> {
    let report = DistanceReport::new(calculator, origin, destination);
    let message = report.message();
    println!("{}", message);

    let record = format!("{}->{}: {}", report.origin, report.destination, message);
    if report.is_available() {
        logger.info(&record, Color::Green)?;
    } else {
        logger.warn(&record)?;
    }
    Ok(())
}

fn list_airports(table: &AirportTable, requested: &[&str]) {
    let rows = airport_listing(table, requested);
    println!("{} airports with known coordinates:", rows.len());
    for row in rows {
        println!("  {}", row);
    }
}

fn fill_flight_form(calculator: &DistanceCalculator, logger: &Logger) -> Result<(), FormError> {
    clean_scr()?;
    let date = prompt_input("Date of flight (DD-MM-YYYY, empty for today): ")?;
    let carrier = prompt_input("Airline code: ")?;
    let origin = prompt_input("Origin IATA code: ")?;
    let destination = prompt_input("Destination IATA code: ")?;
    let departure = prompt_input("Departure time (HH:MM, empty for 12:00): ")?;
    let scheduled_elapsed = prompt_input("Scheduled elapsed time in minutes (empty for 120): ")?;

    let form = FlightForm {
        date: &date,
        carrier: &carrier,
        origin: &origin,
        destination: &destination,
        departure: &departure,
        scheduled_elapsed: &scheduled_elapsed,
    };

    let flight = FlightDetails::new_from_console(calculator, &form, Local::now().date_naive())?;

    println!();
    for line in flight.summary() {
        println!("  {}", line);
    }
    logger.info(
        &format!(
            "flight {} {}->{} on {} at {:04}, {:.1} miles",
            flight.carrier,
            flight.origin,
            flight.destination,
            flight.date,
            flight.dep_time(),
            flight.distance_miles
        ),
        Color::Cyan,
    )?;
    Ok(())
}

fn load_table(config: &Config) -> Result<AirportTable, FormError> {
    match &config.airports {
        Some(path) => Ok(AirportTable::from_csv_path(path)?),
        None => Ok(distance::airports().clone()),
    }
}

fn main() -> Result<(), FormError> {
    let config = Config::from_env()?;
    let logger = Logger::new(&config.log_dir, LOG_NAME)?.with_console(config.console);

    let table = match load_table(&config) {
        Ok(table) => table,
        Err(e) => {
            logger.error(&e.to_string())?;
            return Err(e);
        }
    };
    let calculator = DistanceCalculator::new(&table);
    logger.info(&format!("loaded {} airports", table.len()), Color::Blue)?;

    loop {
        println!("Enter command (type '-h' or '--help' for options): ");
        let mut command = String::new();
        if io::stdin().read_line(&mut command)? == 0 {
            break;
        }

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            continue;
        }

        let result = match args[0] {
            "distance" => match args.as_slice() {
                [_, origin, destination] => {
                    show_distance(&calculator, &logger, origin, destination)
                }
                _ => Err(FormError::InvalidInput(
                    "usage: distance <ORIGIN> <DEST>".to_string(),
                )),
            },

            "airports" => clean_scr().map(|_| list_airports(&table, &args[1..])),

            "flight" => fill_flight_form(&calculator, &logger),

            "-h" | "--help" | "help" => clean_scr().map(|_| print_help()),

            "exit" => break,

            other => Err(FormError::InvalidInput(format!(
                "unknown command '{}'. Use -h for help.",
                other
            ))),
        };

        if let Err(e) = result {
            eprintln!("{}", e);
            match e {
                FormError::Logger(_) | FormError::Io(_) => return Err(e),
                _ => logger.warn(&e.to_string())?,
            }
        }
    }

    logger.info("session closed", Color::Blue)?;
    Ok(())
}

fn prompt_input(prompt: &str) -> Result<String, FormError> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn print_help() {
    println!("Available commands:");
    println!("  distance <ORIGIN> <DEST>");
    println!("    Shows the great-circle distance between two airports, in miles.");
    println!("  airports [CODE...]");
    println!("    Lists the airports with known coordinates, or only the given ones.");
    println!("  flight");
    println!("    Fills in the flight details form. You'll be prompted for each detail.");
    println!("  exit");
    println!("    Closes this application.");
}
