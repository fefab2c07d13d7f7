use crate::command::{COMMANDS, Command, ListFilter};
use crate::config::Settings;
use crate::flight::{Flight, FlightStatus};
use crate::schedule::schedule::Schedule;
use crate::time::Time;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command as Process, Stdio};
use tabled::settings::Style;
use tabled::Tabled;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod error;
mod flight;
mod schedule;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Daily flight-hour ceiling per aircraft, overrides the scenario settings
    #[arg(long, value_name = "HOURS")]
    ceiling: Option<f64>,

    /// Fixed clock for flight status (epoch seconds or YYYY-MM-DDTHH:MM)
    #[arg(long, value_name = "TIME")]
    now: Option<Time>,

    /// Log filter, e.g. `debug` or `flightsched=info`; RUST_LOG when absent
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct FlightRow {
    #[tabled(rename = "Flight")]
    number: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Aircraft")]
    aircraft: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl FlightRow {
    fn new(flight: &Flight, now: Time) -> FlightRow {
        FlightRow {
            number: flight.number.to_string(),
            from: flight.departure_airport.to_string(),
            to: flight.destination_airport.to_string(),
            departure: flight.departure_time.to_string(),
            arrival: flight.arrival_time.to_string(),
            hours: format!("{:.2}", flight.duration_hours()),
            aircraft: flight.aircraft_id.to_string(),
            status: colored_status(flight.status(now)),
        }
    }
}

fn colored_status(status: FlightStatus) -> String {
    let label = status.to_string();
    match status {
        FlightStatus::Completed => label.dimmed().to_string(),
        FlightStatus::InProgress => label.cyan().to_string(),
        FlightStatus::Scheduled => label.green().to_string(),
        FlightStatus::Unknown => label.yellow().to_string(),
    }
}

fn paginate(content: &str) -> std::io::Result<()> {
    let mut pager = Process::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Process::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait().map(|_| ())
}

fn print_flights(flights: &[&Flight], settings: &Settings, empty_message: &str) {
    if flights.is_empty() {
        println!("{}", empty_message);
        return;
    }

    let now = settings.now();
    let mut table = tabled::Table::new(flights.iter().map(|f| FlightRow::new(f, now)));
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    let rendered = table.to_string();
    if flights.len() > settings.pager_threshold {
        if let Err(e) = paginate(&rendered) {
            warn!(error = %e, "pager unavailable");
            println!("{}", rendered);
        }
    } else {
        println!("{}", rendered);
    }
}

fn describe(flight: &Flight, now: Time) {
    println!("Flight #{}", flight.number);
    println!("  Route: {} -> {}", flight.departure_airport, flight.destination_airport);
    println!("  Aircraft: {}", flight.aircraft_id);
    println!("  Departure: {}", flight.departure_time);
    println!("  Arrival: {}", flight.arrival_time);
    println!("  Duration: {:.2} hours", flight.duration_hours());
    println!("  Status: {}", colored_status(flight.status(now)));
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  ls [a|s|p|c|u]        - List flights, optionally by status: s - scheduled, p - in progress, c - completed, u - unknown");
    println!("  ls ac <aircraft>      - Schedule of one aircraft");
    println!("  ls ap <airport>       - Flights departing from or arriving at <airport>");
    println!("  ls range <t> <t>      - Flights departing within the range (inclusive)");
    println!("  show <number>         - Details of one flight");
    println!("  add <n> <from> <to> <dep> <arr> <aircraft>");
    println!("                        - Add a flight; invalid flights are discarded");
    println!("  rm <number>           - Remove every flight with this number");
    println!("  complete <number>     - Mark a flight as completed");
    println!("  validate              - Check flights and aircraft double-booking");
    println!("  fix                   - Remove structurally invalid flights");
    println!("  returns               - Add return flights for every incomplete flight");
    println!("  hours <ac> [<t> <t>]  - Total flight hours of an aircraft");
    println!("  overworked [hours]    - Aircraft above the daily flight-hour ceiling");
    println!("  stats                 - Flight counts by status");
    println!("  help / ?              - Show this help menu");
    println!("  exit / quit           - Exit the console\n");
    println!("Times are epoch seconds or local YYYY-MM-DDTHH:MM[:SS].\n");
}

fn execute(schedule: &mut Schedule, settings: &Settings, command: Command) {
    match command {
        Command::List(filter) => {
            let now = settings.now();
            let (flights, empty_message): (Vec<&Flight>, String) = match filter {
                ListFilter::Aircraft(id) => (
                    schedule.by_aircraft(&id),
                    format!("No flights scheduled for aircraft {}.", id),
                ),
                ListFilter::Airport(code) => (
                    schedule.by_airport(&code),
                    format!("No flights at airport {}.", code),
                ),
                ListFilter::Range(start, end) => (
                    schedule.in_time_range(start, end),
                    format!("No flights departing between {} and {}.", start, end),
                ),
                status => (
                    schedule
                        .all()
                        .iter()
                        .filter(|f| match status {
                            ListFilter::Scheduled => f.is_scheduled(now),
                            ListFilter::InProgress => f.is_in_progress(now),
                            ListFilter::Completed => f.is_completed(),
                            ListFilter::Unknown => f.status(now) == FlightStatus::Unknown,
                            _ => true,
                        })
                        .collect(),
                    "No matching flights found.".to_string(),
                ),
            };
            print_flights(&flights, settings, &empty_message);
        }
        Command::Show(number) => match schedule.find(&number) {
            Some(flight) => describe(flight, settings.now()),
            None => println!("Flight {} not found.", number),
        },
        Command::Add(flight) => {
            let number = flight.number.clone();
            let verdict = flight.check();
            schedule.add(flight);
            match verdict {
                Ok(()) => println!("Added flight {}.", number),
                Err(reason) => println!("{}", format!("Discarded flight {}: {}.", number, reason).yellow()),
            }
        }
        Command::Remove(number) => {
            let removed = schedule.remove(&number);
            println!("Removed {} flight(s) numbered {}.", removed, number);
        }
        Command::Complete(number) => {
            if schedule.complete_flight(&number) {
                println!("Flight {} completed.", number);
            } else {
                println!("Flight {} not found.", number);
            }
        }
        Command::Validate => {
            let errors = schedule.validation_errors();
            if errors.is_empty() {
                println!("{}", "Schedule is valid.".green());
                return;
            }
            for error in errors {
                println!("{}", error.to_string().red());
            }
            for (a, b) in schedule.conflicting_pairs() {
                println!("  {} overlaps {}", a.to_string().yellow(), b.to_string().yellow());
            }
        }
        Command::Fix => {
            let removed = schedule.validate_and_fix();
            if removed.is_empty() {
                println!("No invalid flights found.");
            } else {
                println!("Removed {} invalid flight(s): {}", removed.len(), removed.join(", "));
            }
            if schedule.has_conflicts() {
                println!("{}", "Conflicts remain; they are not repaired automatically.".yellow());
            }
        }
        Command::Returns => {
            let added = schedule.add_return_flights();
            println!("Added {} return flight(s).", added.len());
        }
        Command::Hours { aircraft, range } => match range {
            Some((start, end)) => println!(
                "{}: {:.2} hours between {} and {}",
                aircraft,
                schedule.total_flight_hours_in_range(&aircraft, start, end),
                start,
                end
            ),
            None => println!("{}: {:.2} hours", aircraft, schedule.total_flight_hours(&aircraft)),
        },
        Command::Overworked(ceiling) => {
            let ceiling = ceiling.unwrap_or(settings.daily_ceiling_hours);
            let overworked = schedule.overworked_aircraft(ceiling);
            if overworked.is_empty() {
                println!("No aircraft above {:.2} hours per day.", ceiling);
                return;
            }
            for ((aircraft, date), hours) in schedule.daily_utilization() {
                if hours > ceiling {
                    let day = date.map_or_else(|| "?".to_string(), |d| d.to_string());
                    println!("{} {} {:.2} h", aircraft.to_string().red(), day, hours);
                }
            }
        }
        Command::Stats => {
            let counts = schedule.counts(settings.now());
            println!("Total flights:       {}", counts.total);
            println!("Completed flights:   {}", counts.completed);
            println!("Scheduled flights:   {}", counts.scheduled);
            println!("In-progress flights: {}", counts.in_progress);
        }
        Command::Help => print_help(),
        Command::Exit => {}
    }
}

fn init_logging(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let (mut schedule, mut settings) = Schedule::load_from_file(&args.scenario)?;
    if let Some(ceiling) = args.ceiling {
        settings.daily_ceiling_hours = ceiling;
    }
    if args.now.is_some() {
        settings.now = args.now;
    }
    println!(
        "Tower online. Loaded {} flights from {}",
        schedule.len(),
        args.scenario.display()
    );
    if schedule.is_empty() {
        println!("{}", "Scenario contains no valid flights; use `add` to build a schedule.".yellow());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                match Command::parse(trimmed) {
                    Ok(Command::Exit) => break,
                    Ok(command) => execute(&mut schedule, &settings, command),
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
