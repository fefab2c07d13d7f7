use crate::error::{ScheduleError, ScheduleResult};
use crate::flight::Flight;
use crate::time::Time;

pub const COMMANDS: [&str; 13] = [
    "ls", "show", "add", "rm", "complete", "validate", "fix", "returns", "hours", "overworked",
    "stats", "help", "exit",
];

const LS_USAGE: &str = "ls [a|s|p|c|u] | ls ac <aircraft> | ls ap <airport> | ls range <from> <to>";
const ADD_USAGE: &str = "add <number> <from> <to> <departure> <arrival> <aircraft>";
const HOURS_USAGE: &str = "hours <aircraft> [<from> <to>]";

#[derive(Debug, Clone, PartialEq)]
pub enum ListFilter {
    All,
    Scheduled,
    InProgress,
    Completed,
    Unknown,
    Aircraft(String),
    Airport(String),
    Range(Time, Time),
}

#[derive(Debug, Clone)]
pub enum Command {
    List(ListFilter),
    Show(String),
    Add(Flight),
    Remove(String),
    Complete(String),
    Validate,
    Fix,
    Returns,
    Hours {
        aircraft: String,
        range: Option<(Time, Time)>,
    },
    Overworked(Option<f64>),
    Stats,
    Help,
    Exit,
}

fn nth<'a>(parts: &[&'a str], i: usize, usage: &'static str) -> ScheduleResult<&'a str> {
    parts.get(i).copied().ok_or(ScheduleError::Usage(usage))
}

impl Command {
    /// Parses one non-empty console line.
    pub fn parse(line: &str) -> ScheduleResult<Command> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(head) = parts.first() else {
            return Err(ScheduleError::UnknownCommand(String::new()));
        };
        let arg = |i: usize, usage: &'static str| nth(&parts, i, usage);

        let cmd = match *head {
            "ls" => Command::List(match parts.get(1).copied().unwrap_or("a") {
                "a" | "all" => ListFilter::All,
                "s" | "scheduled" => ListFilter::Scheduled,
                "p" | "progress" => ListFilter::InProgress,
                "c" | "completed" => ListFilter::Completed,
                "u" | "unknown" => ListFilter::Unknown,
                "ac" => ListFilter::Aircraft(arg(2, LS_USAGE)?.to_string()),
                "ap" => ListFilter::Airport(arg(2, LS_USAGE)?.to_string()),
                "range" => ListFilter::Range(
                    arg(2, LS_USAGE)?.parse::<Time>()?,
                    arg(3, LS_USAGE)?.parse::<Time>()?,
                ),
                _ => return Err(ScheduleError::Usage(LS_USAGE)),
            }),
            "show" => Command::Show(arg(1, "show <number>")?.to_string()),
            "add" => {
                let dep: Time = arg(4, ADD_USAGE)?.parse()?;
                let arr: Time = arg(5, ADD_USAGE)?.parse()?;
                Command::Add(Flight::new(
                    arg(1, ADD_USAGE)?,
                    arg(2, ADD_USAGE)?,
                    arg(3, ADD_USAGE)?,
                    dep,
                    arr,
                    arg(6, ADD_USAGE)?,
                ))
            }
            "rm" => Command::Remove(arg(1, "rm <number>")?.to_string()),
            "complete" => Command::Complete(arg(1, "complete <number>")?.to_string()),
            "validate" => Command::Validate,
            "fix" => Command::Fix,
            "returns" => Command::Returns,
            "hours" => {
                let aircraft = arg(1, HOURS_USAGE)?.to_string();
                let range = match (parts.get(2), parts.get(3)) {
                    (None, _) => None,
                    (Some(from), Some(to)) => Some((from.parse::<Time>()?, to.parse::<Time>()?)),
                    (Some(_), None) => return Err(ScheduleError::Usage(HOURS_USAGE)),
                };
                Command::Hours { aircraft, range }
            }
            "overworked" => Command::Overworked(
                parts
                    .get(1)
                    .map(|s| {
                        s.parse::<f64>()
                            .map_err(|_| ScheduleError::InvalidNumber(s.to_string()))
                    })
                    .transpose()?,
            ),
            "stats" => Command::Stats,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(ScheduleError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}
