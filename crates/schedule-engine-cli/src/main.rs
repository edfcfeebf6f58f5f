//! `schedule` — expand, group and compose availability schedule strings.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use schedule_engine::{
    booking_options, expand_slots, group_schedule, time_labels, AvailabilityEntry, WeekdayName,
    WEEKDAYS, WEEKDAYS_FROM_SUNDAY,
};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "schedule", version, about = "Availability schedule expansion and grouping")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log debug output to stderr (otherwise controlled by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand one availability string into half-hour slots
    Expand {
        /// e.g. "Lunes 09:00 - 12:00" or "14:00"
        entry: String,
    },
    /// Group a JSON array of availability strings by weekday
    Group {
        /// JSON file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List booking options for a JSON array of stored availability strings
    Booking {
        /// JSON file to read (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the 48 half-hour time labels
    Labels,
    /// Print the weekday names
    Days {
        /// Sunday-first order, as used for day-of-week indexes
        #[arg(long, conflicts_with = "index")]
        sunday_first: bool,

        /// Print the single day for a day-of-week index (0 = Domingo)
        #[arg(long)]
        index: Option<usize>,
    },
    /// Build a validated "<Day> <start> - <end>" entry
    Compose {
        /// Canonical day name, e.g. "Miércoles"
        day: String,
        /// Start label, e.g. "09:00"
        start: String,
        /// End label, e.g. "12:00"
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Command::Expand { entry } => serde_json::to_value(expand_slots(&entry))?,
        Command::Group { input } => {
            let items = read_items(input)?;
            debug!("grouping {} item(s)", items.len());
            serde_json::to_value(group_schedule(&items))?
        }
        Command::Booking { input } => {
            let items = read_items(input)?;
            serde_json::to_value(booking_options(&items))?
        }
        Command::Labels => serde_json::to_value(time_labels())?,
        Command::Days {
            sunday_first,
            index,
        } => match index {
            Some(i) => serde_json::to_value(WeekdayName::from_sunday_index(i)?)?,
            None if sunday_first => serde_json::to_value(WEEKDAYS_FROM_SUNDAY)?,
            None => serde_json::to_value(WEEKDAYS)?,
        },
        Command::Compose { day, start, end } => {
            let day: WeekdayName = day.parse()?;
            let entry = AvailabilityEntry::new(day, &start, &end)?;
            Value::String(entry.to_raw())
        }
    };

    print_json(&output, cli.pretty)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn read_items(path: Option<PathBuf>) -> Result<Vec<String>> {
    let text = match path {
        Some(p) => {
            fs::read_to_string(&p).with_context(|| format!("failed to read {}", p.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("input must be a JSON array of strings")
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
