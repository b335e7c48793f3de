use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::str::FromStr;

use room_viewer::config::Settings;
use room_viewer::{CodeHandler, FileRoomSource, HttpRoomSource, RoomSource, RoomStore, ScanOutcome, Scanner, SortCriterion, TimeLabel};

/// Payload token that stands for the user pressing "Scan Again".
const REARM_TOKEN: &str = ":rearm";

#[derive(Debug, Parser)]
#[command(name = "room-viewer", version, about = "Browse meeting room availability")]
struct Cli {
    /// Room availability URL (overrides ROOM_AVAILABILITY_URL).
    #[arg(long, global = true, conflicts_with = "file")]
    url: Option<String>,

    /// Read the room list from a local JSON file instead of the network.
    #[arg(long, global = true)]
    file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all rooms, optionally sorted.
    List {
        /// level | capacity | availability
        #[arg(long, value_parser = SortCriterion::from_str)]
        sort: Option<SortCriterion>,
    },
    /// Check whether a room is available at the selected time.
    Check {
        room: String,

        #[arg(long, default_value = "08:00", value_parser = TimeLabel::parse)]
        time: TimeLabel,

        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Feed decoded codes through the scanner as the camera would report them.
    /// Use ":rearm" between payloads to scan again.
    Scan {
        #[arg(required = true)]
        payloads: Vec<String>,
    },
}

/// Stands in for the platform URL opener: it only reports the URL it was given.
struct ConsoleOpener;

impl CodeHandler for ConsoleOpener {
    type Output = String;

    fn handle(&mut self, payload: &str) -> String {
        println!("QR Code Scanned. Opening: {}", payload);
        payload.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    room_viewer::logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan { payloads } => {
            scan(&payloads);
            Ok(())
        }
        Command::List { sort } => {
            let store = load_store(cli.url, cli.file).await?;

            if let Some(criterion) = sort {
                store.sort_by(criterion);
            }

            for room in store.rooms() {
                println!("{}", room);
            }
            Ok(())
        }
        Command::Check { room, time, date } => {
            let store = load_store(cli.url, cli.file).await?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let available = store.is_available_at(&room, time)?;
            println!("{} is {} at {} on {}", room, if available { "available" } else { "NOT available" }, time, date.format("%d/%m/%Y"));
            Ok(())
        }
    }
}

async fn load_store(url: Option<String>, file: Option<String>) -> anyhow::Result<RoomStore> {
    let source: Box<dyn RoomSource> = match file {
        Some(path) => Box::new(FileRoomSource::new(path)),
        None => {
            let mut settings = Settings::from_env()?;
            if let Some(url) = url {
                settings.endpoint = url;
            }
            Box::new(HttpRoomSource::from_settings(&settings)?)
        }
    };

    let store = RoomStore::new();
    store.load(source.as_ref()).await.with_context(|| format!("Error fetching room data from '{}'", source.describe()))?;

    Ok(store)
}

fn scan(payloads: &[String]) {
    let mut scanner = Scanner::new(ConsoleOpener);

    for payload in payloads {
        if payload == REARM_TOKEN {
            scanner.rearm();
            continue;
        }

        if let ScanOutcome::Ignored = scanner.on_code_detected(payload) {
            println!("Ignored '{}': scan again to read another code.", payload);
        }
    }
}
