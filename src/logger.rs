use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "room_viewer.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Initializes the global logger for the console front-end.
///
/// Log level is controlled by the `RUST_LOG` environment variable
/// (e.g. `RUST_LOG=debug room-viewer list`) and defaults to `info`.
/// Colored output goes to stderr; a plain copy is appended to `logs/room_viewer.log`
/// when that file can be opened.
pub fn init() {
    init_with_level(level_from_env());
}

pub fn init_with_level(level: LevelFilter) {
    let base_config = Dispatch::new()
        .level(level)
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("mio", LevelFilter::Warn);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = base_config.chain(console_config);

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let file_logging = match fs::create_dir_all(LOG_DIR).and_then(|_| fern::log_file(&log_file_path)) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format(TIMESTAMP_FORMAT),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file);
            dispatch = dispatch.chain(file_config);
            true
        }
        Err(e) => {
            eprintln!("Failed to open log file '{}': {}. Logging to console only.", log_file_path, e);
            false
        }
    };

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    if file_logging {
        log::debug!("Logger initialized. Logging to console and '{}'.", log_file_path);
    } else {
        log::debug!("Logger initialized. Logging to console.");
    }
}

fn level_from_env() -> LevelFilter {
    parse_level(std::env::var("RUST_LOG").ok().as_deref())
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value.and_then(|level| level.trim().parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info)
}
