//! Interactive practice timer that saves sessions to a running tracker API.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! start | pause | reset | status | quit
//! notes <text>        replace the session notes
//! mood <1-5>          rate the session mood
//! focus <1-5>         rate the session focus
//! area [n | text]     list presets, pick preset n, or set a custom area
//! save [name]         persist the elapsed time as a session
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use practice_tracker::domain::{
    FOCUS_AREA_PRESETS, Rating, SessionMetadata, TimerSession, rating_from_value,
};
use practice_tracker::outbound::http_client::PracticeApiClient;
use practice_tracker::settings::TimerSettings;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TimerCommand {
    Start,
    Pause,
    Reset,
    Status,
    Notes(String),
    Mood(Rating),
    Focus(Rating),
    ListAreas,
    Area(String),
    Save(Option<String>),
    Help,
    Quit,
}

fn parse_rating(argument: &str) -> Result<Rating, String> {
    let value: i64 = argument
        .parse()
        .map_err(|_| format!("expected a rating from 1 to 5, got {argument:?}"))?;
    rating_from_value(value).map_err(|error| error.to_string())
}

fn parse_area(argument: &str) -> Result<String, String> {
    match argument.parse::<usize>() {
        Ok(index) => index
            .checked_sub(1)
            .and_then(|slot| FOCUS_AREA_PRESETS.get(slot))
            .map(|preset| (*preset).to_owned())
            .ok_or_else(|| format!("preset must be between 1 and {}", FOCUS_AREA_PRESETS.len())),
        Err(_) => Ok(argument.to_owned()),
    }
}

fn parse_command(line: &str) -> Result<TimerCommand, String> {
    let line = line.trim();
    let (verb, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    match (verb.to_ascii_lowercase().as_str(), argument) {
        ("start", "") => Ok(TimerCommand::Start),
        ("pause", "") => Ok(TimerCommand::Pause),
        ("reset", "") => Ok(TimerCommand::Reset),
        ("status", "") | ("", "") => Ok(TimerCommand::Status),
        ("help", _) => Ok(TimerCommand::Help),
        ("quit" | "exit", "") => Ok(TimerCommand::Quit),
        ("notes", text) => Ok(TimerCommand::Notes(text.to_owned())),
        ("mood", value) => parse_rating(value).map(TimerCommand::Mood),
        ("focus", value) => parse_rating(value).map(TimerCommand::Focus),
        ("area", "") => Ok(TimerCommand::ListAreas),
        ("area", value) => parse_area(value).map(TimerCommand::Area),
        ("save", "") => Ok(TimerCommand::Save(None)),
        ("save", name) => Ok(TimerCommand::Save(Some(name.to_owned()))),
        (other, _) => Err(format!("unknown command {other:?}; type `help`")),
    }
}

fn print_help() {
    println!("commands: start, pause, reset, status, notes <text>, mood <1-5>,");
    println!("          focus <1-5>, area [n | text], save [name], quit");
}

fn print_areas() {
    for (index, preset) in FOCUS_AREA_PRESETS.iter().enumerate() {
        println!("  {}. {preset}", index + 1);
    }
}

fn print_status(session: &TimerSession, metadata: &SessionMetadata) {
    println!(
        "{} [{}] mood {} ({}), focus {} ({}), area {}",
        session.display(),
        session.state(),
        metadata.mood,
        metadata.mood.mood_label(),
        metadata.focus,
        metadata.focus.focus_label(),
        metadata.focus_area.as_deref().unwrap_or("-"),
    );
}

/// Applies one command; returns `false` when the loop should stop.
async fn apply(
    session: &TimerSession,
    metadata: &mut SessionMetadata,
    command: TimerCommand,
) -> bool {
    match command {
        TimerCommand::Start => match session.start() {
            Ok(()) => println!("running"),
            Err(error) => println!("{error}"),
        },
        TimerCommand::Pause => match session.pause() {
            Ok(()) => println!("paused at {}", session.display()),
            Err(error) => println!("{error}"),
        },
        TimerCommand::Reset => {
            session.reset();
            println!("reset");
        }
        TimerCommand::Status => print_status(session, metadata),
        TimerCommand::Notes(text) => session.set_notes(text),
        TimerCommand::Mood(rating) => metadata.mood = rating,
        TimerCommand::Focus(rating) => metadata.focus = rating,
        TimerCommand::ListAreas => print_areas(),
        TimerCommand::Area(area) => metadata.focus_area = Some(area),
        TimerCommand::Save(name) => {
            let request = SessionMetadata {
                name,
                ..metadata.clone()
            };
            match session.save(request).await {
                Ok(saved) => {
                    println!("saved {:?} ({}s) as {}", saved.name, saved.duration, saved.id);
                    *metadata = SessionMetadata::default();
                }
                Err(error) => println!("save failed: {error}"),
            }
        }
        TimerCommand::Help => print_help(),
        TimerCommand::Quit => return false,
    }
    true
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {error}");
    }

    let settings = TimerSettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let base_url = Url::parse(settings.api_url()).map_err(|error| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid API url {}: {error}", settings.api_url()),
        )
    })?;
    let client = PracticeApiClient::new(base_url, settings.timeout())
        .map_err(|error| io::Error::other(format!("build HTTP client: {error}")))?;
    let session = TimerSession::new(Arc::new(client), Arc::new(DefaultClock));
    let mut metadata = SessionMetadata::default();

    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(command) => {
                if !apply(&session, &mut metadata, command).await {
                    break;
                }
            }
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}
