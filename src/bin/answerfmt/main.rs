//! Command-line interface for answer-render
//! This binary renders assistant answers into structured formats, or reveals them in a terminal viewer.
//!
//! Usage:
//!   answerfmt render `<path>` [--format `<format>`] [--part `<part>`] [--message]  - Print the classified document
//!   answerfmt view `<path>` [--config `<toml>`] [--tick-ms `<ms>`] [--message]     - Open an interactive TUI viewer
//!   answerfmt list-formats                                                    - List all available formats
//!
//! Input is raw answer text unless `--message` is given, in which case it is an assistant
//! message in the backend's JSON shape (`_id`, `text`, `thought`, `answer`).
mod viewer;

use answer_render::answer::config::{ConfigError, Loader};
use answer_render::answer::formats::{FormatError, OutputFormat};
use answer_render::answer::message::{AssistantMessage, ContentPart, MessageView};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Everything that can stop the CLI
#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: io::Error },
    Message(serde_json::Error),
    Format(FormatError),
    Config(ConfigError),
    MissingPart(ContentPart),
    Terminal(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            CliError::Message(err) => write!(f, "Invalid assistant message: {}", err),
            CliError::Format(err) => write!(f, "{}", err),
            CliError::Config(err) => write!(f, "Invalid configuration: {}", err),
            CliError::MissingPart(part) => write!(f, "Message has no {} part", part),
            CliError::Terminal(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<FormatError> for CliError {
    fn from(err: FormatError) -> Self {
        CliError::Format(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

fn main() {
    init_logging();

    let matches = Command::new("answerfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and revealing assistant answers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Classify an answer and print the document")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(value_parser!(OutputFormat))
                        .default_value("tag"),
                )
                .arg(
                    Arg::new("part")
                        .long("part")
                        .short('p')
                        .help("Which content part of a message to render")
                        .value_parser(["answer", "thought"])
                        .default_value("answer"),
                )
                .arg(message_arg()),
        )
        .subcommand(
            Command::new("view")
                .about("Open an interactive TUI viewer")
                .arg(path_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("tick-ms")
                        .long("tick-ms")
                        .help("Milliseconds between revealed characters")
                        .value_parser(value_parser!(u64)),
                )
                .arg(message_arg()),
        )
        .subcommand(Command::new("list-formats").about("List all available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("view", view_matches)) => handle_view_command(view_matches),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(io::stderr)
        .try_init();
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the answer file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .index(1)
}

fn message_arg() -> Arg {
    Arg::new("message")
        .long("message")
        .short('m')
        .help("Treat the file as an assistant message JSON instead of raw text")
        .action(ArgAction::SetTrue)
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> Result<(), CliError> {
    let message = load_message(matches)?;
    let part = match matches.get_one::<String>("part").map(String::as_str) {
        Some("thought") => ContentPart::Thought,
        _ => ContentPart::Answer,
    };
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(OutputFormat::Tag);

    let view = MessageView::new(message);
    let document = view.document(part).ok_or(CliError::MissingPart(part))?;
    let output = format.serialize(document)?;
    print!("{}", output);
    Ok(())
}

/// Handle the view command
fn handle_view_command(matches: &ArgMatches) -> Result<(), CliError> {
    let message = load_message(matches)?;

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(tick_ms) = matches.get_one::<u64>("tick-ms") {
        loader = loader.set_override("reveal.tick_interval_ms", *tick_ms as i64)?;
    }
    let config = loader.build()?;
    debug!(?config, "viewer configuration loaded");

    viewer::viewer_main::run_viewer(MessageView::new(message), config).map_err(CliError::Terminal)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format);
        println!("    {}", format.description());
    }
}

fn load_message(matches: &ArgMatches) -> Result<AssistantMessage, CliError> {
    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is a required argument");
    let content = read_file(path)?;
    if matches.get_flag("message") {
        serde_json::from_str(&content).map_err(CliError::Message)
    } else {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("answer");
        Ok(AssistantMessage::new(id, content))
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
