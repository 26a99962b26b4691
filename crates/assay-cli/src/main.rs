use anyhow::{Context, Result};
use assay_config::{Config, ConfigError};
use assay_engine::{ParseOptions, Parser, render::html, render::outline, unwrap_fenced_payload};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Read, Stdout, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use std::{env, fs, io, process};

mod clipboard;
mod viewer;

use clipboard::SystemClipboard;
use viewer::{Action, Viewer};

const DEFAULT_TITLE: &str = "Assistant's Response";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Html,
    Outline,
    Unwrap,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: Mode,
    input: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut mode = Mode::View;
    let mut input = None;

    for arg in args {
        let next_mode = match arg.as_str() {
            "--html" => Some(Mode::Html),
            "--outline" => Some(Mode::Outline),
            "--unwrap" => Some(Mode::Unwrap),
            "-" => None,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => {
                if input.is_some() {
                    return Err("only one input file may be given".to_string());
                }
                input = Some(PathBuf::from(path));
                None
            }
        };
        if let Some(m) = next_mode {
            if mode != Mode::View {
                return Err("only one of --html, --outline, --unwrap may be given".to_string());
            }
            mode = m;
        }
    }

    Ok(Args { mode, input })
}

/// Log level used when `RUST_LOG` is unset.
fn default_log_level(mode: Mode) -> log::LevelFilter {
    // The viewer owns the terminal; stray log lines would corrupt it.
    match mode {
        Mode::View => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    }
}

fn init_logging(mode: Mode) {
    env_logger::Builder::new()
        .filter_level(default_log_level(mode))
        .parse_default_env()
        .init();
}

/// Loads the config file, writing the defaults there on first run.
fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if let Some(config) = Config::load_from_path(path)? {
        return Ok(config);
    }

    let config = Config::default();
    match config.save_to_path(path) {
        Ok(()) => log::info!("Created default config file at {}", path.display()),
        Err(e) => log::warn!("Failed to create default config file: {e}"),
    }
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read response from {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read response from stdin")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    let raw_args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: assay [--html | --outline | --unwrap] [FILE]");
            process::exit(1);
        }
    };

    init_logging(args.mode);

    let config_path = Config::config_path();
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };
    log::info!("Config: {config:?}");

    let content = read_input(args.input.as_ref())?;
    let parser = Parser::with_options(ParseOptions {
        escape_html: config.escape_html,
    });

    match args.mode {
        Mode::Unwrap => println!("{}", unwrap_fenced_payload(&content)),
        Mode::Outline => println!("{}", outline::render(&parser.parse(&content))),
        Mode::Html => print!("{}", html::render_page(DEFAULT_TITLE, &parser.parse(&content))),
        Mode::View => {
            let title = args
                .input
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());
            let clipboard = SystemClipboard::resolve(config.clipboard_command.as_deref());
            let mut viewer = Viewer::new(
                title,
                parser.parse(&content),
                clipboard,
                config.copy_feedback(),
            );
            run_viewer(&mut viewer)?;
        }
    }

    Ok(())
}

fn run_viewer(viewer: &mut Viewer<SystemClipboard>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, viewer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    viewer: &mut Viewer<SystemClipboard>,
) -> Result<()> {
    loop {
        viewer.tick(Instant::now());
        terminal.draw(|f| viewer.draw(f))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && viewer.handle_key(key.code, Instant::now()) == Action::Quit
        {
            return Ok(());
        }
    }
}
