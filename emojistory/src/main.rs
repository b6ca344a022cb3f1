//! Emojistory: type a story, watch it turn into emoji.
//!
//! A vim-style terminal interface. Every finished word is looked up in the
//! API Ninjas emoji service and its glyph is appended to the story.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! echo "the cat sat by the fire" | cargo run -p emojistory -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use emoji_client::{EmojiClient, API_KEY_VAR};
use emojistory_core::{Applied, FinderConfig, LookupTrigger, NotFoundPolicy, Resolver};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[derive(Parser, Debug)]
#[command(name = "emojistory", version, about = "Type a story, watch it turn into emoji")]
struct Args {
    /// Run without the TUI, reading story text from stdin
    #[arg(long)]
    headless: bool,

    /// When words are looked up: as each word is finished, or on Enter
    #[arg(long, default_value_t = LookupTrigger::Implicit)]
    trigger: LookupTrigger,

    /// What to do when no emoji matches: sentinel, echo-word or error
    #[arg(long, default_value_t = NotFoundPolicy::Sentinel)]
    on_not_found: NotFoundPolicy,

    /// Refuse input while a lookup is in flight
    #[arg(long)]
    lock_input: bool,

    /// Start with emoji names visible
    #[arg(long)]
    show_names: bool,

    /// API Ninjas key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    api_key: Option<String>,

    /// Override the emoji API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log lookups at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn finder_config(&self) -> FinderConfig {
        FinderConfig::new()
            .with_trigger(self.trigger)
            .with_not_found(self.on_not_found)
            .with_input_lock(self.lock_input)
            .with_names(self.show_names)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args)?;

    let Some(api_key) = args.api_key.clone().filter(|k| !k.trim().is_empty()) else {
        eprintln!("Error: {API_KEY_VAR} environment variable not set.");
        eprintln!("Please set it in .env file or with: export {API_KEY_VAR}=your_key_here");
        std::process::exit(1);
    };

    let mut client = EmojiClient::new(api_key)?;
    if let Some(url) = &args.base_url {
        client = client.with_base_url(url);
    }
    let resolver = Resolver::new(client);
    let config = args.finder_config();
    tracing::info!(?config, "starting emojistory");

    if args.headless {
        return headless::run_headless(config, resolver)
            .await
            .map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(config, resolver)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so it only logs when a log file is given.
/// Headless mode logs warnings to stderr, or everything with `--verbose`.
fn init_logging(args: &Args) -> io::Result<()> {
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if args.headless {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        for applied in app.drain_completions() {
            match applied {
                Applied::Appended { word, entry, .. } => {
                    tracing::debug!(%word, glyph = %entry.glyph, "appended");
                }
                Applied::Rejected { word, message, .. } => {
                    tracing::debug!(%word, %message, "rejected");
                }
            }
        }

        // Render
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with timeout for animations
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::Lookup(pending) => app.dispatch(pending),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            // Tick animations
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
