mod app;
mod chart;
mod config;
mod goals;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "goalgrid")]
#[command(about = "Mandala-style goal chart for the terminal")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/goalgrid/config.toml")]
    config: String,

    /// Theme preset, overriding the config file
    #[arg(long)]
    theme: Option<String>,

    /// List available theme presets and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goalgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_themes {
        for name in ui::theme::PRESETS {
            println!("{name}");
        }
        return Ok(());
    }

    // Load config; --theme wins over the config file
    let mut config = Config::load(&cli.config)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('t') => app.next_theme(),
                    KeyCode::Char('T') => app.prev_theme(),
                    _ => {}
                }
            }
        }
    }
}
