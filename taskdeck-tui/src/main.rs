//! TaskDeck — terminal dashboard for a project/assessment workspace.
//!
//! Pages:
//! 1. Dashboard — project details, completion gauge, activity, team
//! 2. Timeline — milestones with status markers
//! 3. Table — assessment roster with identity verification
//! 4. Drafting — document drafts and stages

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use taskdeck_tui::app::AppState;
use taskdeck_tui::{input, persistence, ui};

#[derive(Parser)]
#[command(name = "taskdeck", about = "TaskDeck — project & assessment dashboard")]
struct Cli {
    /// Path to a TOML project data file. Defaults to the embedded sample.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Override the UI state file location.
    #[arg(long)]
    state: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Display data: an explicit file, or the embedded sample.
    let (data, source) = match &cli.data {
        Some(path) => {
            let data = taskdeck_model::load(path)
                .with_context(|| format!("loading data file {}", path.display()))?;
            (data, format!("Loaded {}", path.display()))
        }
        None => (
            taskdeck_model::sample_project(),
            "Showing sample project".to_string(),
        ),
    };

    let state_path = cli.state.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskdeck")
            .join("state.json")
    });

    // Load persisted UI state
    let persisted = persistence::load(&state_path);

    // Build app state
    let mut app = AppState::new(data, state_path);
    persistence::apply(&mut app, persisted);
    app.set_status(source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save UI state before exit
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&app.state_path, &persisted);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
