use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self as crossterm_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logscope::app::App;
use logscope::cli::{self, Args, Commands, ConfigAction};
use logscope::config;
use logscope::event::AppEvent;
use logscope::handlers;
use logscope::log_store::LogStore;
use logscope::signal::ShutdownFlag;
use logscope::tui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

const INPUT_POLL_DURATION_MS: u64 = 100;

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Commands::Config { action }) = &args.command {
        let result = match action {
            ConfigAction::Validate => cli::config::validate(),
            ConfigAction::Show => cli::config::show(),
        };
        if let Err(code) = result {
            std::process::exit(code);
        }
        return Ok(());
    }

    // Config problems are reported before the terminal is touched
    let (discovery, searched_paths) = config::discover_verbose();
    if args.verbose {
        for path in &searched_paths {
            eprintln!("[discovery] Searched: {}", path.display());
        }
        for (label, found) in [
            ("Project config", &discovery.project_config),
            ("Global config", &discovery.global_config),
        ] {
            eprintln!(
                "[discovery] {}: {}",
                label,
                found
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "not found".to_string())
            );
        }
    }
    let cfg = match config::load(&discovery) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprint!("{}", err);
            std::process::exit(1);
        }
    };

    let shutdown = match ShutdownFlag::install() {
        Ok(flag) => flag,
        Err(err) => {
            eprintln!("warning: Failed to set signal handlers: {}", err);
            ShutdownFlag::inert()
        }
    };

    let mut app = App::new(LogStore::sample(), args.app_options(cfg));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Main loop
    let res = run_app(&mut terminal, &mut app, &shutdown);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    shutdown: &ShutdownFlag,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    app.apply_event(AppEvent::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        // Draw shows the cursor only when the frame placed it on an input
        terminal
            .draw(|f| tui::render(f, app))
            .context("Failed to draw frame")?;

        let mut events = Vec::new();
        if crossterm_event::poll(Duration::from_millis(INPUT_POLL_DURATION_MS))? {
            match crossterm_event::read().context("Failed to read terminal event")? {
                Event::Key(key) => events.extend(handlers::input::handle_input_event(key, app)),
                Event::Resize(width, height) => {
                    terminal.clear()?;
                    events.push(AppEvent::Resize { width, height });
                }
                _ => {}
            }
        }

        for event in events {
            app.apply_event(event);
        }

        if app.should_quit || shutdown.is_requested() {
            break;
        }
    }

    Ok(())
}
