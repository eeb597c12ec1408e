//! commitscope - binary entry point for the TUI application.

use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use commitscope::app::App;
use commitscope::cli::Cli;
use commitscope::config::Config;
use commitscope::data::load_commits;
use commitscope::logging;
use commitscope::model::Notification;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (config, config_warning) = match Config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    };
    let config = cli.apply(config);
    logging::init(config.log_file.as_deref())?;
    if let Some(warning) = &config_warning {
        tracing::warn!(%warning, "falling back to default config");
    }

    let mut load_error = None;
    let commits = match load_commits(&cli.path, &config.repository.name) {
        Ok(commits) => commits,
        Err(e) => {
            tracing::warn!(path = %cli.path.display(), error = %e, "loading failed, showing no data");
            load_error = Some(e.to_string());
            Vec::new()
        }
    };

    let mut app = App::new(commits, config);
    if let Some(progress) = cli.progress {
        app.set_progress(progress);
    }
    app.error_message = load_error;
    app.notification = Some(match config_warning {
        Some(warning) => Notification::warning(warning),
        None => Notification::info(format!("Loaded {} commits", app.commits().len())),
    });

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let _guard = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
    });
    run(terminal, app)
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    Ok(())
}

/// Handle crossterm events.
///
/// Polls with a timeout so expired notifications disappear without input.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(250))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key_event(key),
            Event::Mouse(mouse) => app.on_mouse_event(mouse),
            Event::Resize(width, height) => app.on_resize(width, height),
            _ => {}
        }
    }
    Ok(())
}
