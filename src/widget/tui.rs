use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::config::Settings;
use crate::remote::{CommandRelay, RemoteCommand};
use crate::status::{FileStore, StatusStore};

use super::view::{WidgetView, scrub_target, toggle_command};

/// Run the widget until `q` is pressed.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_or_default();
    let store = FileStore::new(settings.status.status_path());
    let relay = CommandRelay::new(settings.status.command_path());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = run_loop(&mut terminal, &settings, &store, &relay);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    store: &FileStore,
    relay: &CommandRelay,
) -> Result<(), Box<dyn std::error::Error>> {
    let refresh = Duration::from_millis(settings.widget.refresh_ms.max(1));
    let scrub = settings.widget.scrub_seconds as i64;

    loop {
        // One read per pass, rendered as-is. Commands issued below do not
        // touch this snapshot; the display catches up on a later pass.
        let snapshot = store.read_latest();
        let view = WidgetView::from_snapshot(&snapshot);
        terminal.draw(|f| draw(f, &view))?;

        if event::poll(refresh)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') | KeyCode::Char('p') => {
                        relay.send(toggle_command(&snapshot));
                    }
                    KeyCode::Char('n') => relay.send(RemoteCommand::Next),
                    KeyCode::Char('b') => relay.send(RemoteCommand::Previous),
                    KeyCode::Left => {
                        relay.send(RemoteCommand::Seek(scrub_target(&snapshot, -scrub)));
                    }
                    KeyCode::Right => {
                        relay.send(RemoteCommand::Seek(scrub_target(&snapshot, scrub)));
                    }
                    KeyCode::Char('0') => relay.send(RemoteCommand::Seek(Duration::ZERO)),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, view: &WidgetView) {
    let mut lines = vec![
        Line::styled(
            view.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(view.artist.clone()),
        Line::raw(view.status.clone()),
    ];
    if view.has_artwork {
        lines.push(Line::raw("♪ artwork attached"));
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(
        "[space] play/pause | [b/n] prev/next | [←/→] scrub | [0] restart | [q] quit",
    ));

    let block = Block::default().borders(Borders::ALL).title(" segno ");
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    f.render_widget(paragraph, f.area());
}
