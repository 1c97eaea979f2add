use crossbeam_channel::Receiver;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use word_quiz::models::LoadEvent;
use word_quiz::{App, AppState, QuizConfig, draw_quiz, handle_quiz_input, logger, spawn_loader};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizConfig::load()?;
    if let Some(path) = &config.log_file {
        logger::init(path);
    }
    logger::log("Starting word quiz");

    let (request_tx, request_rx) = crossbeam_channel::unbounded();
    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let loader = spawn_loader(event_tx, request_rx)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Release events for Left Shift need the kitty keyboard protocol.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
            )
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, request_tx);
    let result = run(&mut terminal, &mut app, &event_rx);

    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // dropping the app closes the request channel and stops the loader
    drop(app);
    if loader.join().is_err() {
        logger::log("Loader thread panicked");
    }

    result?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_events: &Receiver<LoadEvent>,
) -> io::Result<()> {
    let mut last_drawn = None;

    while app.app_state != AppState::Exiting {
        app.dispatch_loads();
        while let Ok(load_event) = load_events.try_recv() {
            app.process_load_event(load_event);
        }

        let ui_state = app.ui_state();
        if last_drawn != Some(ui_state) {
            terminal.draw(|f| draw_quiz(f, app))?;
            last_drawn = Some(ui_state);
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => handle_quiz_input(app, key),
                Event::Resize(_, _) => last_drawn = None,
                _ => {}
            }
        }
    }

    logger::log("Exiting word quiz");
    Ok(())
}
