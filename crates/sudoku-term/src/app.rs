use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use sudoku_engine::BoardError;

use crate::game::{Game, Phase};
use crate::ui;

pub fn run(hints: u8) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new(hints)?;
    let result = run_loop(&mut terminal, &mut game);

    // Clean up terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        if let Event::Key(key) = event::read()? {
            // Only handle Press events (crossterm sends Press+Release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_key(game, key)? {
                return Ok(());
            }
        }
    }
}

/// Handle a key event. Returns true if the app should quit.
fn handle_key(game: &mut Game, key: KeyEvent) -> Result<bool, BoardError> {
    match game.phase {
        Phase::Playing => handle_playing_key(game, key),
        Phase::Finished => handle_finished_key(game, key),
    }
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> Result<bool, BoardError> {
    match key.code {
        // Movement: arrow keys
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),

        // Digits 0-9; 0 erases
        KeyCode::Char(c @ '0'..='9') => game.enter_digit(c as u8 - b'0'),
        KeyCode::Delete | KeyCode::Backspace => game.enter_digit(0),

        // New game
        KeyCode::Char('n') | KeyCode::Char('N') => game.start_new_game()?,

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),

        _ => {}
    }
    Ok(false)
}

fn handle_finished_key(game: &mut Game, key: KeyEvent) -> Result<bool, BoardError> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => game.start_new_game()?,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}
