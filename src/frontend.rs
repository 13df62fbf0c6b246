use crate::app::{App, SettingsEvent};
use common::settings::{MAX_WHITESPACE, Settings};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;

/// What a key press asks the app to do
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Setting(SettingsEvent),
}

/// Owns the terminal for the control panel. Raw mode and the alternate
/// screen are entered on construction and restored on drop, whichever way
/// the loop exits.
pub struct Frontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Frontend {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Frontend { terminal })
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|f| crate::ui::draw(f, app))?;
        Ok(())
    }

    /// Drain pending key events until one maps to an input; `None` once the
    /// queue is empty this tick
    pub fn poll_input(&mut self, settings: &Settings) -> io::Result<Option<Input>> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key.code, settings) {
                    return Ok(Some(input));
                }
            }
        }

        Ok(None)
    }
}

impl Drop for Frontend {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}

/// One control per key: the three checkbox toggles, the whitespace slider
/// (the arrow keys report an absolute value, the way a slider does), and
/// the reset button
fn map_key(code: KeyCode, settings: &Settings) -> Option<Input> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('v') => Some(Input::Setting(SettingsEvent::ToggleShowVideo)),
        KeyCode::Char('c') => Some(Input::Setting(SettingsEvent::ToggleColoured)),
        KeyCode::Char('r') => Some(Input::Setting(SettingsEvent::ToggleReversed)),
        KeyCode::Left => Some(Input::Setting(SettingsEvent::SetWhitespace(
            settings.whitespace.saturating_sub(1),
        ))),
        KeyCode::Right => Some(Input::Setting(SettingsEvent::SetWhitespace(
            (settings.whitespace + 1).min(MAX_WHITESPACE),
        ))),
        KeyCode::Char('0') => Some(Input::Setting(SettingsEvent::Reset)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_their_controls() {
        let settings = Settings::default();

        assert_eq!(map_key(KeyCode::Char('q'), &settings), Some(Input::Quit));
        assert_eq!(
            map_key(KeyCode::Char('c'), &settings),
            Some(Input::Setting(SettingsEvent::ToggleColoured))
        );
        assert_eq!(map_key(KeyCode::Char('z'), &settings), None);
    }

    #[test]
    fn arrow_keys_report_absolute_slider_positions() {
        let mut settings = Settings::default();

        assert_eq!(
            map_key(KeyCode::Right, &settings),
            Some(Input::Setting(SettingsEvent::SetWhitespace(16)))
        );

        settings.set_whitespace(MAX_WHITESPACE);
        assert_eq!(
            map_key(KeyCode::Right, &settings),
            Some(Input::Setting(SettingsEvent::SetWhitespace(MAX_WHITESPACE)))
        );

        settings.set_whitespace(0);
        assert_eq!(
            map_key(KeyCode::Left, &settings),
            Some(Input::Setting(SettingsEvent::SetWhitespace(0)))
        );
    }
}
