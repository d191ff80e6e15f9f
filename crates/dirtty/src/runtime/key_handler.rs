use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;

/// Handles keyboard input for the listing console.
///
/// Row movement drives the same active-row state as pointer hover, so
/// the operation icons follow the keyboard cursor too.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return EventResult::Quit;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
        KeyCode::Enter => app.open_active(),
        KeyCode::Char('d') => app.delete_active(),
        KeyCode::Char('s') => app.download_active(),
        KeyCode::Char('u') | KeyCode::Backspace => app.ascend(),
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }

    EventResult::Continue
}
