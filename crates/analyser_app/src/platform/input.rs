use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::InputRequest;

/// What a key press means to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    Submit,
    Clear,
    Edit(InputRequest),
    Scroll(i32),
}

pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('c') if ctrl => UiAction::Quit,
        KeyCode::Char('l') if ctrl => UiAction::Clear,
        KeyCode::Char('u') if ctrl => UiAction::Edit(InputRequest::DeleteLine),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => UiAction::Edit(InputRequest::InsertChar(ch)),
        KeyCode::Enter => UiAction::Submit,
        KeyCode::Backspace => UiAction::Edit(InputRequest::DeletePrevChar),
        KeyCode::Delete => UiAction::Edit(InputRequest::DeleteNextChar),
        KeyCode::Left => UiAction::Edit(InputRequest::GoToPrevChar),
        KeyCode::Right => UiAction::Edit(InputRequest::GoToNextChar),
        KeyCode::Home => UiAction::Edit(InputRequest::GoToStart),
        KeyCode::End => UiAction::Edit(InputRequest::GoToEnd),
        KeyCode::Up => UiAction::Scroll(-1),
        KeyCode::Down => UiAction::Scroll(1),
        KeyCode::PageUp => UiAction::Scroll(-10),
        KeyCode::PageDown => UiAction::Scroll(10),
        _ => return None,
    };
    Some(action)
}
