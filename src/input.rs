use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    Input(char),   // typed into the focused text field
    Backspace,
    CycleLeft,     // frequency selector / day cursor
    CycleRight,
    Toggle,        // space: toggle the day under the cursor
    Confirm,       // Enter: save the form / dismiss the popup
    Back,          // Esc: dismiss popup or help
    SelectUp,
    SelectDown,
    Delete,        // delete the selected reminder
    CycleTheme,
    ShowHelp,
    JumpTop,
    JumpBottom,
    None,
}

/// What kind of widget currently owns the keyboard. Text fields consume
/// printable characters, so most single-letter shortcuts only exist in
/// list context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputContext {
    TextField,
    Selector,
    List,
    Modal,
}

pub fn handle_key(key: KeyEvent, ctx: InputContext) -> Action {
    // Global bindings, valid in every context.
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::F(1), _) => return Action::ShowHelp,
        _ => {}
    }

    // A due popup swallows everything except dismissal.
    if ctx == InputContext::Modal {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::Confirm,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _)     => return Action::FocusNext,
        (KeyCode::BackTab, _) => return Action::FocusPrev,
        (KeyCode::Esc, _)     => return Action::Back,
        (KeyCode::Enter, _)   => return Action::Confirm,
        _ => {}
    }

    match ctx {
        InputContext::TextField => match key.code {
            KeyCode::Char(c)   => Action::Input(c),
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Up        => Action::FocusPrev,
            KeyCode::Down      => Action::FocusNext,
            _ => Action::None,
        },

        InputContext::Selector => match key.code {
            KeyCode::Left  | KeyCode::Char('h') => Action::CycleLeft,
            KeyCode::Right | KeyCode::Char('l') => Action::CycleRight,
            KeyCode::Char(' ')                  => Action::Toggle,
            KeyCode::Up   | KeyCode::Char('k')  => Action::FocusPrev,
            KeyCode::Down | KeyCode::Char('j')  => Action::FocusNext,
            _ => Action::None,
        },

        InputContext::List => match key.code {
            KeyCode::Char('q')                     => Action::Quit,
            KeyCode::Up   | KeyCode::Char('k')     => Action::SelectUp,
            KeyCode::Down | KeyCode::Char('j')     => Action::SelectDown,
            KeyCode::Char('d') | KeyCode::Delete   => Action::Delete,
            KeyCode::Char('t')                     => Action::CycleTheme,
            KeyCode::Char('?')                     => Action::ShowHelp,
            KeyCode::Char('g') | KeyCode::Home     => Action::JumpTop,
            KeyCode::Char('G') | KeyCode::End      => Action::JumpBottom,
            _ => Action::None,
        },

        InputContext::Modal => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn chars_type_into_text_fields() {
        assert_eq!(handle_key(key(KeyCode::Char('q')), InputContext::TextField), Action::Input('q'));
        assert_eq!(handle_key(key(KeyCode::Backspace), InputContext::TextField), Action::Backspace);
    }

    #[test]
    fn list_context_has_shortcuts() {
        assert_eq!(handle_key(key(KeyCode::Char('q')), InputContext::List), Action::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('d')), InputContext::List), Action::Delete);
        assert_eq!(handle_key(key(KeyCode::Char('j')), InputContext::List), Action::SelectDown);
    }

    #[test]
    fn modal_swallows_everything_but_dismissal() {
        assert_eq!(handle_key(key(KeyCode::Char('q')), InputContext::Modal), Action::None);
        assert_eq!(handle_key(key(KeyCode::Tab), InputContext::Modal), Action::None);
        assert_eq!(handle_key(key(KeyCode::Enter), InputContext::Modal), Action::Confirm);
        assert_eq!(handle_key(key(KeyCode::Esc), InputContext::Modal), Action::Confirm);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [InputContext::TextField, InputContext::Selector, InputContext::List, InputContext::Modal] {
            assert_eq!(handle_key(ev, ctx), Action::Quit);
        }
    }
}
