//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Brand;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Brand selector
    NextBrand,
    PrevBrand,
    SelectBrand(Brand),

    // Fetch actions
    Refresh,
    CancelFetch,

    // Card navigation
    NextCar,
    PrevCar,

    // Popups
    ToggleHelp,
    CloseHelp,
    ToggleActivity,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool, show_activity: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('x') => return Some(UiEvent::CancelFetch),
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            _ => {}
        }
    }

    // Popups swallow everything else
    if show_help {
        return Some(UiEvent::CloseHelp);
    }
    if show_activity {
        return Some(UiEvent::ToggleActivity);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('a') => Some(UiEvent::ToggleActivity),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Char('x') => Some(UiEvent::CancelFetch),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevBrand),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextBrand),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevCar),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextCar),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Brand::from_index(index).map(UiEvent::SelectBrand)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_select_brands_in_tab_order() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('1')), false, false),
            Some(UiEvent::SelectBrand(Brand::All))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('2')), false, false),
            Some(UiEvent::SelectBrand(Brand::Fiat))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('6')), false, false),
            Some(UiEvent::SelectBrand(Brand::Toyota))
        );
    }

    #[test]
    fn arrows_cycle_the_brand_filter() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Right), false, false),
            Some(UiEvent::NextBrand)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Left), false, false),
            Some(UiEvent::PrevBrand)
        );
    }

    #[test]
    fn help_popup_swallows_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('r')), true, false),
            Some(UiEvent::CloseHelp)
        );
    }

    #[test]
    fn ctrl_c_quits_even_inside_popups() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true, false), Some(UiEvent::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false, false), None);
    }
}
