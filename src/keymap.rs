use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Lookup table from a key press to an action.
///
/// Character keys ignore SHIFT, since terminals disagree on whether `G`
/// arrives with the modifier set.
pub struct KeyMap<A> {
    pub maps: HashMap<(KeyCode, KeyModifiers), A>,
}

impl<A: Copy> KeyMap<A> {
    pub fn event_to_action(&self, evt: &Event) -> Option<A> {
        match evt {
            Event::Key(KeyEvent { code, modifiers }) => {
                self.maps.get(&normalize(*code, *modifiers)).copied()
            }
            _ => None,
        }
    }
}

fn normalize(code: KeyCode, modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    match code {
        KeyCode::Char(_) => (code, modifiers & !KeyModifiers::SHIFT),
        _ => (code, modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn shift_is_ignored_for_characters_only() {
        let map = KeyMap {
            maps: hashmap! {
                (KeyCode::Char('G'), KeyModifiers::NONE) => 1,
                (KeyCode::Tab, KeyModifiers::NONE) => 2,
            },
        };
        assert_eq!(
            map.event_to_action(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(1)
        );
        assert_eq!(
            map.event_to_action(&key(KeyCode::Char('G'), KeyModifiers::NONE)),
            Some(1)
        );
        assert_eq!(
            map.event_to_action(&key(KeyCode::Tab, KeyModifiers::SHIFT)),
            None
        );
        assert_eq!(map.event_to_action(&Event::Resize(80, 24)), None);
    }
}
