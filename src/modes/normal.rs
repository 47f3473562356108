use std::borrow::Cow;

use crossterm::event::{Event, KeyCode, KeyModifiers};
use lazy_static::lazy_static;
use maplit::hashmap;

use crate::keymap::KeyMap;
use crate::modes::Command;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Action {
    Issue(Command),
    /// First or second half of `g g`.
    Goto,
}

fn default_maps() -> KeyMap<Action> {
    KeyMap {
        maps: hashmap! {
            (KeyCode::Esc, KeyModifiers::NONE) => Action::Issue(Command::Quit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Issue(Command::Quit),
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::Issue(Command::MovePageDown),
            (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::Issue(Command::MovePageUp),
            (KeyCode::Char('j'), KeyModifiers::NONE) => Action::Issue(Command::MoveLineDown),
            (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Issue(Command::MoveLineUp),
            (KeyCode::Char('g'), KeyModifiers::NONE) => Action::Goto,
            (KeyCode::Char('G'), KeyModifiers::NONE) => Action::Issue(Command::JumpEnd),
            (KeyCode::Char(':'), KeyModifiers::NONE) => Action::Issue(Command::EnterCommandMode),
            (KeyCode::Char('/'), KeyModifiers::NONE) => Action::Issue(Command::EnterSearchMode),
        },
    }
}

lazy_static! {
    static ref DEFAULT_MAPS: KeyMap<Action> = default_maps();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
enum Chord {
    #[default]
    Idle,
    PendingGoto,
}

/// Turns key events into [`Command`]s.
///
/// A single `g` is held until the next key: another `g` completes the jump to
/// the start, anything else drops it.
#[derive(Debug, Default)]
pub struct Normal {
    chord: Chord,
}

impl Normal {
    pub fn new() -> Normal {
        Normal::default()
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self.chord {
            Chord::Idle => "NORMAL".into(),
            Chord::PendingGoto => "GOTO".into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.chord == Chord::PendingGoto
    }

    /// Non-key events are ignored and leave a pending chord intact.
    pub fn transition(&mut self, evt: &Event) -> Option<Command> {
        if !matches!(evt, Event::Key(_)) {
            return None;
        }
        let was_pending = std::mem::take(&mut self.chord) == Chord::PendingGoto;
        match DEFAULT_MAPS.event_to_action(evt) {
            Some(Action::Issue(command)) => Some(command),
            Some(Action::Goto) if was_pending => Some(Command::JumpStart),
            Some(Action::Goto) => {
                self.chord = Chord::PendingGoto;
                None
            }
            None => None,
        }
    }
}
