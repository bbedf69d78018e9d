use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What kind of element owns keyboard focus when a key arrives.
///
/// Shortcuts must never hijack typing, so presses reaching a text-entry
/// widget are ignored by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Player,
    TextInput,
}

/// A single key press as routed through the key targets.
///
/// `consumed` marks presses some earlier handler already acted on
/// (e.g. a seek slider grabbing the arrow keys); the dispatcher leaves
/// those alone.
#[derive(Debug, Clone)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub consumed: bool,
    pub focus: Focus,
}

impl KeyPress {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            consumed: false,
            focus: Focus::Player,
        }
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn into_consumed(mut self) -> Self {
        self.consumed = true;
        self
    }

    /// True when alt, control or meta is held. Shift is deliberately not
    /// part of the set: `<`, `>` and uppercase letters arrive shifted.
    pub fn has_blocking_modifier(&self) -> bool {
        self.modifiers.intersects(
            KeyModifiers::ALT | KeyModifiers::CONTROL | KeyModifiers::META,
        )
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_not_a_blocking_modifier() {
        let press =
            KeyPress::new(KeyCode::Char('>'), KeyModifiers::SHIFT);
        assert!(!press.has_blocking_modifier());
    }

    #[test]
    fn alt_control_meta_block() {
        for modifiers in [
            KeyModifiers::ALT,
            KeyModifiers::CONTROL,
            KeyModifiers::META,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ] {
            let press = KeyPress::new(KeyCode::Up, modifiers);
            assert!(press.has_blocking_modifier(), "{modifiers:?}");
        }
    }
}
