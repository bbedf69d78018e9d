use crossterm::event::KeyCode;

use crate::player::rates::RotateDirection;

/// Seek step for the arrow keys, in seconds.
pub const SEEK_STEP_SHORT: f64 = 5.0;
/// Seek step for `j` / `l`, in seconds.
pub const SEEK_STEP_LONG: f64 = 10.0;
/// Volume step for the arrow keys.
pub const VOLUME_STEP: f32 = 0.05;

/// A semantic player action decoded from a raw key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    TogglePlay,
    ToggleFullScreen,
    /// Leave page-fullscreen. Only acted on while page-fullscreen is
    /// active, but the key is still considered recognized either way.
    ExitPageFullScreen,
    /// Seek relative to the current position, in seconds.
    SeekBy(f64),
    /// Jump to `digit / 10` of the total duration.
    SeekToDecile(u32),
    /// Adjust volume by a signed step.
    VolumeBy(f32),
    ToggleMute,
    RotateRate(RotateDirection),
}

/// Key → intent lookup. Letters match case-insensitively; anything not
/// listed here is left to whoever else wants the key.
pub fn intent_for(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Char(c) => match c {
            ' ' | 'k' | 'K' => Some(Intent::TogglePlay),
            'f' | 'F' => Some(Intent::ToggleFullScreen),
            'j' | 'J' => Some(Intent::SeekBy(-SEEK_STEP_LONG)),
            'l' | 'L' => Some(Intent::SeekBy(SEEK_STEP_LONG)),
            'm' | 'M' => Some(Intent::ToggleMute),
            '0'..='9' => {
                Some(Intent::SeekToDecile(c as u32 - '0' as u32))
            }
            '<' => Some(Intent::RotateRate(RotateDirection::Prev)),
            '>' => Some(Intent::RotateRate(RotateDirection::Next)),
            _ => None,
        },
        KeyCode::Esc => Some(Intent::ExitPageFullScreen),
        KeyCode::Left => Some(Intent::SeekBy(-SEEK_STEP_SHORT)),
        KeyCode::Right => Some(Intent::SeekBy(SEEK_STEP_SHORT)),
        KeyCode::Up => Some(Intent::VolumeBy(VOLUME_STEP)),
        KeyCode::Down => Some(Intent::VolumeBy(-VOLUME_STEP)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_match_both_cases() {
        for (lower, upper) in
            [('k', 'K'), ('f', 'F'), ('j', 'J'), ('l', 'L'), ('m', 'M')]
        {
            assert_eq!(
                intent_for(KeyCode::Char(lower)),
                intent_for(KeyCode::Char(upper)),
            );
            assert!(intent_for(KeyCode::Char(lower)).is_some());
        }
    }

    #[test]
    fn space_and_k_toggle_play() {
        assert_eq!(
            intent_for(KeyCode::Char(' ')),
            Some(Intent::TogglePlay)
        );
        assert_eq!(
            intent_for(KeyCode::Char('k')),
            Some(Intent::TogglePlay)
        );
    }

    #[test]
    fn digits_map_to_their_decile() {
        for d in 0..=9u32 {
            let c = char::from_digit(d, 10).unwrap();
            assert_eq!(
                intent_for(KeyCode::Char(c)),
                Some(Intent::SeekToDecile(d))
            );
        }
    }

    #[test]
    fn arrows_seek_and_adjust_volume() {
        assert_eq!(
            intent_for(KeyCode::Left),
            Some(Intent::SeekBy(-5.0))
        );
        assert_eq!(
            intent_for(KeyCode::Right),
            Some(Intent::SeekBy(5.0))
        );
        assert_eq!(intent_for(KeyCode::Up), Some(Intent::VolumeBy(0.05)));
        assert_eq!(
            intent_for(KeyCode::Down),
            Some(Intent::VolumeBy(-0.05))
        );
    }

    #[test]
    fn angle_brackets_rotate_rate() {
        assert_eq!(
            intent_for(KeyCode::Char('<')),
            Some(Intent::RotateRate(RotateDirection::Prev))
        );
        assert_eq!(
            intent_for(KeyCode::Char('>')),
            Some(Intent::RotateRate(RotateDirection::Next))
        );
    }

    #[test]
    fn unlisted_keys_are_unmapped() {
        assert_eq!(intent_for(KeyCode::Char('z')), None);
        assert_eq!(intent_for(KeyCode::Tab), None);
        assert_eq!(intent_for(KeyCode::Enter), None);
    }
}
