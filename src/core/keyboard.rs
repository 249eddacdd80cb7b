//! Digit hotkeys for direct thumbnail selection.

use crate::config::HOTKEY_SLOTS;

/// Map a `KeyboardEvent.key` value to a hotkey slot (`1..=9`).
pub fn hotkey_slot(key: &str) -> Option<usize> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || digit == 0 || digit > HOTKEY_SLOTS {
        return None;
    }
    Some(digit)
}

/// Badge text for the thumbnail at `position`, if it has a hotkey.
pub fn hotkey_label(position: usize) -> Option<String> {
    (position < HOTKEY_SLOTS).then(|| (position + 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(hotkey_slot("1"), Some(1));
        assert_eq!(hotkey_slot("9"), Some(9));
    }

    #[test]
    fn test_non_hotkeys() {
        assert_eq!(hotkey_slot("0"), None);
        assert_eq!(hotkey_slot(""), None);
        assert_eq!(hotkey_slot("a"), None);
        assert_eq!(hotkey_slot("10"), None);
        assert_eq!(hotkey_slot("Enter"), None);
        assert_eq!(hotkey_slot("٣"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(hotkey_label(0).as_deref(), Some("1"));
        assert_eq!(hotkey_label(8).as_deref(), Some("9"));
        assert_eq!(hotkey_label(9), None);
    }
}
