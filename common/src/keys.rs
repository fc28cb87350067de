//! Keyboard handling for the text input.

/// Legacy `keyCode` of the Enter key.
pub const ENTER_KEY_CODE: u32 = 13;

/// What the component should do with a `keydown` event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyDisposition {
    /// Call `preventDefault` on the event.
    pub prevent_default: bool,
    /// Invoke the host's `on_enter_key_down` callback.
    pub enter: bool,
}

/// Classifies a key press. Enter never inserts a newline or submits a
/// surrounding form; it is handed to the host instead.
pub fn classify(key: &str, key_code: u32) -> KeyDisposition {
    let enter = key == "Enter" || key_code == ENTER_KEY_CODE;
    KeyDisposition {
        prevent_default: enter,
        enter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_is_suppressed() {
        let disposition = classify("Enter", ENTER_KEY_CODE);
        assert!(disposition.prevent_default);
        assert!(disposition.enter);
    }

    #[test]
    fn legacy_key_code_counts_as_enter() {
        assert!(classify("Unidentified", 13).enter);
    }

    #[test]
    fn other_keys_pass_through() {
        assert_eq!(classify("a", 65), KeyDisposition::default());
        assert_eq!(classify("Shift", 16), KeyDisposition::default());
    }
}
