//! Logical input keys
//!
//! Physical key presses and clicks on the on-screen keyboard both translate into a
//! `LogicalKey` before reaching the game, so the two behave identically.

/// Letter rows of the QWERTY keyboard, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A key the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    /// An uppercase letter A-Z
    Letter(char),
    /// Submit the current guess
    Enter,
    /// Remove the last letter
    Backspace,
}

impl LogicalKey {
    /// Letter key from any ASCII letter, normalized to uppercase
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }

    /// Label shown on the on-screen keyboard
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_normalize_to_uppercase() {
        assert_eq!(LogicalKey::letter('a'), Some(LogicalKey::Letter('A')));
        assert_eq!(LogicalKey::letter('Z'), Some(LogicalKey::Letter('Z')));
        assert_eq!(LogicalKey::letter('1'), None);
        assert_eq!(LogicalKey::letter('é'), None);
    }

    #[test]
    fn rows_cover_alphabet_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('A'..='Z').collect::<Vec<_>>());
    }

    #[test]
    fn labels() {
        assert_eq!(LogicalKey::Letter('Q').label(), "Q");
        assert_eq!(LogicalKey::Enter.label(), "ENTER");
    }
}
